//! Composable chain descriptions.

use std::rc::Rc;

use crate::Strategy;
use crate::pull::{Filter, FlatMap, Map, Source, Take};
use crate::terminal::Terminal;
use crate::traversal::Probe;

/// A boxed element stream flowing between lazy stages.
pub(crate) type Pipe<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

type EagerStages<'a, In, Out> = Rc<dyn Fn(Vec<In>, &Probe) -> Vec<Out> + 'a>;
type LazyStages<'a, In, Out> = Rc<dyn Fn(Pipe<'a, In>, &Probe) -> Pipe<'a, Out> + 'a>;

/// The kind of a stage in a chain, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Filter,
    Map,
    FlatMap,
    Take(usize),
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageKind::Filter => write!(f, "filter"),
            StageKind::Map => write!(f, "map"),
            StageKind::FlatMap => write!(f, "flat_map"),
            StageKind::Take(n) => write!(f, "take({n})"),
        }
    }
}

/// A description of per-element stages turning `In` elements into `Out`
/// elements.
///
/// Building a chain does no work. Each stage function is stored once and
/// shared by both strategies, so an eager and a lazy evaluation of the same
/// chain run exactly the same user code. Stage functions must be pure; the
/// engine calls them a strategy-dependent number of times.
///
/// ```
/// use engine::{Chain, Strategy};
///
/// let evens_squared = Chain::new().filter(|x: &i32| x % 2 == 0).map(|x| x * x);
///
/// let eager = evens_squared.evaluate(1..=6, Strategy::Eager).collect();
/// let lazy = evens_squared.evaluate(1..=6, Strategy::Lazy).collect();
/// assert_eq!(eager.output, vec![4, 16, 36]);
/// assert_eq!(eager.output, lazy.output);
/// ```
pub struct Chain<'a, In, Out> {
    stages: Vec<StageKind>,
    eager: EagerStages<'a, In, Out>,
    lazy: LazyStages<'a, In, Out>,
}

impl<'a, T: 'a> Chain<'a, T, T> {
    /// Creates an empty chain that passes elements through unchanged.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            eager: Rc::new(|source: Vec<T>, _: &Probe| source),
            lazy: Rc::new(|source: Pipe<'a, T>, _: &Probe| source),
        }
    }
}

impl<'a, T: 'a> Default for Chain<'a, T, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Out> Clone for Chain<'_, In, Out> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
            eager: Rc::clone(&self.eager),
            lazy: Rc::clone(&self.lazy),
        }
    }
}

impl<In, Out> std::fmt::Debug for Chain<'_, In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("stages", &self.stages).finish()
    }
}

impl<'a, In: 'a, Out: 'a> Chain<'a, In, Out> {
    /// Returns the stages in application order.
    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }

    /// Keeps only elements satisfying `pred`.
    pub fn filter<P>(self, pred: P) -> Chain<'a, In, Out>
    where
        P: Fn(&Out) -> bool + 'a,
    {
        let pred = Rc::new(pred);
        let eager_pred = Rc::clone(&pred);
        let (upstream_eager, upstream_lazy) = (self.eager, self.lazy);

        Chain {
            stages: with_stage(self.stages, StageKind::Filter),
            eager: Rc::new(move |source: Vec<In>, probe: &Probe| {
                pipeline::filter(upstream_eager(source, probe), |item| {
                    probe.record_call();
                    eager_pred(item)
                })
            }),
            lazy: Rc::new(move |source: Pipe<'a, In>, probe: &Probe| -> Pipe<'a, Out> {
                let upstream = upstream_lazy(source, probe);
                Box::new(Filter::new(upstream, Rc::clone(&pred), probe.clone()))
            }),
        }
    }

    /// Transforms each element.
    pub fn map<U, F>(self, f: F) -> Chain<'a, In, U>
    where
        U: 'a,
        F: Fn(Out) -> U + 'a,
    {
        let f = Rc::new(f);
        let eager_f = Rc::clone(&f);
        let (upstream_eager, upstream_lazy) = (self.eager, self.lazy);

        Chain {
            stages: with_stage(self.stages, StageKind::Map),
            eager: Rc::new(move |source: Vec<In>, probe: &Probe| {
                pipeline::map(upstream_eager(source, probe), |item| {
                    probe.record_call();
                    eager_f(item)
                })
            }),
            lazy: Rc::new(move |source: Pipe<'a, In>, probe: &Probe| -> Pipe<'a, U> {
                let upstream = upstream_lazy(source, probe);
                Box::new(Map::new(upstream, Rc::clone(&f), probe.clone()))
            }),
        }
    }

    /// Expands each element into a sequence and concatenates the results.
    pub fn flat_map<J, F>(self, f: F) -> Chain<'a, In, J::Item>
    where
        J: IntoIterator + 'a,
        J::IntoIter: 'a,
        J::Item: 'a,
        F: Fn(Out) -> J + 'a,
    {
        let f = Rc::new(f);
        let eager_f = Rc::clone(&f);
        let (upstream_eager, upstream_lazy) = (self.eager, self.lazy);

        Chain {
            stages: with_stage(self.stages, StageKind::FlatMap),
            eager: Rc::new(move |source: Vec<In>, probe: &Probe| {
                pipeline::flat_map(upstream_eager(source, probe), |item| {
                    probe.record_call();
                    eager_f(item)
                })
            }),
            lazy: Rc::new(
                move |source: Pipe<'a, In>, probe: &Probe| -> Pipe<'a, J::Item> {
                    let upstream = upstream_lazy(source, probe);
                    Box::new(FlatMap::<_, _, J>::new(
                        upstream,
                        Rc::clone(&f),
                        probe.clone(),
                    ))
                },
            ),
        }
    }

    /// Keeps at most the first `limit` elements.
    pub fn take(self, limit: usize) -> Chain<'a, In, Out> {
        let (upstream_eager, upstream_lazy) = (self.eager, self.lazy);

        Chain {
            stages: with_stage(self.stages, StageKind::Take(limit)),
            eager: Rc::new(move |source: Vec<In>, probe: &Probe| {
                let mut kept = upstream_eager(source, probe);
                kept.truncate(limit);
                kept
            }),
            lazy: Rc::new(move |source: Pipe<'a, In>, probe: &Probe| -> Pipe<'a, Out> {
                Box::new(Take::new(upstream_lazy(source, probe), limit))
            }),
        }
    }

    /// Runs the chain over `source` with the given strategy.
    ///
    /// The eager strategy runs every stage to completion here; the lazy
    /// strategy only wires the pull adapters together, and elements flow
    /// when the returned [`Terminal`] asks for them. Either way the work
    /// happens inside one `evaluate` span, which the terminal re-enters.
    pub fn evaluate<S>(&self, source: S, strategy: Strategy) -> Terminal<'a, Out>
    where
        S: IntoIterator<Item = In>,
        S::IntoIter: 'a,
    {
        let span = tracing::info_span!("evaluate", %strategy, stages = self.stages.len());
        let probe = Probe::new();
        let items: Pipe<'a, Out> = span.in_scope(|| match strategy {
            Strategy::Eager => {
                let source: Vec<In> = source
                    .into_iter()
                    .inspect(|_| probe.record_pull())
                    .collect();
                Box::new((self.eager)(source, &probe).into_iter()) as Pipe<'a, Out>
            }
            Strategy::Lazy => {
                let source: Pipe<'a, In> =
                    Box::new(Source::new(source.into_iter(), probe.clone()));
                (self.lazy)(source, &probe)
            }
        });
        Terminal::new(items, probe, strategy, span)
    }

    /// Shorthand for [`Chain::evaluate`] with [`Strategy::Eager`].
    pub fn eager<S>(&self, source: S) -> Terminal<'a, Out>
    where
        S: IntoIterator<Item = In>,
        S::IntoIter: 'a,
    {
        self.evaluate(source, Strategy::Eager)
    }

    /// Shorthand for [`Chain::evaluate`] with [`Strategy::Lazy`].
    pub fn lazy<S>(&self, source: S) -> Terminal<'a, Out>
    where
        S: IntoIterator<Item = In>,
        S::IntoIter: 'a,
    {
        self.evaluate(source, Strategy::Lazy)
    }
}

fn with_stage(mut stages: Vec<StageKind>, stage: StageKind) -> Vec<StageKind> {
    stages.push(stage);
    stages
}
