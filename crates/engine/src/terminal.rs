//! Terminal operations that consume an evaluated chain.

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Add;

use pipeline::{OrderedMap, OrderedSet};

use crate::Strategy;
use crate::chain::Pipe;
use crate::traversal::{Evaluation, Probe};

/// The consuming end of an evaluated chain.
///
/// Exactly one terminal operation may be called. Under the lazy strategy the
/// terminal drives evaluation: it pulls elements until its result is decided
/// and then drops the chain, so short-circuiting terminals (`find`, `any`,
/// `all`, `none`) leave the rest of the source untouched.
pub struct Terminal<'a, T> {
    items: Pipe<'a, T>,
    probe: Probe,
    strategy: Strategy,
    span: tracing::Span,
}

impl<'a, T: 'a> Terminal<'a, T> {
    pub(crate) fn new(
        items: Pipe<'a, T>,
        probe: Probe,
        strategy: Strategy,
        span: tracing::Span,
    ) -> Self {
        Self {
            items,
            probe,
            strategy,
            span,
        }
    }

    /// Returns the strategy this terminal was produced by.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Materializes every element in order.
    pub fn collect(self) -> Evaluation<Vec<T>> {
        self.finish("collect", |items| items.collect())
    }

    /// Counts the elements.
    pub fn count(self) -> Evaluation<usize> {
        self.finish("count", |items| pipeline::count(items, |_| true))
    }

    /// Counts the elements satisfying `pred`.
    pub fn count_where(self, pred: impl FnMut(&T) -> bool) -> Evaluation<usize> {
        self.finish("count_where", |items| pipeline::count(items, pred))
    }

    /// Returns the first element satisfying `pred`.
    pub fn find(self, pred: impl FnMut(&T) -> bool) -> Evaluation<Option<T>> {
        self.finish("find", |items| pipeline::find(items, pred))
    }

    /// True if any element satisfies `pred`.
    pub fn any(self, pred: impl FnMut(&T) -> bool) -> Evaluation<bool> {
        self.finish("any", |items| pipeline::any(items, pred))
    }

    /// True if every element satisfies `pred`.
    pub fn all(self, pred: impl FnMut(&T) -> bool) -> Evaluation<bool> {
        self.finish("all", |items| pipeline::all(items, pred))
    }

    /// True if no element satisfies `pred`.
    pub fn none(self, pred: impl FnMut(&T) -> bool) -> Evaluation<bool> {
        self.finish("none", |items| pipeline::none(items, pred))
    }

    /// Left fold from `initial`.
    pub fn fold<A>(self, initial: A, combine: impl FnMut(A, T) -> A) -> Evaluation<A> {
        self.finish("fold", |items| pipeline::fold(items, initial, combine))
    }

    /// Left fold seeded with the first element; fails on empty output.
    pub fn reduce(self, combine: impl FnMut(T, T) -> T) -> Evaluation<pipeline::Result<T>> {
        self.finish("reduce", |items| pipeline::reduce(items, combine))
    }

    /// Sums a projection of each element, left to right.
    pub fn sum_of<N>(self, project: impl FnMut(&T) -> N) -> Evaluation<N>
    where
        N: Default + Add<Output = N>,
    {
        self.finish("sum_of", |items| pipeline::sum_of(items, project))
    }

    /// Element with the greatest key; first wins on ties.
    pub fn max_by<K>(
        self,
        key: impl FnMut(&T) -> K,
        compare: impl FnMut(&K, &K) -> Ordering,
    ) -> Evaluation<Option<T>> {
        self.finish("max_by", |items| pipeline::max_by_or_none(items, key, compare))
    }

    /// Element with the smallest key; first wins on ties.
    pub fn min_by<K>(
        self,
        key: impl FnMut(&T) -> K,
        compare: impl FnMut(&K, &K) -> Ordering,
    ) -> Evaluation<Option<T>> {
        self.finish("min_by", |items| pipeline::min_by_or_none(items, key, compare))
    }

    /// Elements in stable sorted order.
    pub fn sorted_by(self, compare: impl FnMut(&T, &T) -> Ordering) -> Evaluation<Vec<T>> {
        self.finish("sorted_by", |items| pipeline::sorted_by(items, compare))
    }

    /// Groups elements by key, groups in first-occurrence order.
    pub fn group_by<K>(self, key: impl FnMut(&T) -> K) -> Evaluation<OrderedMap<K, Vec<T>>>
    where
        K: Hash + Eq + Clone,
    {
        self.finish("group_by", |items| pipeline::group_by(items, key))
    }

    /// Splits into `(matches, non_matches)`.
    pub fn partition(self, pred: impl FnMut(&T) -> bool) -> Evaluation<(Vec<T>, Vec<T>)> {
        self.finish("partition", |items| pipeline::partition(items, pred))
    }

    /// Indexes elements by key; the last element per key wins.
    pub fn associate_by<K>(self, key: impl FnMut(&T) -> K) -> Evaluation<OrderedMap<K, T>>
    where
        K: Hash + Eq + Clone,
    {
        self.finish("associate_by", |items| pipeline::associate_by(items, key))
    }

    /// Maps each distinct element to a value; the last computation wins.
    pub fn associate_with<V>(self, value: impl FnMut(&T) -> V) -> Evaluation<OrderedMap<T, V>>
    where
        T: Hash + Eq + Clone,
    {
        self.finish("associate_with", |items| {
            pipeline::associate_with(items, value)
        })
    }

    /// Builds a map from `(key, value)` pairs; the last pair per key wins.
    pub fn associate<K, V>(self, pair: impl FnMut(T) -> (K, V)) -> Evaluation<OrderedMap<K, V>>
    where
        K: Hash + Eq + Clone,
    {
        self.finish("associate", |items| pipeline::associate(items, pair))
    }

    /// Deduplicates into an insertion-ordered set.
    pub fn to_set(self) -> Evaluation<OrderedSet<T>>
    where
        T: Hash + Eq + Clone,
    {
        self.finish("to_set", pipeline::to_set)
    }

    fn finish<R>(self, terminal: &'static str, run: impl FnOnce(Pipe<'a, T>) -> R) -> Evaluation<R> {
        let Terminal {
            items,
            probe,
            strategy,
            span,
        } = self;
        let _entered = span.enter();
        let output = run(items);
        let traversal = probe.snapshot();

        let label = strategy.as_str();
        metrics::counter!("pipeline_evaluations_total", "strategy" => label).increment(1);
        metrics::counter!("pipeline_source_pulls_total", "strategy" => label)
            .increment(traversal.source_pulls as u64);
        metrics::counter!("pipeline_stage_calls_total", "strategy" => label)
            .increment(traversal.stage_calls as u64);
        tracing::debug!(%strategy, terminal, %traversal, "evaluation complete");

        Evaluation { output, traversal }
    }
}
