//! Work accounting for a single evaluation.

use std::cell::Cell;
use std::rc::Rc;

/// How much work an evaluation did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Source elements pulled into the chain.
    pub source_pulls: usize,
    /// Calls made to stage functions (predicates, mappers, flat-mappers).
    pub stage_calls: usize,
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pulls({}) calls({})",
            self.source_pulls, self.stage_calls
        )
    }
}

/// The result of evaluating a chain, with its traversal report.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<R> {
    pub output: R,
    pub traversal: Traversal,
}

#[derive(Debug, Default)]
struct Counters {
    pulls: Cell<usize>,
    calls: Cell<usize>,
}

/// Shared counters threaded through every stage of one evaluation.
#[derive(Debug, Clone, Default)]
pub(crate) struct Probe(Rc<Counters>);

impl Probe {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_pull(&self) {
        self.0.pulls.set(self.0.pulls.get() + 1);
    }

    pub(crate) fn record_call(&self) {
        self.0.calls.set(self.0.calls.get() + 1);
    }

    pub(crate) fn snapshot(&self) -> Traversal {
        Traversal {
            source_pulls: self.0.pulls.get(),
            stage_calls: self.0.calls.get(),
        }
    }
}
