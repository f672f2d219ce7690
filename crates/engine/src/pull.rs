//! Pull-based stage adapters used by the lazy strategy.
//!
//! Each adapter wraps its upstream iterator and applies one stage per
//! `next()` call. An adapter is a two-state machine: while `Active` it pulls
//! from upstream as needed; once upstream runs dry it moves to `Exhausted`
//! and never touches upstream again. Nothing is buffered beyond the inner
//! iterator a flat-map is currently draining.

use std::iter::FusedIterator;
use std::rc::Rc;

use crate::traversal::Probe;

/// Lifecycle of a pull adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullState {
    Active,
    Exhausted,
}

/// Head of a lazy chain; counts every element taken from the source.
pub struct Source<I> {
    inner: I,
    probe: Probe,
    state: PullState,
}

impl<I> Source<I> {
    pub(crate) fn new(inner: I, probe: Probe) -> Self {
        Self {
            inner,
            probe,
            state: PullState::Active,
        }
    }

    pub fn state(&self) -> PullState {
        self.state
    }
}

impl<I: Iterator> Iterator for Source<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == PullState::Exhausted {
            return None;
        }
        match self.inner.next() {
            Some(item) => {
                self.probe.record_pull();
                Some(item)
            }
            None => {
                self.state = PullState::Exhausted;
                None
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Source<I> {}

/// Yields upstream elements that satisfy a predicate.
pub struct Filter<I, P> {
    upstream: I,
    pred: Rc<P>,
    probe: Probe,
    state: PullState,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(upstream: I, pred: Rc<P>, probe: Probe) -> Self {
        Self {
            upstream,
            pred,
            probe,
            state: PullState::Active,
        }
    }

    pub fn state(&self) -> PullState {
        self.state
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == PullState::Exhausted {
            return None;
        }
        for item in self.upstream.by_ref() {
            self.probe.record_call();
            if (self.pred)(&item) {
                return Some(item);
            }
        }
        self.state = PullState::Exhausted;
        None
    }
}

impl<I: Iterator, P: Fn(&I::Item) -> bool> FusedIterator for Filter<I, P> {}

/// Transforms each upstream element.
pub struct Map<I, F> {
    upstream: I,
    f: Rc<F>,
    probe: Probe,
    state: PullState,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(upstream: I, f: Rc<F>, probe: Probe) -> Self {
        Self {
            upstream,
            f,
            probe,
            state: PullState::Active,
        }
    }

    pub fn state(&self) -> PullState {
        self.state
    }
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: Fn(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.state == PullState::Exhausted {
            return None;
        }
        match self.upstream.next() {
            Some(item) => {
                self.probe.record_call();
                Some((self.f)(item))
            }
            None => {
                self.state = PullState::Exhausted;
                None
            }
        }
    }
}

impl<I: Iterator, F: Fn(I::Item) -> U, U> FusedIterator for Map<I, F> {}

/// Expands each upstream element into a sequence and yields its items.
///
/// Only the sequence for the current upstream element is held; the next
/// upstream element is pulled once it is drained.
pub struct FlatMap<I, F, J>
where
    J: IntoIterator,
{
    upstream: I,
    f: Rc<F>,
    current: Option<J::IntoIter>,
    probe: Probe,
    state: PullState,
}

impl<I, F, J: IntoIterator> FlatMap<I, F, J> {
    pub(crate) fn new(upstream: I, f: Rc<F>, probe: Probe) -> Self {
        Self {
            upstream,
            f,
            current: None,
            probe,
            state: PullState::Active,
        }
    }

    pub fn state(&self) -> PullState {
        self.state
    }
}

impl<I, F, J> Iterator for FlatMap<I, F, J>
where
    I: Iterator,
    F: Fn(I::Item) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        loop {
            if self.state == PullState::Exhausted {
                return None;
            }
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            match self.upstream.next() {
                Some(item) => {
                    self.probe.record_call();
                    self.current = Some((self.f)(item).into_iter());
                }
                None => {
                    self.state = PullState::Exhausted;
                    return None;
                }
            }
        }
    }
}

impl<I, F, J> FusedIterator for FlatMap<I, F, J>
where
    I: Iterator,
    F: Fn(I::Item) -> J,
    J: IntoIterator,
{
}

/// Yields at most `limit` upstream elements, then stops pulling.
pub struct Take<I> {
    upstream: I,
    remaining: usize,
    state: PullState,
}

impl<I> Take<I> {
    pub(crate) fn new(upstream: I, limit: usize) -> Self {
        Self {
            upstream,
            remaining: limit,
            state: PullState::Active,
        }
    }

    pub fn state(&self) -> PullState {
        self.state
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == PullState::Exhausted || self.remaining == 0 {
            self.state = PullState::Exhausted;
            return None;
        }
        match self.upstream.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.state = PullState::Exhausted;
                None
            }
        }
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}
