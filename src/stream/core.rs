//! Core infinite stream type and its generating contract.
//!
//! An [`InfiniteStream`] owns nothing but a suspended step. Forcing the step
//! yields the head together with the rest of the stream, which is itself just
//! another suspended step. Nothing is evaluated until a consumer forces it.

use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::{Evaluation, RenderConfig, StreamConfig};

type Step<T> = dyn Fn() -> (T, InfiniteStream<T>);

/// An immutable, lazily generated, never-ending sequence.
///
/// Cloning a stream shares its step and forces nothing. Unless the stream was
/// wrapped with [`InfiniteStream::memoize`], every force re-runs the step.
pub struct InfiniteStream<T> {
    repr: Repr<T>,
}

enum Repr<T> {
    Step(Rc<Step<T>>),
    Memo(Rc<MemoNode<T>>),
}

/// One cached node of a memoized stream.
///
/// `source` is released as soon as `forced` is filled, so a forced prefix
/// holds only the cached heads and the links between them.
struct MemoNode<T> {
    source: RefCell<Option<InfiniteStream<T>>>,
    forced: OnceCell<(T, InfiniteStream<T>)>,
    clone_head: fn(&T) -> T,
}

impl<T: 'static> MemoNode<T> {
    fn force(&self) -> (T, InfiniteStream<T>) {
        if let Some((head, tail)) = self.forced.get() {
            return ((self.clone_head)(head), tail.clone());
        }
        let source = self.source.borrow().clone();
        let Some(source) = source else {
            unreachable!("memo node lost its source before being filled");
        };
        log::trace!("filling memo cell");
        let (head, tail) = source.force();
        let tail = memoized(tail, self.clone_head);
        if self.forced.set(((self.clone_head)(&head), tail.clone())).is_ok() {
            *self.source.borrow_mut() = None;
        }
        (head, tail)
    }
}

impl<T> MemoNode<T> {
    fn release_tail(&mut self) -> Option<InfiniteStream<T>> {
        self.forced.take().map(|(_, tail)| tail)
    }
}

// Unlink the cached chain iteratively; a recursive drop of a long forced
// prefix would exhaust the stack.
impl<T> Drop for MemoNode<T> {
    fn drop(&mut self) {
        let mut next = self.release_tail();
        while let Some(mut stream) = next {
            next = match &mut stream.repr {
                Repr::Memo(node) => Rc::get_mut(node).and_then(MemoNode::release_tail),
                Repr::Step(_) => None,
            };
        }
    }
}

fn memoized<T: 'static>(source: InfiniteStream<T>, clone_head: fn(&T) -> T) -> InfiniteStream<T> {
    if let Repr::Memo(_) = source.repr {
        return source;
    }
    InfiniteStream {
        repr: Repr::Memo(Rc::new(MemoNode {
            source: RefCell::new(Some(source)),
            forced: OnceCell::new(),
            clone_head,
        })),
    }
}

impl<T> Clone for InfiniteStream<T> {
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::Step(step) => Repr::Step(Rc::clone(step)),
            Repr::Memo(node) => Repr::Memo(Rc::clone(node)),
        };
        Self { repr }
    }
}

impl<T: 'static> InfiniteStream<T> {
    /// Build a stream from its generating step.
    ///
    /// The step must be pure and must return without forcing the tail it
    /// hands back; any recursion belongs inside that tail.
    pub fn new<F>(step: F) -> Self
    where
        F: Fn() -> (T, InfiniteStream<T>) + 'static,
    {
        Self {
            repr: Repr::Step(Rc::new(step)),
        }
    }

    /// Build a stream from a known head and a suspended rest.
    pub fn cons<F>(head: T, rest: F) -> Self
    where
        T: Clone,
        F: Fn() -> InfiniteStream<T> + 'static,
    {
        Self::new(move || (head.clone(), rest()))
    }

    /// Run the generating step once.
    pub fn force(&self) -> (T, InfiniteStream<T>) {
        match &self.repr {
            Repr::Step(step) => step(),
            Repr::Memo(node) => node.force(),
        }
    }

    pub fn head(&self) -> T {
        self.force().0
    }

    pub fn tail(&self) -> InfiniteStream<T> {
        self.force().1
    }

    /// Apply `f` to every element.
    pub fn map<U, F>(self, f: F) -> InfiniteStream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        map_shared(self, Rc::new(f))
    }

    /// Cache each node's `(head, tail)` the first time it is forced.
    ///
    /// Element values are unchanged; later forces of the same node clone the
    /// cached pair instead of re-running the step. Memoizing an already
    /// memoized stream returns it as is.
    pub fn memoize(self) -> Self
    where
        T: Clone,
    {
        log::debug!("installing memoizing evaluation");
        memoized(self, T::clone)
    }

    /// Apply the evaluation strategy selected by `config`.
    pub fn configure(self, config: &StreamConfig) -> Self
    where
        T: Clone,
    {
        match config.evaluation {
            Evaluation::Recompute => self,
            Evaluation::Memoize => self.memoize(),
        }
    }

    /// Render the first `config.preview` elements followed by the ellipsis.
    pub fn render(&self, config: &RenderConfig) -> String
    where
        T: fmt::Display,
    {
        let mut parts: Vec<String> = self
            .take(config.preview)
            .iter()
            .map(ToString::to_string)
            .collect();
        parts.push(config.ellipsis.clone());
        format!("[{}]", parts.join(", "))
    }

    /// An infinite stream has no end; this always fails.
    pub fn end_index(&self) -> StreamResult<usize> {
        log::warn!("end index requested on an infinite stream");
        Err(StreamError::UnsupportedOperation("end_index"))
    }

    /// A cursor positioned at the head of this stream.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.clone(),
        }
    }
}

fn map_shared<T, U, F>(source: InfiniteStream<T>, f: Rc<F>) -> InfiniteStream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    InfiniteStream::new(move || {
        let (head, tail) = source.force();
        (f(head), map_shared(tail, Rc::clone(&f)))
    })
}

impl<T: fmt::Display + 'static> fmt::Display for InfiniteStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for InfiniteStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfiniteStream([{:?}, ...])", self.head())
    }
}

impl<T: Clone + 'static> TryFrom<Vec<T>> for InfiniteStream<T> {
    type Error = StreamError;

    fn try_from(items: Vec<T>) -> StreamResult<Self> {
        Self::cycle(items)
    }
}

impl<T: Clone + 'static> TryFrom<&[T]> for InfiniteStream<T> {
    type Error = StreamError;

    fn try_from(items: &[T]) -> StreamResult<Self> {
        Self::cycle(items.to_vec())
    }
}

/// Pull cursor over a stream.
///
/// The only mutable piece of the crate: each `next` forces the held stream
/// once, hands out the head and keeps the tail. Never returns `None`, so
/// callers must bound it themselves.
#[derive(Clone)]
pub struct Iter<T> {
    current: InfiniteStream<T>,
}

impl<T: 'static> Iter<T> {
    /// The stream of elements not yet pulled.
    pub fn remaining(&self) -> InfiniteStream<T> {
        self.current.clone()
    }
}

impl<T: 'static> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = self.current.force();
        self.current = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: 'static> FusedIterator for Iter<T> {}

impl<T: 'static> IntoIterator for InfiniteStream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter { current: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_naturals(calls: Rc<Cell<usize>>) -> InfiniteStream<u64> {
        InfiniteStream::unfold(0u64, move |n| {
            calls.set(calls.get() + 1);
            (n, n + 1)
        })
    }

    #[test]
    fn test_construction_does_not_force() {
        let calls = Rc::new(Cell::new(0));
        let stream = counting_naturals(calls.clone()).map(|n| n * 2);
        let _tail = stream.clone();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_force_yields_head_and_tail() {
        let (head, tail) = InfiniteStream::iterate(1u32, |n| n * 3).force();
        assert_eq!(head, 1);
        assert_eq!(tail.head(), 3);
    }

    #[test]
    fn test_recompute_reruns_step() {
        let calls = Rc::new(Cell::new(0));
        let stream = counting_naturals(calls.clone());
        stream.head();
        stream.head();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_memoize_runs_each_step_once() {
        let calls = Rc::new(Cell::new(0));
        let stream = counting_naturals(calls.clone()).memoize();
        assert_eq!(stream.take(5), vec![0, 1, 2, 3, 4]);
        assert_eq!(stream.take(5), vec![0, 1, 2, 3, 4]);
        assert_eq!(stream.nth(3), 3);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_configure_memoize() {
        let calls = Rc::new(Cell::new(0));
        let config = StreamConfig::new().evaluation(Evaluation::Memoize);
        let stream = counting_naturals(calls.clone()).configure(&config);
        stream.head();
        stream.head();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_forced_memo_node_releases_source() {
        let stream = InfiniteStream::iterate(0u32, |n| n + 1).memoize();
        assert_eq!(stream.take(3), vec![0, 1, 2]);
        let Repr::Memo(node) = &stream.repr else {
            panic!("memoize must produce a memo node");
        };
        assert!(node.forced.get().is_some());
        assert!(node.source.borrow().is_none());
    }

    #[test]
    fn test_memoize_is_idempotent() {
        let calls = Rc::new(Cell::new(0));
        let stream = counting_naturals(calls.clone()).memoize().memoize();
        stream.head();
        stream.head();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_iter_advances() {
        let mut cursor = InfiniteStream::iterate(0, |n| n + 1).iter();
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.remaining().head(), 2);
    }

    #[test]
    fn test_debug_shows_head_only() {
        let stream = InfiniteStream::repeat('x');
        assert_eq!(format!("{:?}", stream), "InfiniteStream(['x', ...])");
    }
}
