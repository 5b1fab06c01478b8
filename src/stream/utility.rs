//! Selection and slicing: nth, take, skip, split_at, take_while, skip_while,
//! filter, inits, tails
//!
//! The predicate-driven operations (`take_while`, `skip_while`, `filter`)
//! search forward until the predicate gives them an answer. If it never does,
//! they never return. That is intended: whether a predicate will ever hold
//! again is undecidable, so no bound is imposed here.
use std::rc::Rc;

use super::core::InfiniteStream;

impl<T: 'static> InfiniteStream<T> {
    /// Element at position `n`, counting from zero.
    pub fn nth(&self, n: usize) -> T {
        self.clone().skip(n).head()
    }

    /// The first `n` elements, in order.
    pub fn take(&self, n: usize) -> Vec<T> {
        self.clone().split_at(n).0
    }

    /// The stream without its first `n` elements.
    pub fn skip(self, n: usize) -> Self {
        let mut current = self;
        for _ in 0..n {
            current = current.tail();
        }
        current
    }

    /// `(take(n), skip(n))` in a single traversal.
    pub fn split_at(self, n: usize) -> (Vec<T>, Self) {
        let mut prefix = Vec::new();
        let mut current = self;
        for _ in 0..n {
            let (head, tail) = current.force();
            prefix.push(head);
            current = tail;
        }
        (prefix, current)
    }

    /// Longest prefix whose elements all satisfy `predicate`.
    ///
    /// Never returns if every element satisfies it.
    pub fn take_while<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prefix = Vec::new();
        let mut current = self.clone();
        loop {
            let (head, tail) = current.force();
            if !predicate(&head) {
                return prefix;
            }
            prefix.push(head);
            current = tail;
        }
    }

    /// The stream from the first element that fails `predicate` onwards.
    ///
    /// The search runs when the result is forced, and never finishes if every
    /// element satisfies the predicate.
    pub fn skip_while<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::new(move || {
            let mut current = self.clone();
            loop {
                let (head, tail) = current.force();
                if !predicate(&head) {
                    return (head, tail);
                }
                current = tail;
            }
        })
    }

    /// Elements satisfying `predicate`, in order.
    ///
    /// Forcing a node never finishes if no later element satisfies the
    /// predicate.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter_shared(self, Rc::new(predicate))
    }

    /// Every finite prefix: `[]`, `[x0]`, `[x0, x1]`, ...
    pub fn inits(self) -> InfiniteStream<Vec<T>>
    where
        T: Clone,
    {
        InfiniteStream::unfold((Vec::new(), self), |(prefix, rest)| {
            let (head, tail) = rest.force();
            let mut longer = prefix.clone();
            longer.push(head);
            (prefix, (longer, tail))
        })
    }

    /// Every suffix, starting with the stream itself.
    pub fn tails(self) -> InfiniteStream<InfiniteStream<T>> {
        InfiniteStream::unfold(self, |suffix| {
            let rest = suffix.tail();
            (suffix, rest)
        })
    }
}

fn filter_shared<T, P>(source: InfiniteStream<T>, predicate: Rc<P>) -> InfiniteStream<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    InfiniteStream::new(move || {
        let mut current = source.clone();
        loop {
            let (head, tail) = current.force();
            if predicate(&head) {
                return (head, filter_shared(tail, Rc::clone(&predicate)));
            }
            current = tail;
        }
    })
}
