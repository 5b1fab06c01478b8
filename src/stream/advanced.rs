//! Cross-stream combinators: interleave, intersperse, scan, zip, transpose,
//! diagonal
use std::rc::Rc;

use super::core::InfiniteStream;

impl<T: 'static> InfiniteStream<T> {
    /// `self[0], other[0], self[1], other[1], ...`
    pub fn interleave(self, other: InfiniteStream<T>) -> Self {
        Self::new(move || {
            let (head, tail) = self.force();
            (head, other.clone().interleave(tail))
        })
    }

    /// `self[0], separator, self[1], separator, ...`
    pub fn intersperse(self, separator: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || {
            let (head, tail) = self.force();
            let separator = separator.clone();
            let rest = Self::cons(separator.clone(), move || {
                tail.clone().intersperse(separator.clone())
            });
            (head, rest)
        })
    }

    /// Running folds: `initial, f(initial, self[0]), ...`
    pub fn scan<B, F>(self, initial: B, f: F) -> InfiniteStream<B>
    where
        B: Clone + 'static,
        F: Fn(B, T) -> B + 'static,
    {
        InfiniteStream::unfold((initial, self), move |(acc, rest)| {
            let (head, tail) = rest.force();
            let next = f(acc.clone(), head);
            (acc, (next, tail))
        })
    }

    /// `scan` seeded with the head, folding over the tail.
    pub fn scan1<F>(self, f: F) -> Self
    where
        T: Clone,
        F: Fn(T, T) -> T + 'static,
    {
        let f = Rc::new(f);
        Self::new(move || {
            let (head, tail) = self.force();
            let f = Rc::clone(&f);
            tail.scan(head, move |acc, x| f(acc, x)).force()
        })
    }

    /// Pair up elements at equal positions.
    pub fn zip<U: 'static>(self, other: InfiniteStream<U>) -> InfiniteStream<(T, U)> {
        zip_with(|left, right| (left, right), self, other)
    }

    /// Apply `f` to every suffix; position `i` is `f(tails[i])`.
    pub fn extend<U, F>(self, f: F) -> InfiniteStream<U>
    where
        U: 'static,
        F: Fn(InfiniteStream<T>) -> U + 'static,
    {
        self.tails().map(f)
    }

    /// Map every element to a stream and read off the diagonal.
    pub fn bind<U, F>(self, f: F) -> InfiniteStream<U>
    where
        U: 'static,
        F: Fn(T) -> InfiniteStream<U> + 'static,
    {
        self.map(f).diagonal()
    }
}

impl<F: 'static> InfiniteStream<F> {
    /// Apply the function at each position to the value at the same position.
    pub fn ap<A, B>(self, values: InfiniteStream<A>) -> InfiniteStream<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B,
    {
        zip_with(|f, value| f(value), self, values)
    }
}

impl<T: 'static> InfiniteStream<InfiniteStream<T>> {
    /// Monadic join: position `i` is element `i` of row `i`.
    pub fn diagonal(self) -> InfiniteStream<T> {
        InfiniteStream::unfold((self, 0usize), |(rows, column)| {
            let (row, rest) = rows.force();
            (row.nth(column), (rest, column + 1))
        })
    }
}

/// Pointwise combination: `result[i] = f(left[i], right[i])`.
pub fn zip_with<A, B, C, F>(
    f: F,
    left: InfiniteStream<A>,
    right: InfiniteStream<B>,
) -> InfiniteStream<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    InfiniteStream::unfold((left, right), move |(left, right)| {
        let (a, left_tail) = left.force();
        let (b, right_tail) = right.force();
        (f(a, b), (left_tail, right_tail))
    })
}

/// Split a stream of pairs into its two projections.
pub fn unzip<A, B>(pairs: InfiniteStream<(A, B)>) -> (InfiniteStream<A>, InfiniteStream<B>)
where
    A: 'static,
    B: 'static,
{
    (pairs.clone().map(|(a, _)| a), pairs.map(|(_, b)| b))
}

/// Swap rows and columns: column `i` of the result holds element `i` of
/// every row.
pub fn transpose<T: 'static>(
    rows: InfiniteStream<InfiniteStream<T>>,
) -> InfiniteStream<InfiniteStream<T>> {
    InfiniteStream::new(move || {
        let column = rows.clone().map(|row| row.head());
        let rest = transpose(rows.clone().map(|row| row.tail()));
        (column, rest)
    })
}
