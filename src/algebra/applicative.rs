//! `Applicative` capability.
//!
//! For streams application is pointwise: the function at position `i` meets
//! the value at position `i`, so `fs.apply(xs)` agrees with
//! `zip_with(|f, x| f(x), fs, xs)`.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v)          == v
//! pure(f).apply(pure(x))     == pure(f(x))
//! ```

use super::functor::Functor;
use crate::stream::{zip_with, InfiniteStream};

pub trait Applicative: Functor {
    /// Apply a structure of functions to a structure of values.
    fn apply<A, B>(self, values: Self::WithType<A>) -> Self::WithType<B>
    where
        A: 'static,
        B: 'static,
        Self::Item: Fn(A) -> B;

    /// Combine two structures with a binary function.
    fn map2<U, V, F>(self, other: Self::WithType<U>, f: F) -> Self::WithType<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(Self::Item, U) -> V + 'static;
}

impl<T: 'static> Applicative for InfiniteStream<T> {
    fn apply<A, B>(self, values: InfiniteStream<A>) -> InfiniteStream<B>
    where
        A: 'static,
        B: 'static,
        T: Fn(A) -> B,
    {
        self.ap(values)
    }

    fn map2<U, V, F>(self, other: InfiniteStream<U>, f: F) -> InfiniteStream<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + 'static,
    {
        zip_with(f, self, other)
    }
}
