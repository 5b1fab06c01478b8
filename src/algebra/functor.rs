//! `Functor` and `Pointed` capabilities.
//!
//! # Laws
//!
//! ```text
//! s.fmap(|x| x)          == s
//! s.fmap(f).fmap(g)      == s.fmap(|x| g(f(x)))
//! ```

use crate::stream::InfiniteStream;

/// Structure-preserving pointwise mapping.
pub trait Functor: Sized + 'static {
    /// The element type.
    type Item;
    /// The same structure holding `U` instead of `Item`.
    type WithType<U: 'static>;

    fn fmap<U, F>(self, f: F) -> Self::WithType<U>
    where
        U: 'static,
        F: Fn(Self::Item) -> U + 'static;
}

/// Injection of a single value.
///
/// For streams, `pure(x)` is `repeat(x)`.
pub trait Pointed: Functor {
    fn pure(value: Self::Item) -> Self;
}

impl<T: 'static> Functor for InfiniteStream<T> {
    type Item = T;
    type WithType<U: 'static> = InfiniteStream<U>;

    fn fmap<U, F>(self, f: F) -> Self::WithType<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map(f)
    }
}

impl<T: Clone + 'static> Pointed for InfiniteStream<T> {
    fn pure(value: T) -> Self {
        InfiniteStream::repeat(value)
    }
}
