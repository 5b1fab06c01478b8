//! `Monad` capability.
//!
//! Binding a stream maps every element to a stream and keeps the diagonal:
//! output position `i` is element `i` of `f(s[i])`.
//!
//! # Laws
//!
//! ```text
//! pure(x).flat_map(f)              == f(x)
//! s.flat_map(pure)                 == s
//! s.flat_map(f).flat_map(g)        == s.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use crate::stream::InfiniteStream;

pub trait Monad: Applicative {
    fn flat_map<U, F>(self, f: F) -> Self::WithType<U>
    where
        U: 'static,
        F: Fn(Self::Item) -> Self::WithType<U> + 'static;
}

impl<T: 'static> Monad for InfiniteStream<T> {
    fn flat_map<U, F>(self, f: F) -> InfiniteStream<U>
    where
        U: 'static,
        F: Fn(T) -> InfiniteStream<U> + 'static,
    {
        self.bind(f)
    }
}
