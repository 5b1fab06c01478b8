//! `Copointed` and `Comonad` capabilities.
//!
//! # Laws
//!
//! ```text
//! s.duplicate().extract()                  == s
//! s.duplicate().fmap(|t| t.extract())      == s
//! s.duplicate().duplicate()                == s.duplicate().fmap(|t| t.duplicate())
//! ```

use super::functor::Functor;
use crate::stream::InfiniteStream;

/// Extraction of the focused value. For streams, the head.
pub trait Copointed: Functor {
    fn extract(&self) -> Self::Item;
}

pub trait Comonad: Copointed {
    /// Every sub-structure, focused at each position.
    fn duplicate(self) -> Self::WithType<Self>;

    /// Apply `f` to every sub-structure.
    fn extend<U, F>(self, f: F) -> Self::WithType<U>
    where
        U: 'static,
        F: Fn(Self) -> U + 'static;
}

impl<T: 'static> Copointed for InfiniteStream<T> {
    fn extract(&self) -> T {
        self.head()
    }
}

impl<T: 'static> Comonad for InfiniteStream<T> {
    fn duplicate(self) -> InfiniteStream<InfiniteStream<T>> {
        self.tails()
    }

    fn extend<U, F>(self, f: F) -> InfiniteStream<U>
    where
        U: 'static,
        F: Fn(InfiniteStream<T>) -> U + 'static,
    {
        InfiniteStream::extend(self, f)
    }
}
