//! Async adapter: expose an infinite stream as a `futures_core::Stream`.
//!
//! Polling never returns `Pending` and never returns `None`; bound the result
//! with `StreamExt::take` or a similar combinator.
use futures_core::stream::{FusedStream, Stream};
use std::pin::Pin;
use std::task::{Context, Poll};

use super::core::{InfiniteStream, Iter};

pub struct AsyncCursor<T> {
    inner: Iter<T>,
}

impl<T: 'static> InfiniteStream<T> {
    pub fn into_async(self) -> AsyncCursor<T> {
        AsyncCursor {
            inner: self.into_iter(),
        }
    }
}

impl<T: 'static> AsyncCursor<T> {
    /// The stream of elements not yet polled.
    pub fn remaining(&self) -> InfiniteStream<T> {
        self.inner.remaining()
    }
}

impl<T: 'static> Stream for AsyncCursor<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.get_mut().inner.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: 'static> FusedStream for AsyncCursor<T> {
    fn is_terminated(&self) -> bool {
        false
    }
}
