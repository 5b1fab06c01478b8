//! Stream constructors: unfold, repeat, repeat_with, iterate, cycle
//!
//! None of these inspects a base case, so none of them can fail except
//! `cycle`, which refuses an empty period.
use std::rc::Rc;

use super::core::InfiniteStream;
use crate::error::{StreamError, StreamResult};

impl<T: 'static> InfiniteStream<T> {
    /// Thread a hidden state through `step`; each call yields one element and
    /// the next state.
    pub fn unfold<A, F>(seed: A, step: F) -> Self
    where
        A: Clone + 'static,
        F: Fn(A) -> (T, A) + 'static,
    {
        unfold_shared(seed, Rc::new(step))
    }

    /// Every position holds `value`.
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        Self::cons(value.clone(), move || Self::repeat(value.clone()))
    }

    /// Every position holds a fresh `f()`. `f` should be pure, otherwise two
    /// forces of the same node can disagree.
    pub fn repeat_with<F>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        repeat_with_shared(Rc::new(f))
    }

    /// `seed, f(seed), f(f(seed)), ...`
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        Self::unfold(seed, move |current| {
            let next = f(&current);
            (current, next)
        })
    }

    /// Repeat a finite, non-empty sequence forever.
    ///
    /// Position `n` holds `items[n % items.len()]`.
    pub fn cycle(items: Vec<T>) -> StreamResult<Self>
    where
        T: Clone,
    {
        if items.is_empty() {
            log::warn!("refusing to cycle an empty sequence");
            return Err(StreamError::EmptyInput);
        }
        let period: Rc<[T]> = items.into();
        log::debug!("cycling a sequence with period {}", period.len());
        Ok(Self::unfold(0usize, move |offset| {
            (period[offset].clone(), (offset + 1) % period.len())
        }))
    }
}

fn unfold_shared<T, A, F>(seed: A, step: Rc<F>) -> InfiniteStream<T>
where
    T: 'static,
    A: Clone + 'static,
    F: Fn(A) -> (T, A) + 'static,
{
    InfiniteStream::new(move || {
        let (head, next) = step(seed.clone());
        (head, unfold_shared(next, Rc::clone(&step)))
    })
}

fn repeat_with_shared<T, F>(f: Rc<F>) -> InfiniteStream<T>
where
    T: 'static,
    F: Fn() -> T + 'static,
{
    InfiniteStream::new(move || (f(), repeat_with_shared(Rc::clone(&f))))
}

// ================================
// Constructor Functions
// ================================

/// Create a stream from a seed value and a step function
pub fn unfold<T, A, F>(seed: A, step: F) -> InfiniteStream<T>
where
    T: 'static,
    A: Clone + 'static,
    F: Fn(A) -> (T, A) + 'static,
{
    InfiniteStream::unfold(seed, step)
}

/// Create a stream that repeats a value indefinitely
pub fn repeat<T: Clone + 'static>(value: T) -> InfiniteStream<T> {
    InfiniteStream::repeat(value)
}

/// Create a stream that repeats values from a closure
pub fn repeat_with<T, F>(f: F) -> InfiniteStream<T>
where
    T: 'static,
    F: Fn() -> T + 'static,
{
    InfiniteStream::repeat_with(f)
}

/// Create a stream by repeatedly applying `f` to a seed
pub fn iterate<T, F>(seed: T, f: F) -> InfiniteStream<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    InfiniteStream::iterate(seed, f)
}

/// Create a periodic stream from a non-empty sequence
pub fn cycle<T: Clone + 'static>(items: Vec<T>) -> StreamResult<InfiniteStream<T>> {
    InfiniteStream::cycle(items)
}
