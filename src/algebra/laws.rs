//! Executable law checks.
//!
//! Streams cannot be compared in full, so every check compares finite
//! prefixes: `n` elements, `n` rows of `n` elements, or an `n`-cube for
//! streams of streams of streams. A law that holds returns `true` for every
//! `n`.

use super::{Applicative, Comonad, Copointed, Functor, Monad, Pointed};
use crate::stream::{transpose, zip_with, InfiniteStream};

pub fn prefix_eq<T>(left: &InfiniteStream<T>, right: &InfiniteStream<T>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    left.take(n) == right.take(n)
}

/// Compare the first `n` rows, `n` elements each.
pub fn grid_eq<T>(
    left: &InfiniteStream<InfiniteStream<T>>,
    right: &InfiniteStream<InfiniteStream<T>>,
    n: usize,
) -> bool
where
    T: PartialEq + 'static,
{
    left.take(n)
        .iter()
        .zip(right.take(n).iter())
        .all(|(l, r)| prefix_eq(l, r, n))
}

pub fn cube_eq<T>(
    left: &InfiniteStream<InfiniteStream<InfiniteStream<T>>>,
    right: &InfiniteStream<InfiniteStream<InfiniteStream<T>>>,
    n: usize,
) -> bool
where
    T: PartialEq + 'static,
{
    left.take(n)
        .iter()
        .zip(right.take(n).iter())
        .all(|(l, r)| grid_eq(l, r, n))
}

pub fn functor_identity<T>(s: &InfiniteStream<T>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    prefix_eq(&s.clone().fmap(|x: T| x), s, n)
}

pub fn functor_composition<T, U, V, F, G>(s: &InfiniteStream<T>, f: F, g: G, n: usize) -> bool
where
    T: 'static,
    U: 'static,
    V: PartialEq + 'static,
    F: Fn(T) -> U + Clone + 'static,
    G: Fn(U) -> V + Clone + 'static,
{
    let stepwise = s.clone().fmap(f.clone()).fmap(g.clone());
    let composed = s.clone().fmap(move |x| g(f(x)));
    prefix_eq(&stepwise, &composed, n)
}

pub fn pointed_is_repeat<T>(value: T, n: usize) -> bool
where
    T: Clone + PartialEq + 'static,
{
    <InfiniteStream<T> as Pointed>::pure(value.clone()).take(n) == vec![value; n]
}

pub fn applicative_identity<T>(values: &InfiniteStream<T>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    let identity: fn(T) -> T = |x| x;
    let applied = <InfiniteStream<fn(T) -> T> as Pointed>::pure(identity).apply(values.clone());
    prefix_eq(&applied, values, n)
}

pub fn applicative_homomorphism<A, B>(f: fn(A) -> B, value: A, n: usize) -> bool
where
    A: Clone + 'static,
    B: Clone + PartialEq + 'static,
{
    let applied = <InfiniteStream<fn(A) -> B> as Pointed>::pure(f)
        .apply(<InfiniteStream<A> as Pointed>::pure(value.clone()));
    prefix_eq(&applied, &<InfiniteStream<B> as Pointed>::pure(f(value)), n)
}

/// `fs.apply(xs)` agrees with zipping by application.
pub fn apply_matches_zip_with<A, B, F>(
    functions: &InfiniteStream<F>,
    values: &InfiniteStream<A>,
    n: usize,
) -> bool
where
    A: 'static,
    B: PartialEq + 'static,
    F: Fn(A) -> B + 'static,
{
    let applied = functions.clone().apply(values.clone());
    let zipped = zip_with(|f: F, x| f(x), functions.clone(), values.clone());
    prefix_eq(&applied, &zipped, n)
}

pub fn monad_left_identity<T, U, F>(value: T, f: F, n: usize) -> bool
where
    T: Clone + 'static,
    U: PartialEq + 'static,
    F: Fn(T) -> InfiniteStream<U> + Clone + 'static,
{
    let bound = <InfiniteStream<T> as Pointed>::pure(value.clone()).flat_map(f.clone());
    prefix_eq(&bound, &f(value), n)
}

pub fn monad_right_identity<T>(s: &InfiniteStream<T>, n: usize) -> bool
where
    T: Clone + PartialEq + 'static,
{
    let bound = s
        .clone()
        .flat_map(|x: T| <InfiniteStream<T> as Pointed>::pure(x));
    prefix_eq(&bound, s, n)
}

pub fn monad_associativity<T, U, V, F, G>(s: &InfiniteStream<T>, f: F, g: G, n: usize) -> bool
where
    T: 'static,
    U: 'static,
    V: PartialEq + 'static,
    F: Fn(T) -> InfiniteStream<U> + Clone + 'static,
    G: Fn(U) -> InfiniteStream<V> + Clone + 'static,
{
    let left = s.clone().flat_map(f.clone()).flat_map(g.clone());
    let right = s.clone().flat_map(move |x| f(x).flat_map(g.clone()));
    prefix_eq(&left, &right, n)
}

pub fn copointed_is_head<T>(s: &InfiniteStream<T>) -> bool
where
    T: PartialEq + 'static,
{
    s.extract() == s.head()
}

pub fn comonad_extract_duplicate<T>(s: &InfiniteStream<T>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    prefix_eq(&s.clone().duplicate().extract(), s, n)
}

pub fn comonad_fmap_extract<T>(s: &InfiniteStream<T>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    let extracted = s.clone().duplicate().fmap(|suffix: InfiniteStream<T>| suffix.extract());
    prefix_eq(&extracted, s, n)
}

pub fn comonad_duplicate_duplicate<T>(s: &InfiniteStream<T>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    let twice = s.clone().duplicate().duplicate();
    let mapped = s.clone().duplicate().fmap(|suffix: InfiniteStream<T>| suffix.duplicate());
    cube_eq(&twice, &mapped, n)
}

/// Transposing twice gives back the original rows.
pub fn transpose_involution<T>(rows: &InfiniteStream<InfiniteStream<T>>, n: usize) -> bool
where
    T: PartialEq + 'static,
{
    grid_eq(&transpose(transpose(rows.clone())), rows, n)
}
