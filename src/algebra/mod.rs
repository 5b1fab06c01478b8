//! Algebraic capabilities of [`InfiniteStream`](crate::stream::InfiniteStream).
//!
//! Each capability is an independent trait with its laws documented on the
//! module; `laws` turns those laws into checks over finite prefixes.
//!
//! | Capability | Stream operation |
//! |------------|------------------|
//! | `Functor::fmap` | `map` |
//! | `Pointed::pure` | `repeat` |
//! | `Applicative::apply` | `ap`, pointwise application |
//! | `Monad::flat_map` | `bind`, diagonal of `map` |
//! | `Copointed::extract` | `head` |
//! | `Comonad::duplicate` / `extend` | `tails` / `extend` |

pub mod functor;
pub mod applicative;
pub mod monad;
pub mod comonad;
pub mod laws;

pub use applicative::Applicative;
pub use comonad::{Comonad, Copointed};
pub use functor::{Functor, Pointed};
pub use monad::Monad;
