//! Immutable, lazily evaluated infinite streams.
//!
//! An [`InfiniteStream`] is a suspended step that yields a head and another
//! stream when forced. Streams are built corecursively (`unfold`, `repeat`,
//! `iterate`, `cycle`), sliced into finite prefixes (`take`, `take_while`,
//! `split_at`), combined (`interleave`, `zip_with`, `transpose`) and carry
//! lawful Functor, Applicative, Monad and Comonad instances.
//!
//! ```
//! use infinite_stream::InfiniteStream;
//!
//! let naturals = InfiniteStream::iterate(0u32, |n| n + 1);
//! assert_eq!(naturals.take(5), vec![0, 1, 2, 3, 4]);
//!
//! let periodic = InfiniteStream::cycle(vec![1, 2, 3]).unwrap();
//! assert_eq!(periodic.take(7), vec![1, 2, 3, 1, 2, 3, 1]);
//! ```

pub mod error;
pub mod stream;
pub mod stream_configuration;
pub mod algebra;

// Re-export the stream surface at the crate root
pub use error::{StreamError, StreamResult};
pub use stream::{
    cycle, iterate, repeat, repeat_with, transpose, unfold, unzip, zip_with, AsyncCursor,
    InfiniteStream, Iter,
};
pub use stream_configuration::{Evaluation, RenderConfig, StreamConfig};
pub use algebra::{Applicative, Comonad, Copointed, Functor, Monad, Pointed};
