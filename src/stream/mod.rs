//! Lazily generated infinite streams
//!
//! The stream type and its generating contract live in `core`; constructors,
//! selection and cross-stream combinators are split into their own modules
//! and attached to [`InfiniteStream`] as inherent methods.

pub mod core;
pub mod constructors;
pub mod utility;
pub mod advanced;
pub mod async_combinators;

// Re-export core types
pub use self::core::{InfiniteStream, Iter};

// Re-export constructors
pub use constructors::{cycle, iterate, repeat, repeat_with, unfold};

// Re-export free-standing combinators
pub use advanced::{transpose, unzip, zip_with};

// Re-export the async adapter
pub use async_combinators::AsyncCursor;
