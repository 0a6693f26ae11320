//! Error types returned by the generator.

use std::num::ParseIntError;

/// Errors surfaced by DDL generation.
///
/// Every error is returned to the immediate caller. A failed call never
/// yields partial DDL text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A field's `size` modifier is not a valid integer.
    #[error("invalid size modifier {value:?} on field `{field}`: {source}")]
    TagFormat {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Construction-time configuration was rejected.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Nested records are embedded deeper than the walker allows.
    ///
    /// This is almost always a record that embeds itself through a pointer.
    #[error("record `{record}` is nested {depth} levels deep; is it embedding itself?")]
    NestingTooDeep { record: &'static str, depth: usize },

    /// The runtime could not start a batch worker.
    #[error("failed to spawn batch worker for descriptor #{index}: {source}")]
    WorkerSpawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    /// A batch worker panicked before reporting a result.
    #[error("batch worker for descriptor #{index} panicked")]
    WorkerPanicked { index: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
