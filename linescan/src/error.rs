use thiserror::Error;

/// Errors produced anywhere in the pattern-compilation or line-scanning pipeline.
///
/// No stage recovers from an error and continues; a [`MalformedPattern`](SearchError::MalformedPattern)
/// aborts compilation before any automaton is built, and an [`IoFailure`](SearchError::IoFailure)
/// aborts scanning, discarding whatever matches were already collected.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("malformed pattern: {0}")]
    MalformedPattern(String),

    #[error("I/O failure while scanning input")]
    IoFailure(#[from] std::io::Error),

    #[error("KMP matcher requires a non-empty literal pattern")]
    EmptyPatternKmp,
}
