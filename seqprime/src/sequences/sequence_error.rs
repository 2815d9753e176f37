use thiserror::Error;

/// Errors related to requesting terms from a sequence.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Error which indicates that a negative number of terms was requested.
    #[error("Cannot produce {0} terms; the number of terms must be non-negative")]
    NegativeLength(i64),
}
