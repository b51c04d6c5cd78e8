//! Error types for safe-resume validation.

use std::fmt;

/// The response cannot be applied to the partial file.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `206` for a different start offset than the one requested.
    RangeMismatch { requested: u64, served: u64 },
    /// Status that carries no usable body for this file.
    UnexpectedStatus(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::RangeMismatch { requested, served } => write!(
                f,
                "server sent bytes from offset {} but {} was requested",
                served, requested
            ),
            ValidationErrorKind::UnexpectedStatus(code) => {
                write!(f, "unexpected HTTP {} for resumable download", code)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
