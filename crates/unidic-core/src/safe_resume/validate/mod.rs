//! Compares the requested resume offset with the response the server sent.

mod error;

use crate::storage::WriteMode;
use crate::transfer::ResponseHead;

pub use error::{ValidationError, ValidationErrorKind};

/// How the body of a response maps onto the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumePlan {
    /// Nothing on disk; write the body from offset 0.
    Fresh,
    /// Range honored; append the body after `offset` existing bytes.
    Resume { offset: u64 },
    /// Range ignored (`200`); the `discarded` local bytes are thrown away.
    Restart { discarded: u64 },
    /// `416` and the remote size equals the local size: nothing left to fetch.
    AlreadyComplete,
}

impl ResumePlan {
    /// File mode for writing the body, `None` when no body is written.
    pub fn write_mode(&self) -> Option<WriteMode> {
        match self {
            ResumePlan::Resume { .. } => Some(WriteMode::Append),
            ResumePlan::Fresh | ResumePlan::Restart { .. } => Some(WriteMode::Truncate),
            ResumePlan::AlreadyComplete => None,
        }
    }

    /// Bytes already on disk that the body continues from.
    pub fn base_offset(&self) -> u64 {
        match self {
            ResumePlan::Resume { offset } => *offset,
            _ => 0,
        }
    }

    /// End-to-end size of the file once this response is fully written.
    pub fn expected_total(&self, head: &ResponseHead) -> Option<u64> {
        if let Some(total) = head.content_range.and_then(|cr| cr.total) {
            return Some(total);
        }
        head.content_length.map(|len| len + self.base_offset())
    }
}

/// Decide how to treat a response to a request made with `offset` bytes on disk.
///
/// `offset == 0` means no `Range` header was sent.
pub fn plan_for_response(offset: u64, head: &ResponseHead) -> Result<ResumePlan, ValidationError> {
    let status = head.status.unwrap_or(0);
    match status {
        206 => {
            let served = head
                .content_range
                .and_then(|cr| cr.start)
                .unwrap_or(offset);
            if served != offset {
                return Err(ValidationError {
                    kind: ValidationErrorKind::RangeMismatch {
                        requested: offset,
                        served,
                    },
                });
            }
            if offset == 0 {
                Ok(ResumePlan::Fresh)
            } else {
                Ok(ResumePlan::Resume { offset })
            }
        }
        200..=299 => {
            if offset == 0 {
                Ok(ResumePlan::Fresh)
            } else {
                Ok(ResumePlan::Restart { discarded: offset })
            }
        }
        416 => {
            let remote_total = head.content_range.and_then(|cr| cr.total);
            if offset > 0 && remote_total == Some(offset) {
                Ok(ResumePlan::AlreadyComplete)
            } else {
                Err(ValidationError {
                    kind: ValidationErrorKind::UnexpectedStatus(416),
                })
            }
        }
        other => Err(ValidationError {
            kind: ValidationErrorKind::UnexpectedStatus(other),
        }),
    }
}

#[cfg(test)]
mod tests;
