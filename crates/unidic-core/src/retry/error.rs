//! Transfer error type for retry classification.

use std::fmt;

/// Error returned by a single GET attempt (curl failure, HTTP error, range or storage failure).
/// Kept separate from anyhow so the retry loop can classify it.
#[derive(Debug)]
pub enum TransferError {
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Transfer completed but fewer bytes arrived than `Content-Length` announced.
    PartialTransfer { expected: u64, received: u64 },
    /// Server answered 206 for a different offset than requested. The local
    /// file has been truncated so the next attempt starts from zero.
    RangeMismatch { requested: u64, served: u64 },
    /// Disk write failed (e.g. disk full, permission denied). Not retried.
    Storage(std::io::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::Curl(e) => write!(f, "{}", e),
            TransferError::Http(code) => write!(f, "HTTP {}", code),
            TransferError::PartialTransfer { expected, received } => {
                write!(f, "partial transfer: expected {} bytes, got {}", expected, received)
            }
            TransferError::RangeMismatch { requested, served } => write!(
                f,
                "range mismatch: requested offset {}, server sent offset {}",
                requested, served
            ),
            TransferError::Storage(e) => write!(f, "storage: {}", e),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::Curl(e) => Some(e),
            TransferError::Storage(e) => Some(e),
            TransferError::Http(_)
            | TransferError::PartialTransfer { .. }
            | TransferError::RangeMismatch { .. } => None,
        }
    }
}
