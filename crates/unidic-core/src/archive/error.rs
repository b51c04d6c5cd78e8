//! Archive error types.

use std::path::PathBuf;

/// The downloaded file is not a trustworthy archive. Retryable by re-fetching.
#[derive(Debug, thiserror::Error)]
pub enum CorruptArchiveError {
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a zip archive: {source}", .path.display())]
    NotAnArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("archive entry #{index} is unreadable: {source}")]
    BadEntry {
        index: usize,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("archive member {name} failed verification: {source}")]
    BadMember {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Unpacking a validated archive failed. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("cannot open archive {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("archive entry #{index} is unreadable: {source}")]
    Entry {
        index: usize,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("archive member {name} would escape the extraction directory")]
    UnsafePath { name: String },
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
