//! Per-attempt transfer state.

use std::io;
use std::path::{Path, PathBuf};

use crate::storage;

/// What one GET attempt starts from. Built fresh for every attempt from the
/// file on disk, so the resume offset always matches reality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferState {
    pub url: String,
    pub destination: PathBuf,
    /// Bytes already on disk; the prefix the response must continue.
    pub resume_from: u64,
    /// 1-based attempt number.
    pub attempt: u32,
    pub max_attempts: u32,
}

impl TransferState {
    /// Measure `destination` and build the state for attempt `attempt`.
    pub fn measure(url: &str, destination: &Path, attempt: u32, max_attempts: u32) -> io::Result<Self> {
        Ok(TransferState {
            url: url.to_string(),
            destination: destination.to_path_buf(),
            resume_from: storage::on_disk_len(destination)?,
            attempt,
            max_attempts,
        })
    }

    /// Value of the `Range` header for this attempt, `None` for a fresh download.
    pub fn range_header(&self) -> Option<String> {
        self.curl_range().map(|r| format!("bytes={}", r))
    }

    /// Range in the form libcurl expects (`"N-"`, without the `bytes=` unit).
    pub(crate) fn curl_range(&self) -> Option<String> {
        if self.resume_from == 0 {
            None
        } else {
            Some(format!("{}-", self.resume_from))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_no_range() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("unidic.zip");
        let state = TransferState::measure("http://h/unidic.zip", &dest, 1, 3).unwrap();
        assert_eq!(state.resume_from, 0);
        assert_eq!(state.range_header(), None);
    }

    #[test]
    fn range_tracks_on_disk_size() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("unidic.zip");
        std::fs::write(&dest, vec![0u8; 1234]).unwrap();
        let state = TransferState::measure("http://h/unidic.zip", &dest, 2, 3).unwrap();
        assert_eq!(state.resume_from, 1234);
        assert_eq!(state.range_header().as_deref(), Some("bytes=1234-"));
        assert_eq!(state.curl_range().as_deref(), Some("1234-"));
    }
}
