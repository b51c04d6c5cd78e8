//! Transfer Fetcher: one resumable HTTP(S) GET with retry.
//!
//! Each attempt measures the destination file, asks for the remaining bytes
//! with `Range: bytes=<offset>-`, and streams the body to disk in chunks.
//! Failed attempts keep their bytes; the next attempt resumes after them.

mod headers;
mod label;
mod state;
mod stream;

pub use headers::{ContentRange, ResponseHead};
pub use label::label_for_url;
pub use state::TransferState;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::progress::ProgressObserver;
use crate::retry::{run_with_retry, RetryPolicy, TransferError};

/// Per-request curl settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    pub connect_timeout: Duration,
    /// A request that receives nothing for this long is aborted as timed out.
    pub stall_timeout: Duration,
    /// Receive buffer size; upper bound on the size of each streamed chunk.
    pub chunk_bytes: usize,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            stall_timeout: Duration::from_secs(30),
            chunk_bytes: 8192,
        }
    }
}

/// Downloads a URL into a file, resuming from whatever the file already holds.
#[derive(Debug, Clone, Copy)]
pub struct Fetcher {
    options: TransferOptions,
    retry: RetryPolicy,
}

impl Fetcher {
    pub fn new(options: TransferOptions, retry: RetryPolicy) -> Self {
        Self { options, retry }
    }

    /// Fetches `url` into `destination` and returns the destination path.
    ///
    /// Network-level failures are retried per the retry policy, re-measuring
    /// the file before every attempt. The file is never deleted here, even
    /// when all attempts fail.
    pub fn fetch(
        &self,
        url: &str,
        destination: &Path,
        observer: &dyn ProgressObserver,
    ) -> Result<PathBuf, TransferError> {
        let mut requests = 0;
        self.fetch_limited(url, destination, observer, self.retry.max_attempts, &mut requests)
    }

    /// Like [`fetch`](Self::fetch), but sends at most `max_requests` GETs
    /// (never more than the retry policy allows) and adds each one sent to
    /// `requests`.
    pub fn fetch_limited(
        &self,
        url: &str,
        destination: &Path,
        observer: &dyn ProgressObserver,
        max_requests: u32,
        requests: &mut u32,
    ) -> Result<PathBuf, TransferError> {
        let policy = RetryPolicy::new(
            self.retry.max_attempts.min(max_requests),
            self.retry.backoff,
        );
        let size = run_with_retry(&policy, |attempt| {
            *requests += 1;
            let state = TransferState::measure(url, destination, attempt, policy.max_attempts)
                .map_err(TransferError::Storage)?;
            let range = state.range_header();
            tracing::info!(
                attempt = state.attempt,
                max_attempts = state.max_attempts,
                range = range.as_deref().unwrap_or("none"),
                "GET {}",
                state.url
            );
            stream::fetch_once(&state, &self.options, observer)
        })?;
        tracing::info!(bytes = size, "saved {}", destination.display());
        Ok(destination.to_path_buf())
    }
}
