//! Retry and backoff policy.
//!
//! Error classification (timeouts, throttling, connection failures) and a
//! fixed-backoff decision shared by the fetcher and the installer.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::TransferError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
