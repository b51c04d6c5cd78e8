//! Archive Validator and extraction for the downloaded dictionary zip.

mod error;
mod extract;
mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{CorruptArchiveError, ExtractionError};
pub use extract::extract_all;
pub use validate::{is_valid, scan, ArchiveSummary};
