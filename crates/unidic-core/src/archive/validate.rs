//! Structural integrity check: every member is read back and its CRC-32 verified.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::error::CorruptArchiveError;

/// What a clean scan found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Number of members, directories included.
    pub members: usize,
    /// Sum of the uncompressed member sizes.
    pub uncompressed_bytes: u64,
}

/// Reads every member of the zip at `path` to the end.
///
/// The zip reader checks each member's CRC-32 once its data is exhausted, so
/// a flipped byte anywhere in member data surfaces as a read error here.
pub fn scan(path: &Path) -> Result<ArchiveSummary, CorruptArchiveError> {
    let file = File::open(path).map_err(|source| CorruptArchiveError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|source| CorruptArchiveError::NotAnArchive {
            path: path.to_path_buf(),
            source,
        })?;

    let mut uncompressed_bytes = 0u64;
    for index in 0..archive.len() {
        let mut member = archive
            .by_index(index)
            .map_err(|source| CorruptArchiveError::BadEntry { index, source })?;
        let name = member.name().to_string();
        let read = io::copy(&mut member, &mut io::sink())
            .map_err(|source| CorruptArchiveError::BadMember { name, source })?;
        uncompressed_bytes += read;
    }

    Ok(ArchiveSummary {
        members: archive.len(),
        uncompressed_bytes,
    })
}

/// True only when `path` is a zip whose every member reads back cleanly.
///
/// Malformed input is a `false` result, never an error.
pub fn is_valid(path: &Path) -> bool {
    match scan(path) {
        Ok(summary) => {
            tracing::debug!(
                members = summary.members,
                bytes = summary.uncompressed_bytes,
                "archive {} is valid",
                path.display()
            );
            true
        }
        Err(e) => {
            tracing::warn!("archive {} rejected: {}", path.display(), e);
            false
        }
    }
}
