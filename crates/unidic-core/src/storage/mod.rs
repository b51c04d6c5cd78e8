//! Disk I/O and file lifecycle for the working archive.
//!
//! The resume point is always derived from the file itself; nothing about
//! partial progress is cached in memory between attempts.

mod writer;

pub use writer::{StorageWriter, WriteMode};

use std::fs;
use std::io;
use std::path::Path;

/// Current size of `path` in bytes, or 0 when the file does not exist.
pub fn on_disk_len(path: &Path) -> io::Result<u64> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e),
    }
}

/// Truncate `path` to zero bytes, creating it if missing.
pub fn truncate(path: &Path) -> io::Result<()> {
    StorageWriter::open(path, WriteMode::Truncate).map(|_| ())
}

/// Remove `path` if present. Returns whether a file was removed.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_zero_len() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(on_disk_len(&dir.path().join("nope.zip")).unwrap(), 0);
    }

    #[test]
    fn append_keeps_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unidic.zip");
        fs::write(&path, b"hello ").unwrap();

        let mut w = StorageWriter::open(&path, WriteMode::Append).unwrap();
        w.write_chunk(b"world").unwrap();
        w.sync().unwrap();
        assert_eq!(w.written(), 5);
        assert_eq!(w.path(), path.as_path());
        drop(w);

        assert_eq!(fs::read(&path).unwrap(), b"hello world");
        assert_eq!(on_disk_len(&path).unwrap(), 11);
    }

    #[test]
    fn truncate_discards_existing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unidic.zip");
        fs::write(&path, b"stale bytes").unwrap();

        let mut w = StorageWriter::open(&path, WriteMode::Truncate).unwrap();
        w.write_chunk(b"new").unwrap();
        drop(w);
        assert_eq!(fs::read(&path).unwrap(), b"new");

        truncate(&path).unwrap();
        assert_eq!(on_disk_len(&path).unwrap(), 0);
    }

    #[test]
    fn remove_if_exists_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unidic.zip");
        fs::write(&path, b"x").unwrap();
        assert!(remove_if_exists(&path).unwrap());
        assert!(!remove_if_exists(&path).unwrap());
    }
}
