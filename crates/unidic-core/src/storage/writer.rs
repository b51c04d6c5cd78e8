//! Sequential writer for the working archive file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How the destination file is opened for an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep the existing bytes and append after them (resume).
    Append,
    /// Discard any existing bytes and write from offset 0.
    Truncate,
}

/// Writer for the downloaded archive. Bytes are only ever appended, so the
/// on-disk content is always a prefix of the final file.
pub struct StorageWriter {
    file: File,
    path: PathBuf,
    written: u64,
}

impl StorageWriter {
    /// Open `path` for this attempt, creating it if missing.
    pub fn open(path: &Path, mode: WriteMode) -> io::Result<Self> {
        let mut options = File::options();
        options.create(true);
        match mode {
            WriteMode::Append => options.append(true),
            WriteMode::Truncate => options.write(true).truncate(true),
        };
        let file = options.open(path)?;
        Ok(StorageWriter {
            file,
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Append one chunk of the response body.
    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes written through this writer (not counting what was on disk before).
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush file data to disk so a later attempt measures the true size.
    pub fn sync(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.file.sync_data()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
