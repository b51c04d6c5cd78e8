//! On-disk layout of an install and the relocate / finalize steps.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::error::{InstallError, LayoutError};
use crate::storage;

/// Directory name the tokenizer looks for.
pub const CANONICAL_DIR_NAME: &str = "dicdir";
/// Working file the archive is downloaded to.
pub const ARCHIVE_FILE_NAME: &str = "unidic.zip";
const STAGING_DIR_NAME: &str = ".unidic-extract";
const VERSION_FILE_NAME: &str = "version";
const MECABRC_FILE_NAME: &str = "mecabrc";
const MECABRC_CONTENT: &str = "# This is a dummy file.";

/// Contents of the version marker for `version`.
pub fn version_marker(version: &str) -> String {
    format!("unidic-{}", version)
}

/// Paths of one install, all below an explicit base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    base_dir: PathBuf,
}

impl InstallLayout {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn archive_path(&self) -> PathBuf {
        self.base_dir.join(ARCHIVE_FILE_NAME)
    }

    /// Scratch directory the archive is unpacked into before relocation.
    pub fn staging_dir(&self) -> PathBuf {
        self.base_dir.join(STAGING_DIR_NAME)
    }

    pub fn canonical_dir(&self) -> PathBuf {
        self.base_dir.join(CANONICAL_DIR_NAME)
    }

    pub fn version_file(&self) -> PathBuf {
        self.canonical_dir().join(VERSION_FILE_NAME)
    }

    pub fn mecabrc_file(&self) -> PathBuf {
        self.canonical_dir().join(MECABRC_FILE_NAME)
    }

    /// Remove a staging directory left behind by an interrupted run.
    pub fn clear_staging(&self) -> Result<(), InstallError> {
        remove_dir_if_exists(&self.staging_dir())
    }

    /// Move `<staging>/<target_dir_name>` to the canonical directory, replacing
    /// any previous install, and drop the staging directory.
    pub fn relocate(&self, target_dir_name: &str) -> Result<PathBuf, InstallError> {
        let staging = self.staging_dir();
        let extracted = staging.join(target_dir_name);
        if !extracted.is_dir() {
            if let Err(e) = fs::remove_dir_all(&staging) {
                tracing::debug!("could not remove {}: {}", staging.display(), e);
            }
            return Err(LayoutError {
                expected: extracted,
            }
            .into());
        }

        let canonical = self.canonical_dir();
        if canonical.is_dir() {
            tracing::info!("removing previous install at {}", canonical.display());
        }
        remove_dir_if_exists(&canonical)?;
        fs::rename(&extracted, &canonical).map_err(InstallError::io(&canonical))?;
        remove_dir_if_exists(&staging)?;
        Ok(canonical)
    }

    /// Remove excluded files, then write the version marker and the
    /// placeholder `mecabrc`.
    pub fn finalize(&self, version: &str, files_to_delete: &[String]) -> Result<(), InstallError> {
        let canonical = self.canonical_dir();
        for name in files_to_delete {
            if !is_plain_relative(name) {
                tracing::warn!("ignoring exclusion outside the dictionary: {}", name);
                continue;
            }
            let path = canonical.join(name);
            if storage::remove_if_exists(&path).map_err(InstallError::io(&path))? {
                tracing::debug!("removed {}", path.display());
            }
        }

        let version_file = self.version_file();
        fs::write(&version_file, version_marker(version))
            .map_err(InstallError::io(&version_file))?;
        let mecabrc = self.mecabrc_file();
        fs::write(&mecabrc, MECABRC_CONTENT).map_err(InstallError::io(&mecabrc))?;
        Ok(())
    }

    /// Contents of the version marker, `None` when nothing is installed.
    pub fn installed_version(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(self.version_file()) {
            Ok(s) => Ok(Some(s.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn remove_dir_if_exists(path: &Path) -> Result<(), InstallError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(InstallError::io(path)(e)),
    }
}

fn is_plain_relative(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty() && path.components().all(|c| matches!(c, Component::Normal(_)))
}
