//! Install Orchestrator.
//!
//! Drives the full workflow for one dictionary version:
//! 1. Fetch the archive (resumable, retried by the fetcher)
//! 2. Validate every archive member, re-fetching on failure
//! 3. Extract into a staging directory and drop the archive
//! 4. Relocate the unpacked tree to the canonical `dicdir`
//! 5. Remove excluded files and write the marker files

mod error;
mod layout;

pub use error::{AttemptError, InstallError, LayoutError};
pub use layout::{version_marker, InstallLayout, ARCHIVE_FILE_NAME, CANONICAL_DIR_NAME};

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive;
use crate::config::{UnidicConfig, DEFAULT_TARGET_DIR_NAME};
use crate::progress::{InstallStage, ProgressObserver};
use crate::retry::RetryPolicy;
use crate::storage;
use crate::transfer::Fetcher;

/// One version to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Version string written to the marker, e.g. `"3.1.0"`.
    pub version: String,
    pub url: String,
    /// Top-level directory inside the archive.
    pub target_dir_name: String,
    /// Files removed from the canonical directory after relocation.
    pub files_to_delete: Vec<String>,
}

impl InstallRequest {
    pub fn new(version: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            url: url.into(),
            target_dir_name: DEFAULT_TARGET_DIR_NAME.to_string(),
            files_to_delete: Vec::new(),
        }
    }

    pub fn with_target_dir_name(mut self, name: impl Into<String>) -> Self {
        self.target_dir_name = name.into();
        self
    }

    pub fn with_files_to_delete(mut self, files: Vec<String>) -> Self {
        self.files_to_delete = files;
        self
    }
}

/// Installs dictionary versions below one base directory.
pub struct Installer {
    layout: InstallLayout,
    fetcher: Fetcher,
    /// Budget of GETs for the fetch + validate loop, fetcher retries included.
    retry: RetryPolicy,
}

impl Installer {
    pub fn new(base_dir: impl Into<PathBuf>, fetcher: Fetcher, retry: RetryPolicy) -> Self {
        Self {
            layout: InstallLayout::new(base_dir),
            fetcher,
            retry,
        }
    }

    /// Installer using the timeouts and retry sections of `cfg`.
    pub fn from_config(cfg: &UnidicConfig, base_dir: impl Into<PathBuf>) -> Self {
        let fetcher = Fetcher::new(cfg.transfer_options(), cfg.fetch_retry.policy());
        Self::new(base_dir, fetcher, cfg.install_retry.policy())
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Downloads, validates, unpacks and finalizes `request`.
    /// Returns the canonical directory.
    pub fn install_version(
        &self,
        request: &InstallRequest,
        observer: &dyn ProgressObserver,
    ) -> Result<PathBuf, InstallError> {
        let base_dir = self.layout.base_dir();
        fs::create_dir_all(base_dir).map_err(InstallError::io(base_dir))?;
        tracing::info!("Downloading UniDic v{}...", request.version);

        let archive_path = self.download_valid_archive(&request.url, observer)?;

        observer.on_stage(InstallStage::Extracting, &archive_path.display().to_string());
        tracing::info!("Extracting archive...");
        self.layout.clear_staging()?;
        archive::extract_all(&archive_path, &self.layout.staging_dir())?;
        storage::remove_if_exists(&archive_path).map_err(InstallError::io(&archive_path))?;

        observer.on_stage(InstallStage::Relocating, &request.target_dir_name);
        let canonical = self.layout.relocate(&request.target_dir_name)?;

        observer.on_stage(InstallStage::Finalizing, &canonical.display().to_string());
        self.layout.finalize(&request.version, &request.files_to_delete)?;

        tracing::info!("Downloaded UniDic v{} to {}", request.version, canonical.display());
        observer.on_stage(InstallStage::Complete, &canonical.display().to_string());
        Ok(canonical)
    }

    /// Fetch then validate, once. Every GET sent is added to `requests`.
    fn attempt(
        &self,
        url: &str,
        archive_path: &Path,
        observer: &dyn ProgressObserver,
        requests: &mut u32,
    ) -> Result<PathBuf, AttemptError> {
        let max_requests = self.retry.max_attempts.saturating_sub(*requests);
        let path = self
            .fetcher
            .fetch_limited(url, archive_path, observer, max_requests, requests)?;
        observer.on_stage(InstallStage::Validating, &path.display().to_string());
        let summary = archive::scan(&path)?;
        tracing::info!(
            members = summary.members,
            bytes = summary.uncompressed_bytes,
            "Download completed successfully."
        );
        Ok(path)
    }

    /// Loops fetch + validate until a valid archive is on disk or the budget
    /// is spent. The budget counts GETs, including the fetcher's own retries.
    /// A corrupt file is always deleted; a partial download is deleted
    /// between attempts but kept after the last one so a later run can
    /// resume it.
    fn download_valid_archive(
        &self,
        url: &str,
        observer: &dyn ProgressObserver,
    ) -> Result<PathBuf, InstallError> {
        let archive_path = self.layout.archive_path();
        let max_attempts = self.retry.max_attempts;
        let mut requests = 0u32;
        loop {
            observer.on_stage(
                InstallStage::Fetching,
                &format!("attempt {}/{}", requests + 1, max_attempts),
            );
            let err = match self.attempt(url, &archive_path, observer, &mut requests) {
                Ok(path) => return Ok(path),
                Err(e) => e,
            };

            let last = self.retry.is_last(requests);
            match &err {
                AttemptError::Corrupt(_) => {
                    tracing::warn!(requests, max_attempts, "Downloaded file is corrupt: {}", err);
                    storage::remove_if_exists(&archive_path)
                        .map_err(InstallError::io(&archive_path))?;
                }
                AttemptError::Transfer(_) => {
                    tracing::warn!(requests, max_attempts, "Download failed: {}", err);
                    if !last {
                        storage::remove_if_exists(&archive_path)
                            .map_err(InstallError::io(&archive_path))?;
                    }
                }
            }
            observer.on_stage(InstallStage::Fetching, &err.to_string());

            if last {
                return Err(InstallError::AttemptsExhausted {
                    attempts: requests,
                    last: err,
                });
            }
            std::thread::sleep(self.retry.backoff);
        }
    }
}
