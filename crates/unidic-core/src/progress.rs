//! Progress reporting for the fetch and install pipeline.
//!
//! Observers are purely informational: they cannot slow down or abort a
//! transfer. The CLI renders them; tests usually pass [`NoProgress`].

/// Snapshot of one streaming download.
#[derive(Debug, Clone, Copy)]
pub struct TransferProgress<'a> {
    /// Bytes of the file present so far, including bytes from earlier attempts.
    pub bytes_done: u64,
    /// End-to-end file size, when the server reported one.
    pub total_bytes: Option<u64>,
    /// Short name of the download (last URL path segment).
    pub label: &'a str,
}

impl TransferProgress<'_> {
    /// Fraction complete in [0.0, 1.0], `None` when the total is unknown.
    pub fn fraction(&self) -> Option<f64> {
        let total = self.total_bytes?;
        if total == 0 {
            return Some(1.0);
        }
        Some((self.bytes_done as f64 / total as f64).min(1.0))
    }
}

/// Installation stages for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStage {
    /// Downloading (or resuming) the archive.
    Fetching,
    /// Reading back every archive member.
    Validating,
    /// Unpacking into the staging directory.
    Extracting,
    /// Moving the unpacked tree to the canonical directory.
    Relocating,
    /// Writing marker files and removing excluded files.
    Finalizing,
    /// Installation complete.
    Complete,
}

impl InstallStage {
    /// Get a human-readable name for the stage.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fetching => "Downloading",
            Self::Validating => "Validating",
            Self::Extracting => "Extracting",
            Self::Relocating => "Relocating",
            Self::Finalizing => "Finalizing",
            Self::Complete => "Complete",
        }
    }
}

/// Receives progress updates from the fetcher and the installer.
pub trait ProgressObserver {
    /// Called after every chunk written to disk.
    fn on_progress(&self, progress: &TransferProgress<'_>);

    /// Called on every install phase transition.
    fn on_stage(&self, _stage: InstallStage, _detail: &str) {}
}

/// Observer that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _progress: &TransferProgress<'_>) {}
}
