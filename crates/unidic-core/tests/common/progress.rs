//! Observer that keeps every update for later assertions.

use std::cell::RefCell;

use unidic_core::progress::{InstallStage, ProgressObserver, TransferProgress};

#[derive(Default)]
pub struct RecordingProgress {
    /// `(bytes_done, total_bytes)` per chunk.
    pub chunks: RefCell<Vec<(u64, Option<u64>)>>,
    pub stages: RefCell<Vec<(InstallStage, String)>>,
}

impl ProgressObserver for RecordingProgress {
    fn on_progress(&self, progress: &TransferProgress<'_>) {
        self.chunks
            .borrow_mut()
            .push((progress.bytes_done, progress.total_bytes));
    }

    fn on_stage(&self, stage: InstallStage, detail: &str) {
        self.stages.borrow_mut().push((stage, detail.to_string()));
    }
}
