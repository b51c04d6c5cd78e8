//! Console rendering of download progress and install stages.

use std::cell::Cell;
use std::time::{Duration, Instant};
use unidic_core::progress::{InstallStage, ProgressObserver, TransferProgress};

const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Prints at most one progress line per interval, plus the final one.
#[derive(Default)]
pub struct ConsoleProgress {
    last_print: Cell<Option<Instant>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&self, progress: &TransferProgress<'_>) {
        let now = Instant::now();
        let finished = progress.total_bytes == Some(progress.bytes_done);
        let due = self
            .last_print
            .get()
            .map_or(true, |t| now.duration_since(t) >= PROGRESS_INTERVAL);
        if !due && !finished {
            return;
        }
        println!("  {}", format_progress(progress));
        self.last_print.set(Some(now));
    }

    fn on_stage(&self, stage: InstallStage, detail: &str) {
        println!("{}: {}", stage.name(), detail);
    }
}

fn format_progress(progress: &TransferProgress<'_>) -> String {
    let done_mib = progress.bytes_done as f64 / 1_048_576.0;
    match (progress.total_bytes, progress.fraction()) {
        (Some(total), Some(fraction)) => format!(
            "{} {:.1} / {:.1} MiB ({:.1}%)",
            progress.label,
            done_mib,
            total as f64 / 1_048_576.0,
            fraction * 100.0
        ),
        _ => format!("{} {:.1} MiB", progress.label, done_mib),
    }
}
