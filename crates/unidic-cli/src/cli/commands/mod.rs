//! CLI command handlers, one file per command.

mod download;
mod info;
mod list;
mod validate;

pub use download::run_download;
pub use info::run_info;
pub use list::run_list;
pub use validate::run_validate;

use anyhow::Result;
use std::path::{Path, PathBuf};
use unidic_core::config::UnidicConfig;

/// `--dir` when given, else the configured base directory.
fn base_dir(cfg: &UnidicConfig, dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(d) => Ok(d.to_path_buf()),
        None => cfg.resolve_base_dir(),
    }
}

/// Prints `(label, version)` pairs as a two-column table.
fn print_versions(known: &[(String, String)]) {
    println!("{:<16} {}", "LABEL", "VERSION");
    for (label, version) in known {
        println!("{:<16} {}", label, version);
    }
}
