//! `unidic info` – where the dictionary lives and which version it is.

use anyhow::{Context, Result};
use std::path::Path;
use unidic_core::config::UnidicConfig;
use unidic_core::install::InstallLayout;

use super::base_dir;

pub fn run_info(cfg: &UnidicConfig, dir: Option<&Path>) -> Result<()> {
    let layout = InstallLayout::new(base_dir(cfg, dir)?);
    let version_file = layout.version_file();
    let installed = layout
        .installed_version()
        .with_context(|| format!("read {}", version_file.display()))?;
    println!("dicdir:  {}", layout.canonical_dir().display());
    match installed {
        Some(v) => println!("version: {}", v),
        None => println!("version: not installed"),
    }
    Ok(())
}
