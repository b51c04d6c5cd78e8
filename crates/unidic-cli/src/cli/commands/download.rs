//! `unidic download [LABEL]` – resolve a version and install it.

use anyhow::Result;
use std::path::Path;
use unidic_core::catalog::{self, ResolveError};
use unidic_core::config::UnidicConfig;
use unidic_core::install::{InstallRequest, Installer};

use super::{base_dir, print_versions};
use crate::cli::progress::ConsoleProgress;

pub fn run_download(cfg: &UnidicConfig, label: &str, dir: Option<&Path>) -> Result<()> {
    let entry = match catalog::resolve(&cfg.manifest_url, label, &cfg.transfer_options()) {
        Ok(entry) => entry,
        Err(ResolveError::UnknownVersion(e)) => {
            println!("Unknown version \"{}\".", e.label);
            println!("Known versions:");
            print_versions(&e.known);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    println!("download url: {}", entry.url);
    println!("Dictionary version: {}", entry.version);

    let base_dir = base_dir(cfg, dir)?;
    let installer = Installer::from_config(cfg, &base_dir);
    let request = InstallRequest::new(&entry.version, &entry.url)
        .with_target_dir_name(&cfg.target_dir_name)
        .with_files_to_delete(cfg.files_to_delete.clone());
    let canonical = installer.install_version(&request, &ConsoleProgress::new())?;

    println!("Downloaded UniDic v{} to {}", entry.version, canonical.display());
    Ok(())
}
