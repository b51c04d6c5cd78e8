//! `unidic list` – show manifest labels and versions.

use anyhow::Result;
use unidic_core::catalog;
use unidic_core::config::UnidicConfig;

use super::print_versions;

pub fn run_list(cfg: &UnidicConfig) -> Result<()> {
    let manifest = catalog::fetch_manifest(&cfg.manifest_url, &cfg.transfer_options())?;
    if manifest.is_empty() {
        println!("No versions in manifest.");
    } else {
        print_versions(&manifest.known_versions());
    }
    Ok(())
}
