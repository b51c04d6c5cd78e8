//! `unidic validate <PATH>` – full read-back of a local archive.

use anyhow::Result;
use std::path::Path;
use unidic_core::archive;

pub fn run_validate(path: &Path) -> Result<()> {
    let summary = archive::scan(path)?;
    println!(
        "{}: ok ({} members, {} bytes uncompressed)",
        path.display(),
        summary.members,
        summary.uncompressed_bytes
    );
    Ok(())
}
