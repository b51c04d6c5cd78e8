//! Catalog Resolver: map a version label to a download URL via the remote manifest.

mod error;
mod fetch;
mod manifest;

pub use error::{ManifestError, ResolveError, UnknownVersionError};
pub use fetch::fetch_manifest;
pub use manifest::{CatalogEntry, Manifest, ManifestEntry};

use crate::transfer::TransferOptions;

/// Label used when none is given.
pub const DEFAULT_LABEL: &str = "latest";

/// Fetches the manifest at `manifest_url` and looks up `label`.
pub fn resolve(
    manifest_url: &str,
    label: &str,
    options: &TransferOptions,
) -> Result<CatalogEntry, ResolveError> {
    let manifest = fetch_manifest(manifest_url, options)?;
    let entry = manifest.resolve(label)?;
    tracing::info!(
        label = %entry.label,
        version = %entry.version,
        "resolved download url {}",
        entry.url
    );
    Ok(entry)
}
