//! HTTP GET of the manifest.

use super::error::ManifestError;
use super::manifest::Manifest;
use crate::transfer::TransferOptions;

/// Downloads and parses the manifest. Anything but `200` is an error.
pub fn fetch_manifest(url: &str, options: &TransferOptions) -> Result<Manifest, ManifestError> {
    let unreachable = |source| ManifestError::Unreachable {
        url: url.to_string(),
        source,
    };
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(unreachable)?;
    easy.follow_location(true).map_err(unreachable)?;
    easy.useragent(concat!("unidic-fetch/", env!("CARGO_PKG_VERSION")))
        .map_err(unreachable)?;
    easy.connect_timeout(options.connect_timeout)
        .map_err(unreachable)?;
    easy.low_speed_limit(1).map_err(unreachable)?;
    easy.low_speed_time(options.stall_timeout)
        .map_err(unreachable)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(unreachable)?;
        transfer.perform().map_err(unreachable)?;
    }

    let status = easy.response_code().map_err(unreachable)?;
    if status != 200 {
        return Err(ManifestError::Status {
            url: url.to_string(),
            status,
        });
    }

    let manifest = Manifest::from_slice(&body).map_err(|source| ManifestError::Parse {
        url: url.to_string(),
        source,
    })?;
    tracing::debug!(entries = manifest.len(), "fetched manifest from {}", url);
    Ok(manifest)
}
