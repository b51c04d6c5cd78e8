//! Catalog error types.

/// The manifest could not be obtained. Fatal for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("couldn't fetch dictionary info from {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("server error ({status}) fetching dictionary info from {url}")]
    Status { url: String, status: u32 },
    #[error("dictionary info from {url} is not valid: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The requested label is not in the manifest.
#[derive(Debug, thiserror::Error)]
#[error("unknown version \"{label}\"")]
pub struct UnknownVersionError {
    pub label: String,
    /// `(label, version)` pairs that do exist.
    pub known: Vec<(String, String)>,
}

/// Failure of [`resolve`](super::resolve).
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    UnknownVersion(#[from] UnknownVersionError),
}
