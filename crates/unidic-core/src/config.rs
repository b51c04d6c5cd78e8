use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;
use crate::transfer::TransferOptions;

/// Remote manifest mapping version labels to `{version, url}` entries.
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/polm/unidic-py/master/dicts.json";

/// Top-level directory the dictionary archive unpacks into.
pub const DEFAULT_TARGET_DIR_NAME: &str = "unidic";

/// Retry policy parameters (`[fetch_retry]` / `[install_retry]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Fixed delay in seconds between attempts (e.g. 0.5 = 500ms).
    pub backoff_secs: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_secs: 5.0,
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        let backoff = Duration::try_from_secs_f64(self.backoff_secs).unwrap_or(Duration::ZERO);
        RetryPolicy::new(self.max_attempts, backoff)
    }
}

/// Global configuration loaded from `~/.config/unidic/config.toml`.
/// Keys missing from the file take their default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnidicConfig {
    /// URL of the JSON version manifest.
    pub manifest_url: String,
    /// Directory that receives `dicdir` (None = XDG data home, `~/.local/share/unidic`).
    pub base_dir: Option<PathBuf>,
    /// Name of the top-level directory inside the archive.
    pub target_dir_name: String,
    /// Files removed from the installed dictionary after relocation.
    pub files_to_delete: Vec<String>,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Abort a request when no data arrives for this many seconds.
    pub stall_timeout_secs: u64,
    /// Receive buffer size handed to curl; bounds the size of each streamed chunk.
    pub chunk_bytes: usize,
    /// Retries around a single GET (network-level failures only).
    pub fetch_retry: RetryConfig,
    /// Retries around the whole fetch + validate step.
    pub install_retry: RetryConfig,
}

impl Default for UnidicConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            base_dir: None,
            target_dir_name: DEFAULT_TARGET_DIR_NAME.to_string(),
            files_to_delete: Vec::new(),
            connect_timeout_secs: 30,
            stall_timeout_secs: 30,
            chunk_bytes: 8192,
            fetch_retry: RetryConfig::default(),
            install_retry: RetryConfig::default(),
        }
    }
}

impl UnidicConfig {
    /// Per-request transfer settings derived from this config.
    pub fn transfer_options(&self) -> TransferOptions {
        TransferOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            stall_timeout: Duration::from_secs(self.stall_timeout_secs),
            chunk_bytes: self.chunk_bytes,
        }
    }

    /// Base directory for the install: explicit setting, else the XDG data home.
    pub fn resolve_base_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("unidic")?;
        Ok(xdg_dirs.get_data_home())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("unidic")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UnidicConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UnidicConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UnidicConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
