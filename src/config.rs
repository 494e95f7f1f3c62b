//! Adapter configuration discovered from the nearest `package.json`.
//!
//! The configuration block is optional and lives under
//! `config → cz-conventional-pivotal-tracker → config`:
//!
//! ```json
//! {
//!   "config": {
//!     "cz-conventional-pivotal-tracker": {
//!       "config": { "scopes": ["app", "server", "devops"] }
//!     }
//!   }
//! }
//! ```
//!
//! Missing, unreadable or misshaped manifests are never an error; they
//! simply resolve to "no config".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Name of the adapter's key inside the manifest's `config` object.
pub const ADAPTER_NAME: &str = "cz-conventional-pivotal-tracker";

/// Manifest file searched for while walking up the directory tree.
pub const MANIFEST_FILE: &str = "package.json";

/// Subdirectory that may hold the manifest instead of the directory itself.
const CONFIG_SUBDIR: &str = ".config";

/// Adapter options read from the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdapterConfig {
    /// Scopes offered as choices; empty means free-text scope entry.
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// A configuration together with the manifest it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The parsed adapter options.
    pub config: AdapterConfig,
    /// Manifest file the options were read from.
    pub manifest: PathBuf,
}

impl ResolvedConfig {
    /// Returns the notice shown to the user when a config is in use.
    pub fn notice(&self) -> String {
        format!(">>> Using {ADAPTER_NAME} config specified in your {MANIFEST_FILE}")
    }
}

/// Resolves the adapter configuration starting at `start` and walking up.
///
/// The user's home directory is never consulted.
pub fn resolve_config(start: &Path) -> Option<ResolvedConfig> {
    let home = dirs::home_dir();
    resolve_config_with_home(start, home.as_deref())
}

/// Resolves the adapter configuration, skipping `home` during the walk.
pub fn resolve_config_with_home(start: &Path, home: Option<&Path>) -> Option<ResolvedConfig> {
    let manifest = find_manifest(start, home)?;
    let config = load_adapter_config(&manifest)?;

    info!(manifest = %manifest.display(), scopes = config.scopes.len(), "Using adapter config");

    Some(ResolvedConfig { config, manifest })
}

/// Finds the nearest manifest from `start` upwards.
///
/// Each directory is checked for `package.json` and then
/// `.config/package.json`. The directory equal to `home` is skipped.
pub fn find_manifest(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let home = home.map(|h| h.canonicalize().unwrap_or_else(|_| h.to_path_buf()));

    for dir in start.ancestors() {
        if home.as_deref() == Some(dir) {
            debug!(dir = %dir.display(), "Skipping home directory");
            continue;
        }

        for candidate in [
            dir.join(MANIFEST_FILE),
            dir.join(CONFIG_SUBDIR).join(MANIFEST_FILE),
        ] {
            if candidate.is_file() {
                debug!(manifest = %candidate.display(), "Found manifest");
                return Some(candidate);
            }
        }
    }

    debug!(start = %start.display(), "No manifest found");
    None
}

/// Reads a manifest and extracts the adapter block, if present and well formed.
pub fn load_adapter_config(manifest: &Path) -> Option<AdapterConfig> {
    match fs::read_to_string(manifest) {
        Ok(content) => parse_adapter_config(&content),
        Err(err) => {
            debug!(manifest = %manifest.display(), error = %err, "Failed to read manifest");
            None
        }
    }
}

/// Extracts the adapter block from manifest JSON text.
pub fn parse_adapter_config(content: &str) -> Option<AdapterConfig> {
    let manifest: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "Manifest is not valid JSON");
            return None;
        }
    };

    let pointer = format!("/config/{ADAPTER_NAME}/config");
    let block = manifest.pointer(&pointer)?;

    match AdapterConfig::deserialize(block) {
        Ok(config) => Some(config),
        Err(err) => {
            debug!(error = %err, "Adapter config block has an unexpected shape");
            None
        }
    }
}
