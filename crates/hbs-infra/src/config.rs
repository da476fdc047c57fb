//! Global configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.hbs/` in production)
//! and deserializes it into [`HbsConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use hbs_types::config::HbsConfig;

use crate::filesystem::LocalFileSystem;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`HbsConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> HbsConfig {
    let config_path = LocalFileSystem::config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return HbsConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return HbsConfig::default();
        }
    };

    match toml::from_str::<HbsConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            HbsConfig::default()
        }
    }
}

/// Resolve the characters directory.
///
/// Priority:
/// 1. `characters_dir` from config (relative paths are joined onto `data_dir`)
/// 2. `{data_dir}/characters`
pub fn resolve_characters_dir(config: &HbsConfig, data_dir: &Path) -> PathBuf {
    match &config.characters_dir {
        Some(dir) => anchor(dir, data_dir),
        None => LocalFileSystem::characters_dir(data_dir),
    }
}

/// Resolve the options schema override, if any.
///
/// An explicit CLI path wins over `schema_path` from config. Config paths
/// are relative to `data_dir`; CLI paths are used as given.
pub fn resolve_schema_path(
    config: &HbsConfig,
    data_dir: &Path,
    cli_override: Option<&Path>,
) -> Option<PathBuf> {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.schema_path.as_deref().map(|p| anchor(p, data_dir)))
}

fn anchor(path: &Path, data_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
