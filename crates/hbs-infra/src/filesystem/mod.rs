//! Filesystem adapters for the Human Builder System.
//!
//! Implements the `FileSystem` trait from `hbs-core` for real filesystem I/O
//! and resolves the data directory layout.

use std::path::{Path, PathBuf};

use hbs_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
///
/// All operations go through `tokio::fs` for async I/O.
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a new LocalFileSystem adapter.
    pub fn new() -> Self {
        Self
    }

    /// Compute the default characters directory: `{data_dir}/characters/`.
    pub fn characters_dir(data_dir: &Path) -> PathBuf {
        data_dir.join("characters")
    }

    /// Compute the config file path: `{data_dir}/config.toml`.
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }

    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        tokio::fs::read_to_string(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `HBS_DATA_DIR` environment variable
/// 2. `~/.hbs` in the home directory
/// 3. `.hbs` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HBS_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".hbs");
    }

    PathBuf::from(".hbs")
}
