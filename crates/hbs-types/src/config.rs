//! Global configuration types.
//!
//! `HbsConfig` represents the top-level `config.toml` in the data directory:
//! prompt defaults, where character files live, and an optional options
//! schema override.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::prompt::PromptOptions;

/// Top-level configuration.
///
/// Loaded from `~/.hbs/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HbsConfig {
    /// Default prompt options; CLI flags override individual fields.
    #[serde(default)]
    pub prompt: PromptOptions,

    /// Directory for character files. Relative paths resolve against the
    /// data directory; unset means `{data_dir}/characters`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters_dir: Option<PathBuf>,

    /// JSON options schema replacing the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,
}
