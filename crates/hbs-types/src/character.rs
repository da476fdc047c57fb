//! The persisted character file.
//!
//! Layout on disk:
//! ```json
//! {
//!   "metadata": {
//!     "character_name": "Ana",
//!     "timestamp": "2025-03-01T12:00:00Z",
//!     "version": "0.0.4"
//!   },
//!   "t2i_parameters": { "gender": "Identify as female", ... }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::CharacterAttributes;

/// File format version written into new character files.
pub const FORMAT_VERSION: &str = "0.0.4";

/// Extension used for character files (`{slug}.hbs.json`).
pub const FILE_EXTENSION: &str = "hbs.json";

/// Metadata header of a character file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterMetadata {
    pub character_name: String,
    /// Last save time (ISO-8601, UTC).
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

/// A saved character: metadata plus the attribute record verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterFile {
    pub metadata: CharacterMetadata,
    #[serde(default)]
    pub t2i_parameters: CharacterAttributes,
}

impl CharacterFile {
    /// Wrap an attribute record with fresh metadata.
    pub fn new(character_name: impl Into<String>, attributes: CharacterAttributes) -> Self {
        Self {
            metadata: CharacterMetadata {
                character_name: character_name.into(),
                timestamp: Utc::now(),
                version: FORMAT_VERSION.to_string(),
            },
            t2i_parameters: attributes,
        }
    }

    /// Refresh the timestamp and format version before a save.
    pub fn touch(&mut self) {
        self.metadata.timestamp = Utc::now();
        self.metadata.version = FORMAT_VERSION.to_string();
    }

    /// Default file name for this character.
    pub fn file_name(&self) -> String {
        file_name_for(&self.metadata.character_name)
    }
}

/// Default file name for a character name (`"Ana Lucia"` -> `ana-lucia.hbs.json`).
///
/// Falls back to `character` when the name has no alphanumeric characters.
pub fn file_name_for(character_name: &str) -> String {
    let slug = slugify(character_name);
    let stem = if slug.is_empty() { "character" } else { slug.as_str() };
    format!("{stem}.{FILE_EXTENSION}")
}

/// Generate a filesystem-safe slug from a character name.
///
/// Rules:
/// - Lowercase
/// - Replace non-alphanumeric characters with hyphens
/// - Collapse consecutive hyphens into one
/// - Trim leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use hbs_types::character::slugify;
///
/// assert_eq!(slugify("Ana Lucia"), "ana-lucia");
/// assert_eq!(slugify("Captain  Reyes!"), "captain-reyes");
/// ```
pub fn slugify(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_hyphen = true;
    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            result.push(c);
            prev_was_hyphen = false;
        } else if !prev_was_hyphen {
            result.push('-');
            prev_was_hyphen = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
