//! Prompt formatting options.

use serde::{Deserialize, Serialize};

/// Options controlling how a prompt is assembled.
///
/// All fields have defaults, so an empty `[prompt]` table or `{}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    /// Emit face, eye, eyebrow, nose, mouth and facial-hair clauses.
    #[serde(alias = "includeDetails")]
    pub include_details: bool,
    /// Clause placed verbatim before everything else.
    #[serde(alias = "stylePrefix")]
    pub style_prefix: String,
    /// Clause placed verbatim after everything else.
    #[serde(alias = "styleSuffix")]
    pub style_suffix: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            include_details: true,
            style_prefix: String::new(),
            style_suffix: String::new(),
        }
    }
}

impl PromptOptions {
    /// Builder-style override for `include_details`.
    pub fn with_details(mut self, include_details: bool) -> Self {
        self.include_details = include_details;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.style_prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.style_suffix = suffix.into();
        self
    }
}
