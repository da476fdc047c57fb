//! Enumerated options schema.
//!
//! Lists the option labels offered for each attribute field. Some fields
//! (notably `build`) have gender-qualified option lists.
//!
//! ```json
//! {
//!   "version": "0.0.4",
//!   "fields": {
//!     "height": ["Petite", "Average", "Tall"],
//!     "build": { "female": ["Slender-Female"], "male": ["Slender-Male"] }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::Gender;

/// Options for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOptions {
    /// The same list regardless of gender.
    Flat(Vec<String>),
    /// Lists keyed by `"female"` / `"male"`.
    ByGender(BTreeMap<String, Vec<String>>),
}

/// The full options schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldOptions>,
}

fn gender_key(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "female",
        Gender::Male => "male",
    }
}

impl OptionsSchema {
    /// Option labels for `field`.
    ///
    /// For gender-qualified fields, `gender` selects one list; without a
    /// gender every list is returned in key order. Unknown fields yield
    /// `None`.
    pub fn options_for(&self, field: &str, gender: Option<Gender>) -> Option<Vec<&str>> {
        let options = match self.fields.get(field)? {
            FieldOptions::Flat(list) => list.iter().map(String::as_str).collect(),
            FieldOptions::ByGender(by_gender) => match gender {
                Some(gender) => by_gender
                    .get(gender_key(gender))
                    .map(|list| list.iter().map(String::as_str).collect())
                    .unwrap_or_default(),
                None => by_gender
                    .values()
                    .flatten()
                    .map(String::as_str)
                    .collect(),
            },
        };
        Some(options)
    }

    /// Whether the option list of `field` depends on gender.
    pub fn is_gender_qualified(&self, field: &str) -> bool {
        matches!(self.fields.get(field), Some(FieldOptions::ByGender(_)))
    }

    /// Field names present in the schema.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "version": "0.0.4",
        "fields": {
            "height": ["Petite", "Average", "Tall"],
            "build": {
                "female": ["Slender-Female", "Athletic-Female"],
                "male": ["Slender-Male", "Muscular-Male"]
            }
        }
    }"#;

    #[test]
    fn test_flat_options() {
        let schema: OptionsSchema = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            schema.options_for("height", None).unwrap(),
            vec!["Petite", "Average", "Tall"]
        );
        assert!(!schema.is_gender_qualified("height"));
    }

    #[test]
    fn test_gender_qualified_options() {
        let schema: OptionsSchema = serde_json::from_str(SAMPLE).unwrap();
        assert!(schema.is_gender_qualified("build"));
        assert_eq!(
            schema.options_for("build", Some(Gender::Male)).unwrap(),
            vec!["Slender-Male", "Muscular-Male"]
        );
        // Without a gender, lists are concatenated in key order.
        assert_eq!(schema.options_for("build", None).unwrap().len(), 4);
        assert_eq!(schema.options_for("build", None).unwrap()[0], "Slender-Female");
    }

    #[test]
    fn test_unknown_field() {
        let schema: OptionsSchema = serde_json::from_str(SAMPLE).unwrap();
        assert!(schema.options_for("wings", None).is_none());
    }

    #[test]
    fn test_empty_schema() {
        let schema: OptionsSchema = serde_json::from_str("{}").unwrap();
        assert_eq!(schema.field_names().count(), 0);
        assert!(schema.version.is_none());
    }
}
