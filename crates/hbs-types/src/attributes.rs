//! The character attribute record.
//!
//! Every field is optional: an absent field means "omit the clause". Values
//! are kept as the raw option text chosen in the form (e.g.
//! `"Youthful Adult Appearance"`) so that unknown values pass through to the
//! prompt untouched.
//!
//! Deserialization is lenient at the field level. An empty string, `null`,
//! or a value of the wrong JSON type reads as absent instead of failing the
//! whole record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttributeError;

/// A facial feature chosen as a shape plus an ordered list of modifiers
/// (eyes, eyebrows, nose).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub shape: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub modifiers: Vec<String>,
}

impl FeatureSelection {
    /// Create a selection with a shape and no modifiers.
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: Some(shape.into()),
            modifiers: Vec::new(),
        }
    }

    /// Builder-style helper to attach modifiers.
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_none() && self.modifiers.is_empty()
    }
}

/// Hair colour as a colour group plus a specific shade within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HairColor {
    #[serde(
        default,
        alias = "colorGroup",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_group: Option<String>,
    #[serde(
        default,
        alias = "specificShade",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub specific_shade: Option<String>,
}

impl HairColor {
    pub fn new(color_group: impl Into<String>, specific_shade: impl Into<String>) -> Self {
        Self {
            color_group: Some(color_group.into()),
            specific_shade: Some(specific_shade.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color_group.is_none() && self.specific_shade.is_none()
    }
}

/// Structured description of one character's appearance choices.
///
/// Serialized with snake_case keys (the persisted `t2i_parameters` layout);
/// camelCase keys are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAttributes {
    // Identity
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(
        default,
        alias = "visualHeritage",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub visual_heritage: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    // Body
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(
        default,
        alias = "skinTone",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub skin_tone: Option<String>,
    #[serde(
        default,
        alias = "skinTexture",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub skin_texture: Option<String>,

    // Face structure
    #[serde(
        default,
        alias = "headShape",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub head_shape: Option<String>,
    #[serde(
        default,
        alias = "faceShape",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub face_shape: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub forehead: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub jawline: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub cheekbones: Option<String>,

    // Facial features
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub eyes: Option<FeatureSelection>,
    #[serde(
        default,
        alias = "eyeColor",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub eye_color: Option<String>,
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub eyebrows: Option<FeatureSelection>,
    #[serde(default, deserialize_with = "lenient::object", skip_serializing_if = "Option::is_none")]
    pub nose: Option<FeatureSelection>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub mouth: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub lips: Option<String>,
    #[serde(
        default,
        alias = "facialHair",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub facial_hair: Option<String>,

    // Hair
    #[serde(
        default,
        alias = "hairStyle",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_style: Option<String>,
    #[serde(
        default,
        alias = "hairLength",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_length: Option<String>,
    #[serde(
        default,
        alias = "hairTexture",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_texture: Option<String>,
    #[serde(
        default,
        alias = "hairDensity",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_density: Option<String>,
    #[serde(
        default,
        alias = "hairVolume",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_volume: Option<String>,
    #[serde(
        default,
        alias = "hairColor",
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_color: Option<HairColor>,
    #[serde(
        default,
        alias = "hairParting",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_parting: Option<String>,
    #[serde(
        default,
        alias = "bangsFringe",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bangs_fringe: Option<String>,
    #[serde(
        default,
        alias = "tailsAndBuns",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tails_and_buns: Option<String>,
    #[serde(
        default,
        alias = "hairStyleModifiers",
        deserialize_with = "lenient::list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hair_style_modifiers: Vec<String>,
}

/// Every editable field path, in form order.
///
/// Nested selections are addressed with a dot (`eyes.shape`,
/// `hair_color.specific_shade`).
pub const FIELD_PATHS: &[&str] = &[
    "gender",
    "visual_heritage",
    "age",
    "build",
    "height",
    "skin_tone",
    "skin_texture",
    "head_shape",
    "face_shape",
    "forehead",
    "jawline",
    "cheekbones",
    "eyes.shape",
    "eyes.modifiers",
    "eye_color",
    "eyebrows.shape",
    "eyebrows.modifiers",
    "nose.shape",
    "nose.modifiers",
    "mouth",
    "lips",
    "facial_hair",
    "hair_style",
    "hair_length",
    "hair_texture",
    "hair_density",
    "hair_volume",
    "hair_color.color_group",
    "hair_color.specific_shade",
    "hair_parting",
    "bangs_fringe",
    "tails_and_buns",
    "hair_style_modifiers",
];

enum FieldSlot<'a> {
    Text(&'a mut Option<String>),
    List(&'a mut Vec<String>),
}

impl CharacterAttributes {
    /// Parsed gender, if the stored value is a recognised one.
    pub fn gender_kind(&self) -> Option<Gender> {
        self.gender.as_deref().and_then(|g| g.parse().ok())
    }

    /// Parsed age band, if the stored value is a recognised one.
    pub fn age_band(&self) -> Option<AgeBand> {
        self.age.as_deref().and_then(|a| a.parse().ok())
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reset every field to absent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set a field by path. List fields take comma-separated values; an empty
    /// value clears the field.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), AttributeError> {
        let path = normalize_path(path);
        let value = value.trim();
        match self.slot(&path)? {
            FieldSlot::Text(slot) => {
                *slot = (!value.is_empty()).then(|| value.to_string());
            }
            FieldSlot::List(slot) => *slot = split_list(value),
        }
        self.prune();
        Ok(())
    }

    /// Clear a field by path.
    pub fn unset_field(&mut self, path: &str) -> Result<(), AttributeError> {
        let path = normalize_path(path);
        match self.slot(&path)? {
            FieldSlot::Text(slot) => *slot = None,
            FieldSlot::List(slot) => slot.clear(),
        }
        self.prune();
        Ok(())
    }

    /// Every set field as `(path, value)` in form order. List values are
    /// comma-joined.
    pub fn set_fields(&self) -> Vec<(&'static str, String)> {
        let mut scratch = self.clone();
        FIELD_PATHS
            .iter()
            .filter_map(|path| {
                let value = match scratch.slot(path).ok()? {
                    FieldSlot::Text(slot) => slot.clone()?,
                    FieldSlot::List(slot) if slot.is_empty() => return None,
                    FieldSlot::List(slot) => slot.join(", "),
                };
                Some((*path, value))
            })
            .collect()
    }

    fn slot(&mut self, path: &str) -> Result<FieldSlot<'_>, AttributeError> {
        let slot = match path {
            "gender" => FieldSlot::Text(&mut self.gender),
            "visual_heritage" => FieldSlot::Text(&mut self.visual_heritage),
            "age" => FieldSlot::Text(&mut self.age),
            "build" => FieldSlot::Text(&mut self.build),
            "height" => FieldSlot::Text(&mut self.height),
            "skin_tone" => FieldSlot::Text(&mut self.skin_tone),
            "skin_texture" => FieldSlot::Text(&mut self.skin_texture),
            "head_shape" => FieldSlot::Text(&mut self.head_shape),
            "face_shape" => FieldSlot::Text(&mut self.face_shape),
            "forehead" => FieldSlot::Text(&mut self.forehead),
            "jawline" => FieldSlot::Text(&mut self.jawline),
            "cheekbones" => FieldSlot::Text(&mut self.cheekbones),
            "eyes.shape" => FieldSlot::Text(&mut self.eyes.get_or_insert_with(Default::default).shape),
            "eyes.modifiers" => {
                FieldSlot::List(&mut self.eyes.get_or_insert_with(Default::default).modifiers)
            }
            "eye_color" => FieldSlot::Text(&mut self.eye_color),
            "eyebrows.shape" => {
                FieldSlot::Text(&mut self.eyebrows.get_or_insert_with(Default::default).shape)
            }
            "eyebrows.modifiers" => {
                FieldSlot::List(&mut self.eyebrows.get_or_insert_with(Default::default).modifiers)
            }
            "nose.shape" => FieldSlot::Text(&mut self.nose.get_or_insert_with(Default::default).shape),
            "nose.modifiers" => {
                FieldSlot::List(&mut self.nose.get_or_insert_with(Default::default).modifiers)
            }
            "mouth" => FieldSlot::Text(&mut self.mouth),
            "lips" => FieldSlot::Text(&mut self.lips),
            "facial_hair" => FieldSlot::Text(&mut self.facial_hair),
            "hair_style" => FieldSlot::Text(&mut self.hair_style),
            "hair_length" => FieldSlot::Text(&mut self.hair_length),
            "hair_texture" => FieldSlot::Text(&mut self.hair_texture),
            "hair_density" => FieldSlot::Text(&mut self.hair_density),
            "hair_volume" => FieldSlot::Text(&mut self.hair_volume),
            "hair_color.color_group" => FieldSlot::Text(
                &mut self.hair_color.get_or_insert_with(Default::default).color_group,
            ),
            "hair_color.specific_shade" => FieldSlot::Text(
                &mut self.hair_color.get_or_insert_with(Default::default).specific_shade,
            ),
            "hair_parting" => FieldSlot::Text(&mut self.hair_parting),
            "bangs_fringe" => FieldSlot::Text(&mut self.bangs_fringe),
            "tails_and_buns" => FieldSlot::Text(&mut self.tails_and_buns),
            "hair_style_modifiers" => FieldSlot::List(&mut self.hair_style_modifiers),
            other => return Err(AttributeError::UnknownField(other.to_string())),
        };
        Ok(slot)
    }

    /// Drop nested selections that no longer hold anything.
    fn prune(&mut self) {
        for feature in [&mut self.eyes, &mut self.eyebrows, &mut self.nose] {
            if feature.as_ref().is_some_and(FeatureSelection::is_empty) {
                *feature = None;
            }
        }
        if self.hair_color.as_ref().is_some_and(HairColor::is_empty) {
            self.hair_color = None;
        }
    }
}

/// Normalize a user-supplied field path: camelCase and kebab-case become
/// snake_case, segments stay dot-separated.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 4);
    for c in path.trim().chars() {
        if c.is_ascii_uppercase() {
            if !normalized.is_empty() && !normalized.ends_with(['.', '_']) {
                normalized.push('_');
            }
            normalized.push(c.to_ascii_lowercase());
        } else if c == '-' {
            normalized.push('_');
        } else {
            normalized.push(c);
        }
    }
    normalized
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Recognised gender values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Option label as it appears in the form and in saved files.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Identify as female",
            Gender::Male => "Identify as male",
        }
    }

    /// Base noun used in the identity clause.
    pub fn noun(&self) -> &'static str {
        match self {
            Gender::Female => "woman",
            Gender::Male => "man",
        }
    }

    /// Suffix carried by gender-qualified build options ("Athletic-Female").
    pub fn build_suffix(&self) -> &'static str {
        match self {
            Gender::Female => "-Female",
            Gender::Male => "-Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identify as female" | "female" | "woman" => Ok(Gender::Female),
            "identify as male" | "male" | "man" => Ok(Gender::Male),
            other => Err(format!("unknown gender: '{other}'")),
        }
    }
}

/// The six age bands offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Child,
    Teenage,
    YouthfulAdult,
    MatureAdult,
    MiddleAged,
    Elderly,
}

impl AgeBand {
    pub const ALL: [AgeBand; 6] = [
        AgeBand::Child,
        AgeBand::Teenage,
        AgeBand::YouthfulAdult,
        AgeBand::MatureAdult,
        AgeBand::MiddleAged,
        AgeBand::Elderly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Child => "Pre-adolescent Child",
            AgeBand::Teenage => "Teenage Years",
            AgeBand::YouthfulAdult => "Youthful Adult Appearance",
            AgeBand::MatureAdult => "Mature Adult Features",
            AgeBand::MiddleAged => "Middle-aged Characteristics",
            AgeBand::Elderly => "Elderly Senior Traits",
        }
    }

    /// Descriptor placed before the identity noun.
    pub fn descriptor(&self) -> &'static str {
        match self {
            AgeBand::Child => "young",
            AgeBand::Teenage => "teenage",
            AgeBand::YouthfulAdult => "young adult",
            AgeBand::MatureAdult => "adult",
            AgeBand::MiddleAged => "middle-aged",
            AgeBand::Elderly => "elderly",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AgeBand::ALL
            .into_iter()
            .find(|band| band.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown age band: '{s}'"))
    }
}

/// Field-level deserializers that read malformed values as absent.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record_deserializes() {
        let attrs: CharacterAttributes = serde_json::from_value(json!({})).unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_set_fields_in_form_order() {
        let mut attrs = CharacterAttributes::default();
        attrs.set_field("hairStyleModifiers", "Sleek, Glossy").unwrap();
        attrs.set_field("eyes.shape", "Almond").unwrap();
        attrs.set_field("gender", "Identify as male").unwrap();

        assert_eq!(
            attrs.set_fields(),
            vec![
                ("gender", "Identify as male".to_string()),
                ("eyes.shape", "Almond".to_string()),
                ("hair_style_modifiers", "Sleek, Glossy".to_string()),
            ]
        );
        assert!(CharacterAttributes::default().set_fields().is_empty());
    }

    #[test]
    fn test_form_defaults_read_as_absent() {
        // Blank form values and placeholder objects carry no selection.
        let attrs: CharacterAttributes = serde_json::from_value(json!({
            "gender": "",
            "eyes": { "shape": "", "modifiers": [] },
            "hair_style_modifiers": [],
        }))
        .unwrap();
        assert!(attrs.gender.is_none());
        assert_eq!(attrs.eyes, Some(FeatureSelection::default()));
        assert!(attrs.hair_style_modifiers.is_empty());
    }

    #[test]
    fn test_wrong_types_are_dropped() {
        let attrs: CharacterAttributes = serde_json::from_value(json!({
            "gender": 42,
            "eyes": "Almond",
            "nose": { "shape": "Roman", "modifiers": ["Narrow", 7, null] },
            "hair_style_modifiers": "Braided",
            "hair_color": null,
        }))
        .unwrap();
        assert!(attrs.gender.is_none());
        assert!(attrs.eyes.is_none());
        assert_eq!(
            attrs.nose,
            Some(FeatureSelection::new("Roman").with_modifiers(["Narrow"]))
        );
        assert!(attrs.hair_style_modifiers.is_empty());
        assert!(attrs.hair_color.is_none());
    }

    #[test]
    fn test_camel_case_aliases() {
        let attrs: CharacterAttributes = serde_json::from_value(json!({
            "visualHeritage": "Latino Heritage",
            "skinTone": "Sun-Kissed Tan",
            "hairColor": { "colorGroup": "Brown", "specificShade": "Chestnut" },
        }))
        .unwrap();
        assert_eq!(attrs.visual_heritage.as_deref(), Some("Latino Heritage"));
        assert_eq!(attrs.skin_tone.as_deref(), Some("Sun-Kissed Tan"));
        assert_eq!(attrs.hair_color, Some(HairColor::new("Brown", "Chestnut")));
    }

    #[test]
    fn test_serializes_snake_case_and_skips_absent() {
        let attrs = CharacterAttributes {
            skin_tone: Some("Fair".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&attrs).unwrap();
        assert_eq!(value, json!({ "skin_tone": "Fair" }));
    }

    #[test]
    fn test_set_and_unset_simple_field() {
        let mut attrs = CharacterAttributes::default();
        attrs.set_field("face_shape", "Heart").unwrap();
        assert_eq!(attrs.face_shape.as_deref(), Some("Heart"));

        attrs.unset_field("face_shape").unwrap();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_set_nested_fields_and_lists() {
        let mut attrs = CharacterAttributes::default();
        attrs.set_field("eyes.shape", "Almond").unwrap();
        attrs.set_field("eyes.modifiers", "Upturned, Wide-set").unwrap();
        attrs.set_field("hairColor.specificShade", "Chestnut").unwrap();

        let eyes = attrs.eyes.as_ref().unwrap();
        assert_eq!(eyes.shape.as_deref(), Some("Almond"));
        assert_eq!(eyes.modifiers, vec!["Upturned", "Wide-set"]);
        assert_eq!(
            attrs.hair_color.as_ref().unwrap().specific_shade.as_deref(),
            Some("Chestnut")
        );
    }

    #[test]
    fn test_unset_prunes_empty_nested_selection() {
        let mut attrs = CharacterAttributes::default();
        attrs.set_field("nose.shape", "Roman").unwrap();
        attrs.unset_field("nose.shape").unwrap();
        assert!(attrs.nose.is_none());
    }

    #[test]
    fn test_empty_value_clears_field() {
        let mut attrs = CharacterAttributes::default();
        attrs.set_field("lips", "Full").unwrap();
        attrs.set_field("lips", "  ").unwrap();
        assert!(attrs.lips.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut attrs = CharacterAttributes::default();
        let err = attrs.set_field("tail_length", "Long").unwrap_err();
        assert!(matches!(err, AttributeError::UnknownField(f) if f == "tail_length"));
        // A lookup miss must not leave a partially created record behind.
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_normalize_path_forms() {
        assert_eq!(normalize_path("hairStyle"), "hair_style");
        assert_eq!(normalize_path("HairStyle"), "hair_style");
        assert_eq!(normalize_path("hair-color.SpecificShade"), "hair_color.specific_shade");
        assert_eq!(normalize_path(" eye_color "), "eye_color");

        let mut attrs = CharacterAttributes::default();
        attrs.set_field("HairStyle", "Ponytail").unwrap();
        assert_eq!(attrs.hair_style.as_deref(), Some("Ponytail"));
    }

    #[test]
    fn test_every_field_path_is_settable() {
        let mut attrs = CharacterAttributes::default();
        for path in FIELD_PATHS {
            attrs.set_field(path, "Value").unwrap();
        }
        for path in FIELD_PATHS {
            attrs.unset_field(path).unwrap();
        }
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut attrs = CharacterAttributes::default();
        attrs.set_field("gender", "Identify as male").unwrap();
        attrs.reset();
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Identify as female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" male ".parse::<Gender>(), Ok(Gender::Male));
        assert!("Nonbinary".parse::<Gender>().is_err());
        assert_eq!(Gender::Male.noun(), "man");
    }

    #[test]
    fn test_age_band_roundtrip() {
        for band in AgeBand::ALL {
            let parsed: AgeBand = band.to_string().parse().unwrap();
            assert_eq!(parsed, band);
        }
        assert!("Ancient".parse::<AgeBand>().is_err());
    }
}
