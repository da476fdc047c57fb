//! Character prompt builder.
//!
//! Turns a [`CharacterAttributes`] record into a comma-separated
//! natural-language description suitable for a text-to-image model.
//!
//! Clause order:
//! ```text
//! {style_prefix}, {age} {heritage} {noun}, with {build} build, {height} height,
//! with {tone} skin, with {texture} texture, {face clauses}, {eye clause},
//! {eyebrow clause}, {nose clause}, {mouth}, {lips}, {facial hair},
//! {hair descriptor} hair, in {style} style, with {parting}, with {bangs},
//! with {tails}, {hair modifiers}, {style_suffix}
//! ```
//!
//! Absent and sentinel-valued fields drop their clause silently. Inserted
//! option text is lowercased, except the heritage label and the style
//! prefix/suffix which keep their case.

use hbs_types::attributes::{AgeBand, CharacterAttributes, FeatureSelection, Gender};
use hbs_types::error::PromptError;
use hbs_types::prompt::PromptOptions;
use serde_json::{Map, Value};

use super::sentinel::{
    is_sentinel, AVERAGE_HEIGHT, BALD, BUZZ_CUT, CLEAN_SHAVEN, CUSTOM_HERITAGE, LOOSE_NATURAL,
    MEDIUM_DENSITY, MEDIUM_LIPS, MEDIUM_VOLUME, NONE, NORMAL_TEXTURED, NOT_APPLICABLE, NO_PART,
    SHOULDER_LENGTH, STRAIGHT_NOSE,
};

/// Key under which a character file nests the attribute record.
const PARAMETERS_KEY: &str = "t2i_parameters";

/// Builds text-to-image prompts from character attribute records.
///
/// Pure: the same record and options always yield the same string.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the prompt for `attrs`.
    pub fn build(attrs: &CharacterAttributes, options: &PromptOptions) -> String {
        tracing::trace!(?attrs, ?options, "building prompt");

        let mut clauses: Vec<String> = Vec::with_capacity(16);

        push_verbatim(&mut clauses, &options.style_prefix);
        clauses.push(Self::identity_clause(attrs));

        if attrs.age_band() != Some(AgeBand::Child) {
            Self::push_body_clauses(attrs, &mut clauses);
        }
        Self::push_skin_clauses(attrs, &mut clauses);

        if options.include_details {
            Self::push_face_clauses(attrs, &mut clauses);
            Self::push_feature_clauses(attrs, &mut clauses);
        }

        Self::push_hair_clauses(attrs, &mut clauses);
        push_verbatim(&mut clauses, &options.style_suffix);

        clauses.join(", ")
    }

    /// Build a prompt from untyped JSON.
    ///
    /// `record` may be a bare attribute record or a whole character file
    /// (the record is then read from `t2i_parameters`). Both arguments must
    /// be JSON objects; anything else fails with
    /// [`PromptError::InvalidInput`]. Inside the objects, malformed fields
    /// are skipped rather than rejected.
    pub fn build_from_json(record: &Value, options: &Value) -> Result<String, PromptError> {
        let record = record.as_object().ok_or_else(|| {
            PromptError::InvalidInput(format!(
                "character record must be a JSON object, got {}",
                json_type(record)
            ))
        })?;
        let options = options.as_object().ok_or_else(|| {
            PromptError::InvalidInput(format!(
                "prompt options must be a JSON object, got {}",
                json_type(options)
            ))
        })?;

        let params = match record.get(PARAMETERS_KEY) {
            Some(Value::Object(inner)) => inner.clone(),
            Some(_) => Map::new(),
            None if record.contains_key("metadata") => Map::new(),
            None => record.clone(),
        };

        let attrs: CharacterAttributes = serde_json::from_value(Value::Object(params))
            .map_err(|e| PromptError::InvalidInput(e.to_string()))?;
        let options = options_from_map(options, PromptOptions::default());

        Ok(Self::build(&attrs, &options))
    }

    /// `{age descriptor} {heritage} {noun}`; the child band replaces the
    /// whole identity with "young child".
    fn identity_clause(attrs: &CharacterAttributes) -> String {
        let noun = attrs.gender_kind().as_ref().map_or("person", Gender::noun);
        let mut identity = noun.to_string();

        if let Some(heritage) =
            present(&attrs.visual_heritage).filter(|h| !is_sentinel(h, &[CUSTOM_HERITAGE]))
        {
            let heritage = collapse(strip_suffix_ignore_case(heritage, "Heritage"));
            if !heritage.is_empty() {
                identity = format!("{heritage} {identity}");
            }
        }

        match attrs.age_band() {
            Some(AgeBand::Child) => format!("{} child", AgeBand::Child.descriptor()),
            Some(band) => format!("{} {identity}", band.descriptor()),
            None => identity,
        }
    }

    fn push_body_clauses(attrs: &CharacterAttributes, clauses: &mut Vec<String>) {
        if let Some(build) = present(&attrs.build) {
            let build = [Gender::Female, Gender::Male]
                .iter()
                .find_map(|g| strip_suffix(build, g.build_suffix()))
                .unwrap_or(build);
            clauses.push(format!("with {} build", lower(build)));
        }

        if let Some(height) = present(&attrs.height).filter(|h| !is_sentinel(h, &[AVERAGE_HEIGHT]))
        {
            clauses.push(format!("{} height", lower(height)));
        }
    }

    fn push_skin_clauses(attrs: &CharacterAttributes, clauses: &mut Vec<String>) {
        let Some(tone) = present(&attrs.skin_tone) else {
            return;
        };
        clauses.push(format!("with {} skin", lower(tone)));

        if let Some(texture) =
            present(&attrs.skin_texture).filter(|t| !is_sentinel(t, &[NORMAL_TEXTURED]))
        {
            clauses.push(format!("with {} texture", lower(texture)));
        }
    }

    fn push_face_clauses(attrs: &CharacterAttributes, clauses: &mut Vec<String>) {
        let structure = [
            (&attrs.head_shape, "head"),
            (&attrs.face_shape, "face"),
            (&attrs.forehead, "forehead"),
            (&attrs.jawline, "jawline"),
            (&attrs.cheekbones, "cheekbones"),
        ];
        for (value, noun) in structure {
            if let Some(value) = present(value) {
                clauses.push(format!("{} {noun}", lower(value)));
            }
        }
    }

    fn push_feature_clauses(attrs: &CharacterAttributes, clauses: &mut Vec<String>) {
        // Eyes: "{modifiers} {shape} {color} eyes"
        if let Some((mut words, shape)) = feature_words(&attrs.eyes) {
            words.push(lower(shape));
            if let Some(color) = present(&attrs.eye_color) {
                words.push(lower(color));
            }
            words.push("eyes".to_string());
            clauses.push(words.join(" "));
        }

        // Eyebrows only when something distinguishes them.
        if let Some((mut words, shape)) = feature_words(&attrs.eyebrows) {
            if !words.is_empty() {
                words.push(lower(shape));
                words.push("eyebrows".to_string());
                clauses.push(words.join(" "));
            }
        }

        if let Some((mut words, shape)) = feature_words(&attrs.nose) {
            if !is_sentinel(shape, &[STRAIGHT_NOSE]) || !words.is_empty() {
                words.push(lower(shape));
                words.push("nose".to_string());
                clauses.push(words.join(" "));
            }
        }

        if let Some(mouth) = present(&attrs.mouth) {
            clauses.push(format!("{} mouth", lower(mouth)));
        }

        if let Some(lips) = present(&attrs.lips).filter(|l| !is_sentinel(l, &[MEDIUM_LIPS])) {
            clauses.push(format!("{} lips", lower(lips)));
        }

        if let Some(facial_hair) =
            present(&attrs.facial_hair).filter(|f| !is_sentinel(f, &[NONE, CLEAN_SHAVEN]))
        {
            clauses.push(lower(facial_hair));
        }
    }

    /// Hair: either the single clause "bald", or a descriptor ending in
    /// "hair" followed by style, parting, bangs, tails and modifier clauses.
    fn push_hair_clauses(attrs: &CharacterAttributes, clauses: &mut Vec<String>) {
        let style = present(&attrs.hair_style);
        if style.is_some_and(|s| is_sentinel(s, &[BALD])) {
            clauses.push("bald".to_string());
            return;
        }

        let mut words: Vec<String> = Vec::new();

        if let Some(length) = present(&attrs.hair_length)
            .filter(|l| !is_sentinel(l, &[BUZZ_CUT, SHOULDER_LENGTH]))
        {
            words.push(lower(length));
        }

        if let Some(volume) =
            present(&attrs.hair_volume).filter(|v| !is_sentinel(v, &[MEDIUM_VOLUME]))
        {
            let level = strip_suffix_ignore_case(volume, "Volume");
            if !level.is_empty() {
                words.push(lower(level));
            }
        }

        if let Some(density) =
            present(&attrs.hair_density).filter(|d| !is_sentinel(d, &[MEDIUM_DENSITY]))
        {
            words.push(lower(density));
        }

        if let Some(texture) = present(&attrs.hair_texture) {
            words.push(lower(texture));
        }

        if let Some(color) = &attrs.hair_color {
            let group_applies = present(&color.color_group)
                .is_some_and(|g| !is_sentinel(g, &[NOT_APPLICABLE]));
            if let Some(shade) = present(&color.specific_shade).filter(|_| group_applies) {
                words.push(lower(shade));
            }
        }

        let mut details: Vec<String> = Vec::new();

        if let Some(style) = style.filter(|s| !is_sentinel(s, &[LOOSE_NATURAL])) {
            details.push(format!("in {} style", lower(style)));
        }

        if let Some(parting) = present(&attrs.hair_parting)
            .filter(|p| !is_sentinel(p, &[NOT_APPLICABLE, NO_PART]))
        {
            details.push(format!("with {}", lower(parting)));
        }

        if let Some(bangs) = present(&attrs.bangs_fringe)
            .filter(|b| !is_sentinel(b, &[NONE, NOT_APPLICABLE]))
        {
            details.push(format!("with {}", lower(bangs)));
        }

        if let Some(tails) = present(&attrs.tails_and_buns).filter(|t| !is_sentinel(t, &[NONE])) {
            details.push(format!("with {}", lower(tails)));
        }

        let modifiers = modifier_words(&attrs.hair_style_modifiers);
        if !modifiers.is_empty() {
            details.push(modifiers.join(" "));
        }

        if style.is_none() && words.is_empty() && details.is_empty() {
            return;
        }

        words.push("hair".to_string());
        clauses.push(words.join(" "));
        clauses.extend(details);
    }
}

/// Read prompt options from a JSON object, falling back to `base` for
/// missing or mistyped keys. Both snake_case and camelCase keys are read.
pub fn options_from_map(map: &Map<String, Value>, base: PromptOptions) -> PromptOptions {
    let get = |snake: &str, camel: &str| map.get(snake).or_else(|| map.get(camel));

    PromptOptions {
        include_details: get("include_details", "includeDetails")
            .and_then(Value::as_bool)
            .unwrap_or(base.include_details),
        style_prefix: get("style_prefix", "stylePrefix")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(base.style_prefix),
        style_suffix: get("style_suffix", "styleSuffix")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(base.style_suffix),
    }
}

fn push_verbatim(clauses: &mut Vec<String>, text: &str) {
    let text = collapse(text);
    if !text.is_empty() {
        clauses.push(text);
    }
}

/// A set, non-blank string field.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Modifier words and the shape of a feature; `None` without a shape.
fn feature_words(feature: &Option<FeatureSelection>) -> Option<(Vec<String>, &str)> {
    let feature = feature.as_ref()?;
    let shape = present(&feature.shape)?;
    Some((modifier_words(&feature.modifiers), shape))
}

fn modifier_words(modifiers: &[String]) -> Vec<String> {
    modifiers
        .iter()
        .map(|m| lower(m))
        .filter(|m| !m.is_empty())
        .collect()
}

/// Collapse whitespace runs (newlines included) into single spaces.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn lower(text: &str) -> String {
    collapse(text).to_lowercase()
}

fn strip_suffix<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    value.strip_suffix(suffix).map(str::trim_end)
}

fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> &'a str {
    value
        .len()
        .checked_sub(suffix.len())
        .filter(|&start| {
            value
                .get(start..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
        })
        .map_or(value, |start| &value[..start])
        .trim_end()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbs_types::attributes::HairColor;
    use serde_json::json;

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn scenario() -> CharacterAttributes {
        CharacterAttributes {
            gender: text("Identify as female"),
            visual_heritage: text("Latino Heritage"),
            age: text("Youthful Adult Appearance"),
            build: text("Athletic-Female"),
            height: text("Average"),
            skin_tone: text("Sun-Kissed Tan"),
            face_shape: text("Heart"),
            eyes: Some(FeatureSelection::new("Almond").with_modifiers(["Upturned"])),
            eye_color: text("Brown"),
            ..Default::default()
        }
    }

    fn full_hair() -> CharacterAttributes {
        CharacterAttributes {
            hair_style: text("Braided Crown"),
            hair_length: text("Waist Length"),
            hair_volume: text("High Volume"),
            hair_density: text("Thick"),
            hair_texture: text("Wavy"),
            hair_color: Some(HairColor::new("Red", "Copper")),
            hair_parting: text("Side Part"),
            bangs_fringe: text("Curtain Bangs"),
            tails_and_buns: text("Low Bun"),
            hair_style_modifiers: vec!["Messy".to_string(), "Flower-Adorned".to_string()],
            ..Default::default()
        }
    }

    fn build(attrs: &CharacterAttributes) -> String {
        PromptBuilder::build(attrs, &PromptOptions::default())
    }

    #[test]
    fn test_empty_record_is_person() {
        assert_eq!(build(&CharacterAttributes::default()), "person");
    }

    #[test]
    fn test_reference_scenario() {
        assert_eq!(
            build(&scenario()),
            "young adult Latino woman, with athletic build, with sun-kissed tan skin, \
             heart face, upturned almond brown eyes"
        );
    }

    #[test]
    fn test_deterministic() {
        let mut attrs = scenario();
        attrs.hair_style = text("Ponytail");
        let first = build(&attrs);
        for _ in 0..5 {
            assert_eq!(build(&attrs), first);
        }
    }

    #[test]
    fn test_identity_variants() {
        let male = CharacterAttributes {
            gender: text("Identify as male"),
            ..Default::default()
        };
        assert_eq!(build(&male), "man");

        let unknown = CharacterAttributes {
            gender: text("Undisclosed"),
            visual_heritage: text("Nordic Heritage"),
            ..Default::default()
        };
        assert_eq!(build(&unknown), "Nordic person");

        let custom = CharacterAttributes {
            gender: text("Identify as female"),
            visual_heritage: text("Custom Heritage"),
            age: text("Elderly Senior Traits"),
            ..Default::default()
        };
        assert_eq!(build(&custom), "elderly woman");
    }

    #[test]
    fn test_age_descriptors() {
        let cases = [
            ("Teenage Years", "teenage man"),
            ("Youthful Adult Appearance", "young adult man"),
            ("Mature Adult Features", "adult man"),
            ("Middle-aged Characteristics", "middle-aged man"),
            ("Elderly Senior Traits", "elderly man"),
            ("Ageless", "man"),
        ];
        for (age, expected) in cases {
            let attrs = CharacterAttributes {
                gender: text("Identify as male"),
                age: text(age),
                ..Default::default()
            };
            assert_eq!(build(&attrs), expected, "age band {age}");
        }
    }

    #[test]
    fn test_child_overrides_identity_and_skips_body() {
        let attrs = CharacterAttributes {
            gender: text("Identify as female"),
            visual_heritage: text("Latino Heritage"),
            age: text("Pre-adolescent Child"),
            build: text("Slender-Female"),
            height: text("Tall"),
            skin_tone: text("Fair"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "young child, with fair skin");
    }

    #[test]
    fn test_height_without_build() {
        let attrs = CharacterAttributes {
            height: text("Very Tall"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, very tall height");
    }

    #[test]
    fn test_build_suffix_stripped() {
        let attrs = CharacterAttributes {
            build: text("Stocky-Male"),
            height: text("Short"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, with stocky build, short height");
    }

    #[test]
    fn test_skin_texture() {
        let mut attrs = CharacterAttributes {
            skin_tone: text("Olive"),
            skin_texture: text("Freckled"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, with olive skin, with freckled texture");

        attrs.skin_texture = text("Normal Textured");
        assert_eq!(build(&attrs), "person, with olive skin");

        // Texture rides on the tone clause.
        attrs.skin_tone = None;
        attrs.skin_texture = text("Freckled");
        assert_eq!(build(&attrs), "person");
    }

    #[test]
    fn test_face_structure_clauses() {
        let attrs = CharacterAttributes {
            head_shape: text("Round"),
            face_shape: text("Oval"),
            forehead: text("High"),
            jawline: text("Sharp"),
            cheekbones: text("Prominent"),
            ..Default::default()
        };
        assert_eq!(
            build(&attrs),
            "person, round head, oval face, high forehead, sharp jawline, prominent cheekbones"
        );
    }

    #[test]
    fn test_eyes_without_color_or_modifiers() {
        let attrs = CharacterAttributes {
            eyes: Some(FeatureSelection::new("Hooded")),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, hooded eyes");

        let color_only = CharacterAttributes {
            eye_color: text("Green"),
            ..Default::default()
        };
        assert_eq!(build(&color_only), "person");
    }

    #[test]
    fn test_eyebrows_need_modifiers() {
        let mut attrs = CharacterAttributes {
            eyebrows: Some(FeatureSelection::new("Arched")),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person");

        attrs.eyebrows = Some(FeatureSelection::new("Arched").with_modifiers(["Thick", "Dark"]));
        assert_eq!(build(&attrs), "person, thick dark arched eyebrows");
    }

    #[test]
    fn test_nose_straight_sentinel() {
        let mut attrs = CharacterAttributes {
            nose: Some(FeatureSelection::new("Straight")),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person");

        attrs.nose = Some(FeatureSelection::new("Straight").with_modifiers(["Narrow"]));
        assert_eq!(build(&attrs), "person, narrow straight nose");

        attrs.nose = Some(FeatureSelection::new("Aquiline"));
        assert_eq!(build(&attrs), "person, aquiline nose");
    }

    #[test]
    fn test_mouth_lips_and_facial_hair() {
        let mut attrs = CharacterAttributes {
            mouth: text("Wide"),
            lips: text("Full"),
            facial_hair: text("Full Beard"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, wide mouth, full lips, full beard");

        attrs.lips = text("Medium");
        attrs.facial_hair = text("Clean Shaven");
        assert_eq!(build(&attrs), "person, wide mouth");

        attrs.facial_hair = text("None");
        assert_eq!(build(&attrs), "person, wide mouth");
    }

    #[test]
    fn test_details_toggle() {
        let attrs = CharacterAttributes {
            head_shape: text("Oval"),
            jawline: text("Sharp"),
            eyebrows: Some(FeatureSelection::new("Arched").with_modifiers(["Thick"])),
            nose: Some(FeatureSelection::new("Roman").with_modifiers(["Narrow"])),
            mouth: text("Wide"),
            lips: text("Full"),
            facial_hair: text("Stubble"),
            ..scenario()
        };
        let detailed = PromptBuilder::build(&attrs, &PromptOptions::default());
        for clause in ["eyebrows", "nose", "mouth", "lips", "stubble", "jawline"] {
            assert!(detailed.contains(clause), "missing {clause} in {detailed}");
        }

        let options = PromptOptions::default().with_details(false);
        assert_eq!(
            PromptBuilder::build(&attrs, &options),
            "young adult Latino woman, with athletic build, with sun-kissed tan skin"
        );
    }

    #[test]
    fn test_prefix_and_suffix() {
        let options = PromptOptions::default()
            .with_prefix("Portrait Photo")
            .with_suffix("85mm, Soft Light");
        let attrs = CharacterAttributes {
            gender: text("Identify as male"),
            ..Default::default()
        };
        assert_eq!(
            PromptBuilder::build(&attrs, &options),
            "Portrait Photo, man, 85mm, Soft Light"
        );
    }

    #[test]
    fn test_blank_prefix_is_skipped() {
        let options = PromptOptions::default().with_prefix("   ");
        assert_eq!(
            PromptBuilder::build(&CharacterAttributes::default(), &options),
            "person"
        );
    }

    #[test]
    fn test_full_hair() {
        assert_eq!(
            build(&full_hair()),
            "person, waist length high thick wavy copper hair, in braided crown style, \
             with side part, with curtain bangs, with low bun, messy flower-adorned"
        );
    }

    #[test]
    fn test_volume_keeps_only_the_level_word() {
        let attrs = CharacterAttributes {
            hair_style: text("Ponytail"),
            hair_volume: text("High Volume"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, high hair, in ponytail style");

        let attrs = CharacterAttributes {
            hair_volume: text("low volume"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, low hair");
    }

    #[test]
    fn test_bald_suppresses_all_hair() {
        let mut attrs = full_hair();
        attrs.hair_style = text("Bald");
        assert_eq!(build(&attrs), "person, bald");
    }

    #[test]
    fn test_hair_sentinels_remove_only_their_words() {
        let mut attrs = full_hair();
        attrs.hair_style = text("Loose Natural");
        attrs.hair_length = text("Shoulder Length");
        attrs.hair_volume = text("Medium Volume");
        attrs.hair_density = text("Medium Density");
        attrs.hair_color = Some(HairColor::new("Not Applicable", "Copper"));
        attrs.hair_parting = text("No Part");
        attrs.bangs_fringe = text("Not Applicable");
        attrs.tails_and_buns = text("None");
        attrs.hair_style_modifiers.clear();
        assert_eq!(build(&attrs), "person, wavy hair");
    }

    #[test]
    fn test_buzz_cut_drops_length_only() {
        let attrs = CharacterAttributes {
            hair_style: text("Crew"),
            hair_length: text("Buzz Cut"),
            hair_texture: text("Coarse"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, coarse hair, in crew style");
    }

    #[test]
    fn test_default_style_alone_yields_plain_hair() {
        let attrs = CharacterAttributes {
            hair_style: text("Loose Natural"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, hair");
    }

    #[test]
    fn test_hair_color_needs_group() {
        let attrs = CharacterAttributes {
            hair_color: Some(HairColor {
                color_group: None,
                specific_shade: text("Platinum"),
            }),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person");
    }

    #[test]
    fn test_sentinels_match_case_insensitively() {
        let attrs = CharacterAttributes {
            height: text("average"),
            lips: text("MEDIUM"),
            hair_style: text("bald"),
            ..Default::default()
        };
        assert_eq!(build(&attrs), "person, bald");
    }

    #[test]
    fn test_no_newlines_in_output() {
        let attrs = CharacterAttributes {
            skin_tone: text("Warm\nBeige"),
            ..Default::default()
        };
        let options = PromptOptions::default().with_suffix("line one\nline two");
        let prompt = PromptBuilder::build(&attrs, &options);
        assert_eq!(prompt, "person, with warm beige skin, line one line two");
    }

    #[test]
    fn test_build_from_json_bare_record() {
        let record = json!({
            "gender": "Identify as female",
            "visualHeritage": "Latino Heritage",
            "age": "Youthful Adult Appearance",
            "build": "Athletic-Female",
            "height": "Average",
            "skinTone": "Sun-Kissed Tan",
            "faceShape": "Heart",
            "eyes": { "shape": "Almond", "modifiers": ["Upturned"] },
            "eyeColor": "Brown"
        });
        let prompt = PromptBuilder::build_from_json(&record, &json!({})).unwrap();
        assert_eq!(prompt, build(&scenario()));
    }

    #[test]
    fn test_build_from_json_character_file() {
        let file = json!({
            "metadata": { "character_name": "Ana" },
            "t2i_parameters": { "gender": "Identify as male", "hair_style": "Bald" }
        });
        let prompt =
            PromptBuilder::build_from_json(&file, &json!({ "stylePrefix": "photo" })).unwrap();
        assert_eq!(prompt, "photo, man, bald");
    }

    #[test]
    fn test_build_from_json_file_without_parameters() {
        let file = json!({ "metadata": { "character_name": "Ana" } });
        assert_eq!(
            PromptBuilder::build_from_json(&file, &json!({})).unwrap(),
            "person"
        );
    }

    #[test]
    fn test_build_from_json_rejects_non_objects() {
        let err = PromptBuilder::build_from_json(&json!("woman"), &json!({})).unwrap_err();
        assert!(matches!(err, PromptError::InvalidInput(_)));
        assert!(err.to_string().contains("a string"));

        let err = PromptBuilder::build_from_json(&json!({}), &json!([true])).unwrap_err();
        assert!(err.to_string().contains("prompt options"));
    }

    #[test]
    fn test_build_from_json_skips_malformed_fields() {
        let record = json!({
            "gender": ["Identify as male"],
            "eyes": { "shape": 3 },
            "lips": "Thin"
        });
        let options = json!({ "includeDetails": "yes" });
        assert_eq!(
            PromptBuilder::build_from_json(&record, &options).unwrap(),
            "person, thin lips"
        );
    }

    #[test]
    fn test_options_from_map_falls_back_to_base() {
        let map = json!({ "style_suffix": "cinematic", "include_details": 1 });
        let base = PromptOptions::default()
            .with_details(false)
            .with_prefix("photo");
        let options = options_from_map(map.as_object().unwrap(), base);
        assert!(!options.include_details);
        assert_eq!(options.style_prefix, "photo");
        assert_eq!(options.style_suffix, "cinematic");
    }

    #[test]
    fn test_strip_suffix_ignore_case() {
        assert_eq!(strip_suffix_ignore_case("Latino Heritage", "Heritage"), "Latino");
        assert_eq!(strip_suffix_ignore_case("high volume", "Volume"), "high");
        assert_eq!(strip_suffix_ignore_case("Volume", "Volume"), "");
        assert_eq!(strip_suffix_ignore_case("Éire", "Heritage"), "Éire");
    }
}
