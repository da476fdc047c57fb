//! Sentinel option labels.
//!
//! A sentinel is an option that means "nothing distinctive here" and
//! suppresses its clause. Matching ignores ASCII case and surrounding
//! whitespace.

pub const CUSTOM_HERITAGE: &str = "Custom Heritage";
pub const AVERAGE_HEIGHT: &str = "Average";
pub const NORMAL_TEXTURED: &str = "Normal Textured";
pub const STRAIGHT_NOSE: &str = "Straight";
pub const MEDIUM_LIPS: &str = "Medium";
pub const NONE: &str = "None";
pub const CLEAN_SHAVEN: &str = "Clean Shaven";
pub const NOT_APPLICABLE: &str = "Not Applicable";
pub const NO_PART: &str = "No Part";
pub const BALD: &str = "Bald";
pub const BUZZ_CUT: &str = "Buzz Cut";
pub const SHOULDER_LENGTH: &str = "Shoulder Length";
pub const MEDIUM_VOLUME: &str = "Medium Volume";
pub const MEDIUM_DENSITY: &str = "Medium Density";
pub const LOOSE_NATURAL: &str = "Loose Natural";

/// True if `value` equals any of `sentinels`.
pub fn is_sentinel(value: &str, sentinels: &[&str]) -> bool {
    let value = value.trim();
    sentinels.iter().any(|s| s.eq_ignore_ascii_case(value))
}
