//! Attribute record validation port.
//!
//! The prompt builder is not a validator: unknown option labels pass through
//! to the prompt. This port exists so a schema-aware validator can be slotted
//! in later; the only implementation today accepts every record.

use hbs_types::attributes::CharacterAttributes;
use hbs_types::schema::OptionsSchema;

/// Checks an attribute record against an options schema.
pub trait Validator: Send + Sync {
    /// Returns true when the record is acceptable.
    fn validate(&self, attrs: &CharacterAttributes) -> bool;
}

/// Validator that accepts every record.
pub struct AcceptAllValidator {
    schema: OptionsSchema,
}

impl AcceptAllValidator {
    pub fn new(schema: OptionsSchema) -> Self {
        Self { schema }
    }
}

impl Validator for AcceptAllValidator {
    fn validate(&self, attrs: &CharacterAttributes) -> bool {
        tracing::trace!(
            fields = self.schema.fields.len(),
            empty = attrs.is_empty(),
            "accepting record without schema checks"
        );
        true
    }
}
