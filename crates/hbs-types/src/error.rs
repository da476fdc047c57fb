use thiserror::Error;

/// Errors raised at the top-level prompt entry points.
///
/// Field-level problems never surface here: a missing or malformed field
/// simply drops its clause.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to editing an attribute record.
#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("unknown attribute field '{0}'")]
    UnknownField(String),
}

/// Errors related to character file persistence.
#[derive(Debug, Error)]
pub enum CharacterFileError {
    #[error("character file not found: {0}")]
    NotFound(String),

    #[error("character file already exists: {0}")]
    AlreadyExists(String),

    #[error("failed to parse character file: {0}")]
    Parse(String),

    #[error("filesystem error: {0}")]
    Io(String),

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// Errors related to loading the options schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse options schema: {0}")]
    Parse(String),

    #[error("filesystem error: {0}")]
    Io(String),
}
