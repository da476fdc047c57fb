//! Shared domain types for the Human Builder System.
//!
//! This crate contains the character attribute record, prompt options, the
//! persisted character file, the options schema, global configuration and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod attributes;
pub mod character;
pub mod config;
pub mod error;
pub mod prompt;
pub mod schema;
