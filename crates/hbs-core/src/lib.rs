//! Prompt construction and character services for the Human Builder System.
//!
//! This crate defines the prompt builder and the "ports" (traits) that the
//! infrastructure layer implements. It depends only on `hbs-types` -- never
//! on `hbs-infra` or any IO crate.

pub mod prompt;
pub mod service;
pub mod validate;
