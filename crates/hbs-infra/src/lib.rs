//! Infrastructure layer for the Human Builder System.
//!
//! Contains implementations of the ports defined in `hbs-core`: the local
//! filesystem adapter, data-directory resolution, the `config.toml` loader
//! and the options-schema loader.

pub mod config;
pub mod filesystem;
pub mod schema;
