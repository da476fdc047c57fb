//! Text-to-image prompt construction.

pub mod builder;
pub mod sentinel;

pub use builder::PromptBuilder;
