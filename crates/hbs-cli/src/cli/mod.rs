//! CLI command definitions for the `hbs` binary.
//!
//! Uses clap derive macros for argument parsing. Character arguments accept
//! either a character name (looked up in the characters directory) or a path
//! to a JSON file.

pub mod character;
pub mod config;
pub mod options;
pub mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build text-to-image prompts from character appearance attributes.
#[derive(Parser)]
#[command(name = "hbs", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Options schema JSON file to use instead of the bundled one.
    #[arg(long, global = true, env = "HBS_SCHEMA")]
    pub schema: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the prompt for a character file, or for a JSON record on stdin.
    Prompt {
        /// Character name or path to a JSON file. Reads stdin when omitted or "-".
        character: Option<String>,

        /// Omit everything after the identity, build and skin clauses.
        #[arg(long)]
        no_details: bool,

        /// Text prepended to the prompt.
        #[arg(long)]
        prefix: Option<String>,

        /// Text appended to the prompt.
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Create a new character with every attribute unset.
    New {
        /// Character name.
        name: String,

        /// Overwrite an existing character without asking.
        #[arg(long, short)]
        force: bool,
    },

    /// Set one or more attributes (`field=value`, lists comma-separated).
    Set {
        /// Character name or path.
        character: String,

        /// Assignments such as `eye_color=Brown` or `eyes.modifiers=Upturned,Wide`.
        #[arg(required = true, value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// Clear one or more attributes.
    Unset {
        /// Character name or path.
        character: String,

        /// Field paths such as `hair_color.specific_shade`.
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Clear every attribute of a character.
    Reset {
        /// Character name or path.
        character: String,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Show a character's attributes and prompt.
    Show {
        /// Character name or path.
        character: String,
    },

    /// List saved characters.
    #[command(alias = "ls")]
    List,

    /// List the selectable options for a field, or every field.
    Options {
        /// Field path, e.g. `hair_style` or `eyes.shape`.
        field: Option<String>,

        /// Gender for gender-specific lists such as `build`.
        #[arg(long)]
        gender: Option<String>,
    },

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
