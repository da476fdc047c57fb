//! Human Builder System CLI entry point.
//!
//! Binary name: `hbs`
//!
//! Parses CLI arguments, sets up tracing, loads config and the options schema,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use hbs_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "hbs", &mut std::io::stdout());
        shutdown_tracing();
        return Ok(());
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let state = AppState::init(cli.schema.as_deref()).await?;

    match cli.command {
        Commands::Prompt {
            character,
            no_details,
            prefix,
            suffix,
        } => {
            cli::prompt::prompt(
                &state,
                character.as_deref(),
                no_details,
                prefix,
                suffix,
                cli.json,
            )
            .await?;
        }

        Commands::New { name, force } => {
            cli::character::new_character(&state, &name, force, cli.json).await?;
        }

        Commands::Set {
            character,
            assignments,
        } => {
            cli::character::set_attributes(&state, &character, &assignments, cli.json, cli.quiet)
                .await?;
        }

        Commands::Unset { character, fields } => {
            cli::character::unset_attributes(&state, &character, &fields, cli.json, cli.quiet)
                .await?;
        }

        Commands::Reset { character, force } => {
            cli::character::reset_character(&state, &character, force, cli.json).await?;
        }

        Commands::Show { character } => {
            cli::character::show_character(&state, &character, cli.json).await?;
        }

        Commands::List => {
            cli::character::list_characters(&state, cli.json).await?;
        }

        Commands::Options { field, gender } => {
            cli::options::show_options(&state, field.as_deref(), gender.as_deref(), cli.json)?;
        }

        Commands::Config => {
            cli::config::show_config(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
