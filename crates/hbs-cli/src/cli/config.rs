//! `hbs config`: show the effective configuration.

use anyhow::Result;
use console::style;

use hbs_infra::filesystem::LocalFileSystem;

use crate::state::AppState;

/// Display where data lives and which prompt defaults are in effect.
pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let config_path = LocalFileSystem::config_path(&state.data_dir);
    let characters_dir = state.characters.characters_dir();
    let prompt = &state.config.prompt;

    if json {
        let out = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "config_file": config_path.display().to_string(),
            "characters_dir": characters_dir.display().to_string(),
            "schema_path": state.schema_path.as_ref().map(|p| p.display().to_string()),
            "schema_version": state.schema.version,
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {} hbs v{}", style("⚙").bold(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("  {}", style("── Paths ──").dim());
    println!("  Data dir:    {}", state.data_dir.display());
    println!("  Config file: {}", config_path.display());
    println!("  Characters:  {}", characters_dir.display());
    match &state.schema_path {
        Some(path) => println!("  Schema:      {}", path.display()),
        None => println!("  Schema:      {}", style("bundled").dim()),
    }
    println!();

    println!("  {}", style("── Prompt defaults ──").dim());
    println!("  Include details: {}", prompt.include_details);
    println!("  Style prefix:    {}", or_none(&prompt.style_prefix));
    println!("  Style suffix:    {}", or_none(&prompt.style_suffix));
    println!();

    Ok(())
}

fn or_none(text: &str) -> String {
    if text.is_empty() {
        style("(none)").dim().to_string()
    } else {
        text.to_string()
    }
}
