//! Character file CLI commands: new, set, unset, reset, show, list.

use anyhow::{bail, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use dialoguer::Confirm;

use hbs_core::prompt::PromptBuilder;
use hbs_core::service::fs::FileSystem;
use hbs_core::validate::Validator;
use hbs_types::character::CharacterFile;

use crate::state::AppState;

/// Create a new character with every attribute unset.
///
/// Asks before replacing an existing file unless `force` is set.
pub async fn new_character(state: &AppState, name: &str, force: bool, json: bool) -> Result<()> {
    let path = state.characters.path_for(name);

    let mut overwrite = force;
    if !force && state.characters.fs().exists(&path).await {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Character file {} already exists. Replace it?",
                style(path.display()).yellow()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
        overwrite = true;
    }

    let (file, path) = state.characters.create(name, overwrite).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&file)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Character '{}' created",
        style("✓").green().bold(),
        style(&file.metadata.character_name).cyan()
    );
    println!("  {}  {}", style("File:").bold(), style(path.display()).dim());
    println!();
    println!(
        "  Set attributes with: {}",
        style(format!("hbs set {name} gender=\"Identify as female\"")).yellow()
    );
    println!();

    Ok(())
}

/// Apply `field=value` assignments to a saved character.
///
/// All assignments are parsed before the file is touched; an unknown field
/// leaves the file unchanged.
pub async fn set_attributes(
    state: &AppState,
    character: &str,
    assignments: &[String],
    json: bool,
    quiet: bool,
) -> Result<()> {
    let pairs = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>>>()?;

    let path = state.characters.resolve(character);
    let file = state
        .characters
        .edit(&path, |attrs| {
            for (field, value) in &pairs {
                attrs.set_field(field, value)?;
            }
            Ok(())
        })
        .await?;

    if !state.validator.validate(&file.t2i_parameters) {
        tracing::warn!(
            "'{}' holds values outside the options schema",
            file.metadata.character_name
        );
    }

    report_edit(&file, pairs.iter().map(|(f, _)| *f), "set", json, quiet)
}

/// Clear fields on a saved character.
pub async fn unset_attributes(
    state: &AppState,
    character: &str,
    fields: &[String],
    json: bool,
    quiet: bool,
) -> Result<()> {
    let path = state.characters.resolve(character);
    let file = state
        .characters
        .edit(&path, |attrs| {
            for field in fields {
                attrs.unset_field(field)?;
            }
            Ok(())
        })
        .await?;

    report_edit(&file, fields.iter().map(String::as_str), "cleared", json, quiet)
}

/// Reset every attribute of a saved character.
pub async fn reset_character(
    state: &AppState,
    character: &str,
    force: bool,
    json: bool,
) -> Result<()> {
    let path = state.characters.resolve(character);

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Clear every attribute in {}?",
                style(path.display()).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let file = state.characters.reset(&path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&file)?);
    } else {
        println!(
            "  {} Character '{}' reset",
            style("✓").green().bold(),
            style(&file.metadata.character_name).cyan()
        );
    }

    Ok(())
}

/// Show a character's set attributes and its prompt.
pub async fn show_character(state: &AppState, character: &str, json: bool) -> Result<()> {
    let path = state.characters.resolve(character);
    let file = state.characters.load(&path).await?;
    let prompt = PromptBuilder::build(&file.t2i_parameters, &state.config.prompt);

    if json {
        let out = serde_json::json!({
            "path": path.display().to_string(),
            "character": file,
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}  {}",
        style(&file.metadata.character_name).cyan().bold(),
        style(format!("v{}", file.metadata.version)).dim()
    );
    println!(
        "  {}  {}",
        style("Saved:").bold(),
        format_relative_time(&file.metadata.timestamp)
    );
    println!("  {}  {}", style("File:").bold(), style(path.display()).dim());
    println!();

    let fields = file.t2i_parameters.set_fields();
    if fields.is_empty() {
        println!("  {} No attributes set", style("i").blue().bold());
    } else {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Field").fg(Color::White),
            Cell::new("Value").fg(Color::White),
        ]);
        for (field, value) in fields {
            table.add_row(vec![Cell::new(field).fg(Color::Cyan), Cell::new(value)]);
        }
        println!("{table}");
    }

    println!();
    println!("  {}", style("Prompt").bold());
    println!("  {prompt}");
    println!();

    Ok(())
}

/// List saved characters in a table.
pub async fn list_characters(state: &AppState, json: bool) -> Result<()> {
    let characters = state.characters.list().await?;

    if json {
        let out: Vec<_> = characters
            .iter()
            .map(|(path, file)| {
                serde_json::json!({
                    "name": file.metadata.character_name,
                    "path": path.display().to_string(),
                    "timestamp": file.metadata.timestamp,
                    "version": file.metadata.version,
                    "fields_set": file.t2i_parameters.set_fields().len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if characters.is_empty() {
        println!();
        println!(
            "  {} No characters in {}. Create one with: {}",
            style("i").blue().bold(),
            style(state.characters.characters_dir().display()).dim(),
            style("hbs new <name>").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("File").fg(Color::White),
        Cell::new("Fields").fg(Color::White),
        Cell::new("Saved").fg(Color::White),
    ]);

    for (path, file) in &characters {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&file.metadata.character_name).fg(Color::Cyan),
            Cell::new(file_name),
            Cell::new(file.t2i_parameters.set_fields().len()),
            Cell::new(format_relative_time(&file.metadata.timestamp)).fg(Color::DarkGrey),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn report_edit<'a>(
    file: &CharacterFile,
    fields: impl Iterator<Item = &'a str>,
    verb: &str,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(file)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }

    let fields: Vec<&str> = fields.collect();
    println!(
        "  {} {} {} on '{}'",
        style("✓").green().bold(),
        verb,
        fields.join(", "),
        style(&file.metadata.character_name).cyan()
    );
    Ok(())
}

/// Split `field=value` at the first `=`.
fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => bail!("expected FIELD=VALUE, got '{assignment}'"),
    }
}

fn format_relative_time(dt: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let diff = now - *dt;

    if diff.num_minutes() < 1 {
        "just now".to_string()
    } else if diff.num_hours() < 1 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_days() < 1 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 30 {
        format!("{}d ago", diff.num_days())
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("lips=Full").unwrap(), ("lips", "Full"));
        assert_eq!(
            parse_assignment("eyes.modifiers=Upturned, Wide").unwrap(),
            ("eyes.modifiers", "Upturned, Wide")
        );
        assert_eq!(parse_assignment("bangs_fringe=").unwrap(), ("bangs_fringe", ""));
        assert_eq!(parse_assignment("note=a=b").unwrap(), ("note", "a=b"));
        assert!(parse_assignment("lips").is_err());
        assert!(parse_assignment("=Full").is_err());
    }

    #[test]
    fn test_format_relative_time() {
        assert_eq!(format_relative_time(&Utc::now()), "just now");
        assert_eq!(
            format_relative_time(&(Utc::now() - Duration::minutes(5))),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(&(Utc::now() - Duration::days(3))),
            "3d ago"
        );
        let old = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_relative_time(&old), "2020-01-02");
    }
}
