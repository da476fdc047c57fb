//! `hbs options`: browse the selectable option labels per field.

use anyhow::{anyhow, Result};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use hbs_types::attributes::{normalize_path, Gender};
use hbs_types::schema::OptionsSchema;

use crate::state::AppState;

/// Print the options for one field, or a summary of every field.
pub fn show_options(
    state: &AppState,
    field: Option<&str>,
    gender: Option<&str>,
    json: bool,
) -> Result<()> {
    let gender = gender
        .map(|g| g.parse::<Gender>().map_err(|e| anyhow!(e)))
        .transpose()?;

    match field {
        Some(field) => show_field(&state.schema, &normalize_path(field), gender, json),
        None => show_summary(&state.schema, gender, json),
    }
}

fn show_field(schema: &OptionsSchema, field: &str, gender: Option<Gender>, json: bool) -> Result<()> {
    let options = schema.options_for(field, gender).ok_or_else(|| {
        anyhow!("no options for field '{field}' (run `hbs options` to list fields)")
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    println!();
    let heading = match gender {
        Some(gender) if schema.is_gender_qualified(field) => format!("{field} ({gender})"),
        _ => field.to_string(),
    };
    println!("  {}", style(heading).cyan().bold());
    if schema.is_gender_qualified(field) && gender.is_none() {
        println!(
            "  {}",
            style("Depends on gender; pass --gender to narrow the list").dim()
        );
    }
    for option in options {
        println!("    {} {option}", style("•").dim());
    }
    println!();
    Ok(())
}

fn show_summary(schema: &OptionsSchema, gender: Option<Gender>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(schema)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Field").fg(Color::White),
        Cell::new("Options").fg(Color::White),
        Cell::new("Sample").fg(Color::White),
    ]);

    for field in schema.field_names() {
        let options = schema.options_for(field, gender).unwrap_or_default();
        let name_cell = if schema.is_gender_qualified(field) {
            Cell::new(format!("{field} *")).fg(Color::Cyan)
        } else {
            Cell::new(field).fg(Color::Cyan)
        };
        table.add_row(vec![
            name_cell,
            Cell::new(options.len()),
            Cell::new(sample(&options)).fg(Color::DarkGrey),
        ]);
    }

    println!("{table}");
    println!("  {}", style("* depends on gender").dim());
    Ok(())
}

/// The first few options, comma-joined.
fn sample(options: &[&str]) -> String {
    const SHOWN: usize = 3;
    let mut text = options[..options.len().min(SHOWN)].join(", ");
    if options.len() > SHOWN {
        text.push_str(", ...");
    }
    text
}
