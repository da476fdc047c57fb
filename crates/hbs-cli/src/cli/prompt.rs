//! `hbs prompt`: render a character's text-to-image prompt.

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use hbs_core::prompt::PromptBuilder;
use hbs_types::prompt::PromptOptions;

use crate::state::AppState;

/// Build and print the prompt for a character file or a JSON record on stdin.
///
/// # Examples
///
/// ```bash
/// hbs prompt ana
/// echo '{"gender": "Identify as male"}' | hbs prompt --prefix "studio portrait"
/// ```
pub async fn prompt(
    state: &AppState,
    character: Option<&str>,
    no_details: bool,
    prefix: Option<String>,
    suffix: Option<String>,
    json: bool,
) -> Result<()> {
    let options = effective_options(&state.config.prompt, no_details, prefix, suffix);

    let text = match character {
        None | Some("-") => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("failed to read record from stdin")?;
            let record: serde_json::Value =
                serde_json::from_str(&input).context("stdin is not valid JSON")?;
            PromptBuilder::build_from_json(&record, &serde_json::to_value(&options)?)?
        }
        Some(character) => {
            let path = state.characters.resolve(character);
            state.characters.render(&path, &options).await?
        }
    };

    if json {
        let out = serde_json::json!({ "prompt": text });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{text}");
    }

    Ok(())
}

/// Config defaults with command-line flags applied on top.
fn effective_options(
    base: &PromptOptions,
    no_details: bool,
    prefix: Option<String>,
    suffix: Option<String>,
) -> PromptOptions {
    let mut options = base.clone();
    if no_details {
        options.include_details = false;
    }
    if let Some(prefix) = prefix {
        options.style_prefix = prefix;
    }
    if let Some(suffix) = suffix {
        options.style_suffix = suffix;
    }
    options
}
