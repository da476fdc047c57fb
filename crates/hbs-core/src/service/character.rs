//! Character file service.
//!
//! Creates, loads, edits and saves character files under a characters
//! directory, and renders their prompts. Generic over the filesystem so the
//! same logic runs against the real disk and an in-memory store in tests.

use std::path::{Path, PathBuf};

use hbs_types::attributes::CharacterAttributes;
use hbs_types::character::{file_name_for, CharacterFile, FILE_EXTENSION};
use hbs_types::error::{AttributeError, CharacterFileError};
use hbs_types::prompt::PromptOptions;
use serde_json::Value;

use crate::prompt::PromptBuilder;
use crate::service::fs::FileSystem;

/// Service for managing character files.
pub struct CharacterService<F: FileSystem> {
    fs: F,
    characters_dir: PathBuf,
}

impl<F: FileSystem> CharacterService<F> {
    /// Create a new CharacterService rooted at `characters_dir`.
    pub fn new(fs: F, characters_dir: PathBuf) -> Self {
        Self { fs, characters_dir }
    }

    /// Access the filesystem adapter.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn characters_dir(&self) -> &Path {
        &self.characters_dir
    }

    /// Default path for a character name: `{characters_dir}/{slug}.hbs.json`.
    pub fn path_for(&self, character_name: &str) -> PathBuf {
        self.characters_dir.join(file_name_for(character_name))
    }

    /// Resolve a CLI argument that is either a file path or a character name.
    ///
    /// Anything containing a path separator or ending in `.json` is taken as
    /// a path; everything else is a name inside the characters directory.
    pub fn resolve(&self, name_or_path: &str) -> PathBuf {
        let looks_like_path = name_or_path.contains(std::path::MAIN_SEPARATOR)
            || name_or_path.contains('/')
            || name_or_path.ends_with(".json");
        if looks_like_path {
            PathBuf::from(name_or_path)
        } else {
            self.path_for(name_or_path)
        }
    }

    /// Create a new character with every attribute absent and save it.
    pub async fn create(
        &self,
        character_name: &str,
        overwrite: bool,
    ) -> Result<(CharacterFile, PathBuf), CharacterFileError> {
        let mut file = CharacterFile::new(character_name, CharacterAttributes::default());
        let path = self.characters_dir.join(file.file_name());
        self.save(&mut file, &path, overwrite).await?;
        Ok((file, path))
    }

    /// Save a character file as pretty-printed JSON, refreshing its metadata.
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    pub async fn save(
        &self,
        file: &mut CharacterFile,
        path: &Path,
        overwrite: bool,
    ) -> Result<(), CharacterFileError> {
        if !overwrite && self.fs.exists(path).await {
            return Err(CharacterFileError::AlreadyExists(path.display().to_string()));
        }

        file.touch();
        let content = serde_json::to_string_pretty(file)
            .map_err(|e| CharacterFileError::Parse(e.to_string()))?;

        self.fs
            .write_file(path, &content)
            .await
            .map_err(|e| CharacterFileError::Io(e.to_string()))?;

        tracing::debug!(path = %path.display(), "saved character file");
        Ok(())
    }

    /// Load a character file.
    ///
    /// A bare attribute record (no `metadata`) is accepted too; it is wrapped
    /// with the file name as the character name. The loaded record replaces
    /// whatever the caller held before.
    pub async fn load(&self, path: &Path) -> Result<CharacterFile, CharacterFileError> {
        if !self.fs.exists(path).await {
            return Err(CharacterFileError::NotFound(path.display().to_string()));
        }

        let content = self
            .fs
            .read_file(path)
            .await
            .map_err(|e| CharacterFileError::Io(e.to_string()))?;

        let file = parse_character_file(&content, &name_from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            name = %file.metadata.character_name,
            "loaded character file"
        );
        Ok(file)
    }

    /// Load, apply `edit` to the attribute record, and save back in place.
    pub async fn edit<E>(&self, path: &Path, edit: E) -> Result<CharacterFile, CharacterFileError>
    where
        E: FnOnce(&mut CharacterAttributes) -> Result<(), AttributeError>,
    {
        let mut file = self.load(path).await?;
        edit(&mut file.t2i_parameters)?;
        self.save(&mut file, path, true).await?;
        Ok(file)
    }

    /// Reset every attribute of a saved character to absent.
    pub async fn reset(&self, path: &Path) -> Result<CharacterFile, CharacterFileError> {
        self.edit(path, |attrs| {
            attrs.reset();
            Ok(())
        })
        .await
    }

    /// Load every character file in the characters directory.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub async fn list(&self) -> Result<Vec<(PathBuf, CharacterFile)>, CharacterFileError> {
        let paths = self
            .fs
            .list_files(&self.characters_dir)
            .await
            .map_err(|e| CharacterFileError::Io(e.to_string()))?;

        let suffix = format!(".{FILE_EXTENSION}");
        let mut characters = Vec::new();
        for path in paths {
            let is_character = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(&suffix));
            if !is_character {
                continue;
            }
            match self.load(&path).await {
                Ok(file) => characters.push((path, file)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping unreadable character file: {e}");
                }
            }
        }
        Ok(characters)
    }

    /// Load a character file and build its prompt.
    pub async fn render(
        &self,
        path: &Path,
        options: &PromptOptions,
    ) -> Result<String, CharacterFileError> {
        let file = self.load(path).await?;
        Ok(PromptBuilder::build(&file.t2i_parameters, options))
    }
}

/// Parse character file content, accepting a bare attribute record as well.
pub fn parse_character_file(
    content: &str,
    fallback_name: &str,
) -> Result<CharacterFile, CharacterFileError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| CharacterFileError::Parse(e.to_string()))?;

    if !value.is_object() {
        return Err(CharacterFileError::Parse(format!(
            "expected a JSON object, got {value}"
        )));
    }

    let has_metadata = value.get("metadata").is_some();
    if has_metadata {
        return serde_json::from_value(value)
            .map_err(|e| CharacterFileError::Parse(e.to_string()));
    }

    let attrs: CharacterAttributes =
        serde_json::from_value(value).map_err(|e| CharacterFileError::Parse(e.to_string()))?;
    Ok(CharacterFile::new(fallback_name, attrs))
}

/// Character name derived from a file name (`ana.hbs.json` -> `ana`).
fn name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("character");
    file_name
        .strip_suffix(&format!(".{FILE_EXTENSION}"))
        .or_else(|| file_name.strip_suffix(".json"))
        .unwrap_or(file_name)
        .to_string()
}
