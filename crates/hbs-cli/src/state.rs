//! Application state wiring config, schema and services together.
//!
//! Services are generic over the filesystem trait; AppState pins them to the
//! local filesystem.

use std::path::{Path, PathBuf};

use hbs_core::service::character::CharacterService;
use hbs_core::validate::AcceptAllValidator;
use hbs_infra::config::{load_config, resolve_characters_dir, resolve_schema_path};
use hbs_infra::filesystem::{resolve_data_dir, LocalFileSystem};
use hbs_infra::schema::load_schema;
use hbs_types::config::HbsConfig;
use hbs_types::schema::OptionsSchema;

/// Concrete character service pinned to the local filesystem.
pub type ConcreteCharacterService = CharacterService<LocalFileSystem>;

/// Shared application state for CLI commands.
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: HbsConfig,
    /// Schema override in effect; `None` means the bundled schema.
    pub schema_path: Option<PathBuf>,
    pub schema: OptionsSchema,
    pub validator: AcceptAllValidator,
    pub characters: ConcreteCharacterService,
}

impl AppState {
    /// Resolve the data directory, load config and schema, wire services.
    ///
    /// `schema_override` is the `--schema` flag and wins over config.
    pub async fn init(schema_override: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tracing::debug!("Using data directory {}", data_dir.display());

        let config = load_config(&data_dir).await;

        let schema_path = resolve_schema_path(&config, &data_dir, schema_override);
        let schema = load_schema(schema_path.as_deref()).await?;
        let validator = AcceptAllValidator::new(schema.clone());

        let characters_dir = resolve_characters_dir(&config, &data_dir);
        tracing::debug!("Characters directory {}", characters_dir.display());
        let characters = CharacterService::new(LocalFileSystem::new(), characters_dir);

        Ok(Self {
            data_dir,
            config,
            schema_path,
            schema,
            validator,
            characters,
        })
    }
}
