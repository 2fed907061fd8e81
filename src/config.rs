//! Configuration System
//!
//! Settings for the installer itself (logging, rule table customisation),
//! layered with the `config` crate:
//!
//! 1. built-in defaults
//! 2. global file: `$XDG_CONFIG_HOME/csfix-setup/config.toml`
//! 3. project file: `<project>/csfix-setup.toml`
//! 4. environment: `CSFIX_SETUP__<SECTION>__<KEY>`
//!
//! An explicit `--config` file replaces layers 2 and 3.
//!
//! The `config` crate lowercases keys, which would corrupt rule names such as
//! `@PSR2`, so the `[rules]` section is read from the same files with `toml`
//! (or `serde_json` for `.json` files) instead. Rules are not taken from the
//! environment.

use crate::error::SetupError;
use crate::logging::LoggingConfig;
use crate::rules::{RuleSet, RuleTable};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod sources;

pub use sources::global_file::global_config_path;
pub use sources::project_file::PROJECT_CONFIG_FILE_NAME;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(skip)]
    pub rules: RulesConfig,
}

/// Rule table customisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Replaces the built-in defaults wholesale when set
    #[serde(default)]
    pub defaults: Option<RuleSet>,

    /// Layered on top of the defaults
    #[serde(default)]
    pub overrides: RuleSet,
}

impl RulesConfig {
    /// Rule table with configured defaults applied.
    pub fn table(&self) -> RuleTable {
        match &self.defaults {
            Some(defaults) => RuleTable::default().replace_defaults(defaults.clone()),
            None => RuleTable::default(),
        }
    }

    /// Apply a later file's section: its defaults win, its overrides extend.
    pub fn layer(&mut self, later: RulesConfig) {
        if later.defaults.is_some() {
            self.defaults = later.defaults;
        }
        self.overrides.extend(later.overrides);
    }
}

/// Only the `[rules]` section of a settings file.
#[derive(Debug, Default, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: RulesConfig,
}

/// Read the `[rules]` section of a settings file with rule names kept verbatim.
fn read_rules(path: &Path) -> Result<RulesConfig, SetupError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SetupError::ConfigError(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let parsed: RulesFile = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content).map_err(|e| {
            SetupError::ConfigError(format!("Failed to parse rules in {}: {}", path.display(), e))
        })?
    } else {
        toml::from_str(&content).map_err(|e| {
            SetupError::ConfigError(format!("Failed to parse rules in {}: {}", path.display(), e))
        })?
    };
    Ok(parsed.rules)
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for a project directory.
    pub fn load(project_root: &Path) -> Result<AppConfig, SetupError> {
        let builder = sources::global_file::add_to_builder(Config::builder())?;
        let builder = sources::project_file::add_to_builder(builder, project_root)?;
        let mut config = Self::finish(builder)?;

        let files = [
            global_config_path(),
            Some(project_root.join(PROJECT_CONFIG_FILE_NAME)),
        ];
        for path in files.iter().flatten().filter(|path| path.exists()) {
            config.rules.layer(read_rules(path)?);
        }
        Ok(config)
    }

    /// Load configuration from one explicit file plus the environment.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, SetupError> {
        if !path.exists() {
            return Err(SetupError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = Config::builder().add_source(File::from(path.to_path_buf()));
        let mut config = Self::finish(builder)?;
        config.rules = read_rules(path)?;
        Ok(config)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, SetupError> {
        let config = builder
            .add_source(Environment::with_prefix("CSFIX_SETUP").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
