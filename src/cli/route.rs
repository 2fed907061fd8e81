//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::config::AppConfig;
use crate::console::TerminalConsole;
use crate::error::SetupError;
use crate::manifest::ManifestFile;
use crate::rules::RuleSet;
use crate::setup::ProjectSetup;
use crate::template::render_cs_config;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: working directory and loaded settings.
pub struct RunContext {
    working_dir: PathBuf,
    config: AppConfig,
}

impl RunContext {
    pub fn new(working_dir: PathBuf, config: AppConfig) -> Self {
        Self {
            working_dir,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Execute a CLI command, returning text for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, SetupError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Install {
                manifest,
                project_root,
                no_interaction,
            } => self.handle_install(manifest.as_deref(), project_root.clone(), *no_interaction),
            Commands::Rules { overrides, format } => {
                self.handle_rules(overrides.as_deref(), format)
            }
            Commands::Render { manifest } => self.handle_render(manifest.as_deref()),
        }
    }

    fn manifest_file(&self, manifest: Option<&Path>) -> ManifestFile {
        match manifest {
            Some(path) => ManifestFile::new(self.working_dir.join(path)),
            None => ManifestFile::discover(&self.working_dir),
        }
    }

    fn handle_install(
        &self,
        manifest: Option<&Path>,
        project_root: Option<PathBuf>,
        no_interaction: bool,
    ) -> Result<String, SetupError> {
        let console = TerminalConsole::new(!no_interaction);
        let mut setup = ProjectSetup::new(console, self.manifest_file(manifest), project_root)?;
        let summary = setup.install()?;
        Ok(super::format_install_summary(&summary))
    }

    fn handle_rules(&self, overrides: Option<&Path>, format: &str) -> Result<String, SetupError> {
        let table = self.config.rules.table();
        let mut layered = self.config.rules.overrides.clone();
        if let Some(path) = overrides {
            layered.extend(load_overrides(&self.working_dir.join(path))?);
        }

        let resolved = table.resolve(&layered);
        match format {
            "json" => super::format_rules_json(&resolved),
            "text" => Ok(super::format_rules_text(&resolved)),
            other => Err(SetupError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_render(&self, manifest: Option<&Path>) -> Result<String, SetupError> {
        let document = self.manifest_file(manifest).read()?;
        Ok(render_cs_config(&document.autoload_paths()))
    }
}

/// Read a JSON object of rule overrides.
fn load_overrides(path: &Path) -> Result<RuleSet, SetupError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SetupError::ConfigError(format!(
            "Failed to read overrides {}: {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SetupError::ConfigError(format!(
            "Invalid overrides {}: {}",
            path.display(),
            e
        ))
    })
}
