//! Project config file source: <project>/csfix-setup.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Project-level settings file name.
pub const PROJECT_CONFIG_FILE_NAME: &str = "csfix-setup.toml";

/// Add the project config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = project_root.join(PROJECT_CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(builder);
    }
    debug!(config_path = %path.display(), "Using project config file");
    Ok(builder.add_source(File::from(path).required(false)))
}
