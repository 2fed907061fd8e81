//! csfix-setup CLI Binary
//!
//! Interactive installer for the PHP-CS-Fixer configuration and composer scripts.

use clap::Parser;
use csfix_setup::cli::{Cli, Commands, RunContext};
use csfix_setup::config::{AppConfig, ConfigLoader};
use csfix_setup::logging::{init_logging, LoggingConfig};
use csfix_setup::manifest::ManifestFile;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to resolve working directory: {}", e);
            process::exit(1);
        }
    };

    let config = match load_config(&cli, &working_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", csfix_setup::cli::map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("csfix-setup starting");

    let context = RunContext::new(working_dir, config);
    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", csfix_setup::cli::map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(
    cli: &Cli,
    working_dir: &Path,
) -> Result<AppConfig, csfix_setup::error::SetupError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&settings_dir(&cli.command, working_dir)),
    }
}

/// Directory holding the project settings file: the project the command works on.
fn settings_dir(command: &Commands, working_dir: &Path) -> PathBuf {
    let (manifest, project_root) = match command {
        Commands::Install {
            manifest,
            project_root,
            ..
        } => (manifest.as_deref(), project_root.as_deref()),
        Commands::Render { manifest } => (manifest.as_deref(), None),
        Commands::Rules { .. } => return working_dir.to_path_buf(),
    };

    if let Some(root) = project_root {
        return working_dir.join(root);
    }
    let manifest = match manifest {
        Some(path) => ManifestFile::new(working_dir.join(path)),
        None => ManifestFile::discover(working_dir),
    };
    manifest
        .path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| working_dir.to_path_buf())
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &AppConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
        if cli.log_output.is_none() {
            logging.output = "file".to_string();
        }
    }

    logging
}
