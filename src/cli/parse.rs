//! CLI parse: clap types for csfix-setup. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Set up PHP-CS-Fixer configuration and composer scripts for a project
#[derive(Parser)]
#[command(name = "csfix-setup")]
#[command(about = "Set up PHP-CS-Fixer configuration and composer scripts for a project")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create .php_cs.dist and add cs-check / cs-fix to composer.json
    Install {
        /// Path to composer.json (default: $COMPOSER or ./composer.json)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Project root (default: directory containing composer.json)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Answer every question with its default
        #[arg(long, short = 'n')]
        no_interaction: bool,
    },
    /// Print the resolved rule table
    Rules {
        /// JSON file with rule overrides
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the .php_cs.dist that install would write
    Render {
        /// Path to composer.json (default: $COMPOSER or ./composer.json)
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}
