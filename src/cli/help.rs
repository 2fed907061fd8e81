//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used in log events (e.g. "install", "rules").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Install { .. } => "install",
        Commands::Rules { .. } => "rules",
        Commands::Render { .. } => "render",
    }
}
