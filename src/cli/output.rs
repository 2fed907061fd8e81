//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SetupError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &SetupError) -> String {
    match e {
        SetupError::ManifestNotFound(_) => format!(
            "{}\nRun from the project root or pass --manifest <path>.",
            e
        ),
        _ => e.to_string(),
    }
}
