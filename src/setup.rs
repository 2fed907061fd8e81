//! Project setup flow
//!
//! Offers to create `.php_cs.dist` in the project root and to register the
//! `cs-check` / `cs-fix` scripts in `composer.json`. Each step asks first and
//! is skipped without asking when its target is already in place.

use crate::console::{Console, Tone};
use crate::error::SetupError;
use crate::manifest::{ManifestDocument, ManifestFile, Package};
use crate::template::{render_cs_config, CS_CONFIG_FILE_NAME};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Scripts offered for the manifest, as `(name, command)`.
pub const COMPOSER_SCRIPTS: &[(&str, &str)] = &[
    ("cs-check", "php-cs-fixer fix --dry-run --diff"),
    ("cs-fix", "php-cs-fixer fix --diff"),
];

const SCRIPTS_NOT_OBJECT: &str = "\"scripts\" must be an object";

/// What `request_create_config` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOutcome {
    AlreadyExists(PathBuf),
    Declined,
    Created { path: PathBuf, finder_paths: Vec<String> },
}

/// What `request_add_scripts` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptsOutcome {
    AlreadyPresent,
    Declined,
    Written {
        added: Vec<String>,
        conflicts: Vec<String>,
    },
}

/// Result of a full install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub config: ConfigOutcome,
    pub scripts: ScriptsOutcome,
}

pub struct ProjectSetup<C: Console> {
    console: C,
    project_root: PathBuf,
    manifest: ManifestFile,
    document: ManifestDocument,
    root_package: Package,
}

impl<C: Console> ProjectSetup<C> {
    /// Read the manifest and derive the project root.
    ///
    /// `project_root` wins when given; otherwise the manifest's directory is used.
    pub fn new(
        console: C,
        manifest: ManifestFile,
        project_root: Option<PathBuf>,
    ) -> Result<Self, SetupError> {
        let document = manifest.read()?;
        if !document.has_valid_scripts() {
            return Err(SetupError::InvalidManifest {
                path: manifest.path().to_path_buf(),
                reason: SCRIPTS_NOT_OBJECT.to_string(),
            });
        }

        let project_root = match project_root {
            Some(root) => normalize_root(&root),
            None => {
                let parent = manifest
                    .path()
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                dunce::canonicalize(parent)?
            }
        };

        let root_package = document.package().resolve().clone();
        debug!(
            manifest = %manifest.path().display(),
            project_root = %project_root.display(),
            package = root_package.name(),
            "Loaded composer manifest"
        );

        Ok(Self {
            console,
            project_root,
            manifest,
            document,
            root_package,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn root_package(&self) -> &Package {
        &self.root_package
    }

    pub fn document(&self) -> &ManifestDocument {
        &self.document
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Banner, then the config step, then the scripts step.
    pub fn install(&mut self) -> Result<InstallSummary, SetupError> {
        self.console
            .write_line(Tone::Info, "Setting up Facile.it Coding Standards");
        let config = self.request_create_config()?;
        let scripts = self.request_add_scripts()?;
        Ok(InstallSummary { config, scripts })
    }

    pub fn request_create_config(&mut self) -> Result<ConfigOutcome, SetupError> {
        let dest_path = self.project_root.join(CS_CONFIG_FILE_NAME);

        if dest_path.exists() {
            self.console.write_line(Tone::Plain, "");
            self.console.write_line(
                Tone::Comment,
                "  Skipping... CS config file already exists",
            );
            self.console.write_line(
                Tone::Info,
                &format!(
                    "  Delete {} if you want to install it.",
                    CS_CONFIG_FILE_NAME
                ),
            );
            info!(path = %dest_path.display(), "CS config already exists, skipping");
            return Ok(ConfigOutcome::AlreadyExists(dest_path));
        }

        self.console.write_line(Tone::Plain, "");
        let details = [format!(
            "  It will create a {} file in your project root directory.",
            CS_CONFIG_FILE_NAME
        )];
        let answer = self.console.confirm(
            "Do you want to create the CS configuration in your project root?",
            &details,
            true,
        )?;
        if !answer {
            info!("CS config creation declined");
            return Ok(ConfigOutcome::Declined);
        }

        self.console.write_line(Tone::Plain, "");
        self.console
            .write_line(Tone::Info, "  Writing configuration in project root...");

        let finder_paths = self.document.autoload_paths();
        std::fs::write(&dest_path, render_cs_config(&finder_paths))?;
        info!(
            path = %dest_path.display(),
            finder_paths = ?finder_paths,
            "Wrote CS config"
        );

        Ok(ConfigOutcome::Created {
            path: dest_path,
            finder_paths,
        })
    }

    pub fn request_add_scripts(&mut self) -> Result<ScriptsOutcome, SetupError> {
        let scripts = self
            .document
            .ensure_scripts()
            .ok_or_else(|| SetupError::InvalidManifest {
                path: self.manifest.path().to_path_buf(),
                reason: SCRIPTS_NOT_OBJECT.to_string(),
            })?;

        if COMPOSER_SCRIPTS
            .iter()
            .all(|(name, _)| scripts.contains_key(*name))
        {
            self.console.write_line(Tone::Plain, "");
            self.console.write_line(
                Tone::Comment,
                "  Skipping... Scripts already exist in composer.json.",
            );
            info!("Composer scripts already present, skipping");
            return Ok(ScriptsOutcome::AlreadyPresent);
        }

        self.console.write_line(Tone::Plain, "");
        let mut details = vec!["  It will add two scripts:".to_string()];
        details.extend(COMPOSER_SCRIPTS.iter().map(|(name, _)| format!("  - {}", name)));
        let answer = self.console.confirm(
            "Do you want to add scripts to composer.json?",
            &details,
            true,
        )?;
        if !answer {
            info!("Adding composer scripts declined");
            return Ok(ScriptsOutcome::Declined);
        }

        let mut added = Vec::new();
        let mut conflicts = Vec::new();
        for (name, command) in COMPOSER_SCRIPTS {
            match scripts.get(*name) {
                Some(existing) if existing.as_str() != Some(*command) => {
                    conflicts.push(name.to_string());
                    warn!(script = *name, existing = %existing, "Composer script conflict");
                    self.console.write_line(
                        Tone::Error,
                        &format!("  Another script \"{}\" exists!", name),
                    );
                    self.console.write_line(
                        Tone::Plain,
                        "  If you want, you can replace it manually with:",
                    );
                    self.console.write_line(Tone::Plain, "");
                    self.console.write_line(
                        Tone::Comment,
                        &format!("  \"{}\": \"{}\"", name, command),
                    );
                }
                Some(_) => {}
                None => {
                    scripts.insert(name.to_string(), Value::from(*command));
                    added.push(name.to_string());
                }
            }
        }

        self.manifest.write(&self.document)?;
        info!(
            manifest = %self.manifest.path().display(),
            added = ?added,
            conflicts = ?conflicts,
            "Updated composer scripts"
        );

        Ok(ScriptsOutcome::Written { added, conflicts })
    }
}

/// Strip trailing separators; joining then yields exactly one.
fn normalize_root(root: &Path) -> PathBuf {
    let text = root.to_string_lossy();
    let trimmed = text.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        root.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    }
}
