//! Composer manifest access
//!
//! Locates `composer.json`, parses it into a [`ManifestDocument`] and writes it
//! back using Composer's formatting conventions (four-space indentation,
//! unescaped slashes and unicode, trailing newline). Key order and unknown
//! keys survive a read/write cycle.

use crate::error::SetupError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default manifest file name.
pub const MANIFEST_FILE_NAME: &str = "composer.json";

/// Environment variable that points Composer at a different manifest.
pub const MANIFEST_ENV: &str = "COMPOSER";

/// Autoload mapping styles scanned for source directories, in scan order.
pub const AUTOLOAD_STYLES: &[&str] = &["psr-4", "psr-0"];

/// Handle on the manifest file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Standard discovery: `$COMPOSER` when set and non-blank, else `composer.json`,
    /// relative to `working_dir`.
    pub fn discover(working_dir: &Path) -> Self {
        let name = std::env::var(MANIFEST_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| MANIFEST_FILE_NAME.to_string());
        let path = working_dir.join(name);
        debug!(manifest = %path.display(), "Discovered composer manifest");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn read(&self) -> Result<ManifestDocument, SetupError> {
        if !self.exists() {
            return Err(SetupError::ManifestNotFound(self.path.clone()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| SetupError::ManifestParse {
                path: self.path.clone(),
                source,
            })?;

        match value {
            Value::Object(root) => Ok(ManifestDocument { root }),
            _ => Err(SetupError::InvalidManifest {
                path: self.path.clone(),
                reason: "top-level value must be a JSON object".to_string(),
            }),
        }
    }

    pub fn write(&self, document: &ManifestDocument) -> Result<(), SetupError> {
        let content = document.to_json_string()?;
        std::fs::write(&self.path, content)?;
        debug!(manifest = %self.path.display(), "Wrote composer manifest");
        Ok(())
    }
}

/// Parsed `composer.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    root: Map<String, Value>,
}

impl ManifestDocument {
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Source directories listed under `autoload.psr-4` and `autoload.psr-0`.
    ///
    /// Each namespace maps to a path or a list of paths; they are flattened in
    /// document order. The skip guard compares the autoload style name with
    /// the collected paths, so repeated paths are kept.
    pub fn autoload_paths(&self) -> Vec<String> {
        let Some(autoload) = self.root.get("autoload").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut paths: Vec<String> = Vec::new();
        for style in AUTOLOAD_STYLES {
            let Some(mapping) = autoload.get(*style).and_then(Value::as_object) else {
                continue;
            };

            for value in mapping.values() {
                let candidates: Vec<&str> = match value {
                    Value::String(path) => vec![path.as_str()],
                    Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                    _ => Vec::new(),
                };
                for path in candidates {
                    if paths.iter().any(|existing| existing == style) {
                        continue;
                    }
                    paths.push(path.to_string());
                }
            }
        }

        paths
    }

    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.root.get("scripts").and_then(Value::as_object)
    }

    /// Whether `scripts` is absent, an object, or the `[]` PHP writes for an
    /// empty mapping.
    pub fn has_valid_scripts(&self) -> bool {
        match self.root.get("scripts") {
            None | Some(Value::Object(_)) => true,
            Some(Value::Array(items)) => items.is_empty(),
            Some(_) => false,
        }
    }

    /// Scripts mapping, created empty when missing or `[]`. `None` if `scripts`
    /// holds anything else that is not an object.
    pub fn ensure_scripts(&mut self) -> Option<&mut Map<String, Value>> {
        let scripts = self
            .root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if matches!(scripts, Value::Array(items) if items.is_empty()) {
            *scripts = Value::Object(Map::new());
        }
        scripts.as_object_mut()
    }

    /// The package described by this manifest, before alias resolution.
    pub fn package(&self) -> Package {
        let name = self
            .root
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("__root__")
            .to_string();
        let version = self
            .root
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("dev-master")
            .to_string();

        let alias = self
            .root
            .get("extra")
            .and_then(|extra| extra.get("branch-alias"))
            .and_then(|aliases| aliases.get(&version))
            .and_then(Value::as_str)
            .map(str::to_string);

        let concrete = Package::Concrete { name, version };
        match alias {
            Some(version) => Package::Alias {
                version,
                alias_of: Box::new(concrete),
            },
            None => concrete,
        }
    }

    /// Pretty JSON in Composer's layout, newline terminated.
    pub fn to_json_string(&self) -> Result<String, SetupError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.root
            .serialize(&mut serializer)
            .map_err(|e| SetupError::ConfigError(format!("Failed to serialize manifest: {}", e)))?;
        let mut content = String::from_utf8(buffer)
            .map_err(|e| SetupError::ConfigError(format!("Manifest is not UTF-8: {}", e)))?;
        content.push('\n');
        Ok(content)
    }
}

/// A package identity, possibly an alias of another package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Package {
    Concrete { name: String, version: String },
    Alias { version: String, alias_of: Box<Package> },
}

impl Package {
    /// Follow alias indirection until a concrete package is reached.
    pub fn resolve(&self) -> &Package {
        let mut package = self;
        while let Package::Alias { alias_of, .. } = package {
            package = alias_of;
        }
        package
    }

    /// Name of the concrete package behind any aliases.
    pub fn name(&self) -> &str {
        let mut package = self;
        loop {
            match package {
                Package::Concrete { name, .. } => return name,
                Package::Alias { alias_of, .. } => package = alias_of,
            }
        }
    }

    pub fn version(&self) -> &str {
        match self {
            Package::Concrete { version, .. } | Package::Alias { version, .. } => version,
        }
    }
}
