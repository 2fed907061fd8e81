//! Shared test utilities for integration tests
//!
//! Builds throwaway Composer projects and snapshots their contents so tests
//! can assert that a run left files untouched.

use csfix_setup::console::ScriptedConsole;
use csfix_setup::manifest::ManifestFile;
use csfix_setup::setup::ProjectSetup;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project containing only `composer.json`.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new(manifest: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("composer.json"), manifest).unwrap();
        Self { dir }
    }

    pub fn manifest_file(&self) -> ManifestFile {
        ManifestFile::new(self.dir.path().join("composer.json"))
    }

    pub fn manifest_json(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.dir.path().join("composer.json")).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    pub fn cs_config_path(&self) -> PathBuf {
        self.dir.path().join(".php_cs.dist")
    }

    /// Setup over this project answering prompts from `answers`.
    pub fn setup(&self, answers: &[bool]) -> ProjectSetup<ScriptedConsole> {
        ProjectSetup::new(
            ScriptedConsole::new(answers.iter().copied()),
            self.manifest_file(),
            None,
        )
        .unwrap()
    }

    /// File name to raw bytes for every file in the project root.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        std::fs::read_dir(self.dir.path())
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                (
                    entry.file_name().to_string_lossy().into_owned(),
                    std::fs::read(entry.path()).unwrap(),
                )
            })
            .collect()
    }
}
