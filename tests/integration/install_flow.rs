//! Integration tests for the composed install flow

use csfix_setup::console::Tone;
use csfix_setup::setup::{ConfigOutcome, ScriptsOutcome};

use crate::integration::test_utils::TestProject;

const MANIFEST: &str = r#"{
    "name": "acme/app",
    "autoload": {"psr-4": {"App\\": "src/"}}
}"#;

#[test]
fn test_install_runs_both_steps_in_order() {
    let project = TestProject::new(MANIFEST);
    let mut setup = project.setup(&[true, true]);

    let summary = setup.install().unwrap();
    assert!(matches!(summary.config, ConfigOutcome::Created { .. }));
    assert!(matches!(summary.scripts, ScriptsOutcome::Written { .. }));

    let console = setup.into_console();
    assert_eq!(
        console.lines.first(),
        Some(&(Tone::Info, "Setting up Facile.it Coding Standards".to_string()))
    );
    assert_eq!(
        console.questions,
        vec![
            "Do you want to create the CS configuration in your project root?",
            "Do you want to add scripts to composer.json?",
        ]
    );
    assert!(project.cs_config_path().exists());
}

#[test]
fn test_declining_config_still_offers_scripts() {
    let project = TestProject::new(MANIFEST);
    let mut setup = project.setup(&[false, true]);

    let summary = setup.install().unwrap();
    assert_eq!(summary.config, ConfigOutcome::Declined);
    assert!(matches!(summary.scripts, ScriptsOutcome::Written { .. }));
    assert!(!project.cs_config_path().exists());
    assert!(project.manifest_json()["scripts"]["cs-fix"].is_string());
}

#[test]
fn test_declining_everything_changes_nothing() {
    let project = TestProject::new(MANIFEST);
    let before = project.snapshot();

    let mut setup = project.setup(&[false, false]);
    let summary = setup.install().unwrap();

    assert_eq!(summary.config, ConfigOutcome::Declined);
    assert_eq!(summary.scripts, ScriptsOutcome::Declined);
    assert_eq!(project.snapshot(), before);
}

#[test]
fn test_second_install_is_a_no_op() {
    let project = TestProject::new(MANIFEST);
    project.setup(&[true, true]).install().unwrap();
    let after_first = project.snapshot();

    let mut setup = project.setup(&[]);
    let summary = setup.install().unwrap();

    assert!(matches!(summary.config, ConfigOutcome::AlreadyExists(_)));
    assert_eq!(summary.scripts, ScriptsOutcome::AlreadyPresent);
    assert!(setup.console().questions.is_empty());
    assert_eq!(project.snapshot(), after_first);
}

#[test]
fn test_unparseable_manifest_aborts() {
    let project = TestProject::new("{ not json");
    let err = csfix_setup::setup::ProjectSetup::new(
        csfix_setup::console::ScriptedConsole::default(),
        project.manifest_file(),
        None,
    )
    .err()
    .unwrap();
    assert!(err.is_configuration());
}

#[test]
fn test_empty_scripts_list_gets_both_scripts() {
    let project = TestProject::new(r#"{"name": "acme/app", "scripts": []}"#);
    let mut setup = project.setup(&[true, true]);

    let summary = setup.install().unwrap();
    assert!(matches!(summary.config, ConfigOutcome::Created { .. }));
    assert_eq!(
        summary.scripts,
        ScriptsOutcome::Written {
            added: vec!["cs-check".to_string(), "cs-fix".to_string()],
            conflicts: vec![],
        }
    );

    let manifest = project.manifest_json();
    assert_eq!(
        manifest["scripts"],
        serde_json::json!({
            "cs-check": "php-cs-fixer fix --dry-run --diff",
            "cs-fix": "php-cs-fixer fix --diff"
        })
    );
}

#[test]
fn test_invalid_scripts_abort_before_writing_anything() {
    let project = TestProject::new(r#"{"name": "acme/app", "scripts": "phpunit"}"#);
    let before = project.snapshot();

    let err = csfix_setup::setup::ProjectSetup::new(
        csfix_setup::console::ScriptedConsole::new([true, true]),
        project.manifest_file(),
        None,
    )
    .err()
    .unwrap();

    assert!(err.is_configuration());
    assert_eq!(project.snapshot(), before);
}
