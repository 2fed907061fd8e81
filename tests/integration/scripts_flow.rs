//! Integration tests for merging cs-check / cs-fix into composer.json

use csfix_setup::console::Tone;
use csfix_setup::setup::ScriptsOutcome;
use serde_json::json;

use crate::integration::test_utils::TestProject;

#[test]
fn test_adds_scripts_when_missing() {
    let project = TestProject::new(
        r#"{"name": "acme/app", "require": {"php": ">=7.1"}, "extra": {"foo": [1, 2]}}"#,
    );
    let mut setup = project.setup(&[true]);

    let outcome = setup.request_add_scripts().unwrap();
    assert_eq!(
        outcome,
        ScriptsOutcome::Written {
            added: vec!["cs-check".to_string(), "cs-fix".to_string()],
            conflicts: vec![],
        }
    );

    assert_eq!(
        project.manifest_json(),
        json!({
            "name": "acme/app",
            "require": {"php": ">=7.1"},
            "extra": {"foo": [1, 2]},
            "scripts": {
                "cs-check": "php-cs-fixer fix --dry-run --diff",
                "cs-fix": "php-cs-fixer fix --diff"
            }
        })
    );
}

#[test]
fn test_conflicting_script_is_left_alone() {
    let project = TestProject::new(
        r#"{"name": "acme/app", "scripts": {"cs-check": "other-command", "test": "phpunit"}}"#,
    );
    let mut setup = project.setup(&[true]);

    let outcome = setup.request_add_scripts().unwrap();
    assert_eq!(
        outcome,
        ScriptsOutcome::Written {
            added: vec!["cs-fix".to_string()],
            conflicts: vec!["cs-check".to_string()],
        }
    );

    let errors = setup.console().lines_with(Tone::Error);
    assert_eq!(errors, vec!["  Another script \"cs-check\" exists!"]);
    assert!(setup
        .console()
        .transcript()
        .contains("  \"cs-check\": \"php-cs-fixer fix --dry-run --diff\""));

    let manifest = project.manifest_json();
    assert_eq!(manifest["scripts"]["cs-check"], json!("other-command"));
    assert_eq!(manifest["scripts"]["cs-fix"], json!("php-cs-fixer fix --diff"));
    assert_eq!(manifest["scripts"]["test"], json!("phpunit"));
}

#[test]
fn test_all_scripts_present_skips_without_prompt() {
    let original = r#"{"scripts": {"cs-check": "custom check", "cs-fix": "custom fix"}}"#;
    let project = TestProject::new(original);
    let mut setup = project.setup(&[true]);

    assert_eq!(
        setup.request_add_scripts().unwrap(),
        ScriptsOutcome::AlreadyPresent
    );
    assert!(setup.console().questions.is_empty());
    assert_eq!(
        setup.console().lines_with(Tone::Comment),
        vec!["  Skipping... Scripts already exist in composer.json."]
    );
    assert_eq!(
        std::fs::read_to_string(project.dir.path().join("composer.json")).unwrap(),
        original
    );
}

#[test]
fn test_declined_scripts_leave_manifest_untouched() {
    let original = "{\"name\":\"acme/app\"}";
    let project = TestProject::new(original);
    let mut setup = project.setup(&[false]);

    assert_eq!(setup.request_add_scripts().unwrap(), ScriptsOutcome::Declined);
    assert_eq!(
        std::fs::read_to_string(project.dir.path().join("composer.json")).unwrap(),
        original
    );
}

#[test]
fn test_written_manifest_keeps_key_order() {
    let project = TestProject::new(
        r#"{"name": "acme/app", "autoload": {"psr-4": {"App\\": "src/"}}, "config": {"sort-packages": true}}"#,
    );
    let mut setup = project.setup(&[true]);
    setup.request_add_scripts().unwrap();

    let content = std::fs::read_to_string(project.dir.path().join("composer.json")).unwrap();
    let positions: Vec<usize> = ["\"name\"", "\"autoload\"", "\"config\"", "\"scripts\""]
        .iter()
        .map(|key| content.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(content.contains("\"src/\""), "slashes stay unescaped");
    assert!(content.ends_with("}\n"));
}
