//! Integration tests for the setup sequence.
//!
//! Each test runs against a temporary directory and ignores the process
//! environment so results do not depend on the machine.

use std::path::Path;

use finnexus::config;
use finnexus::setup::{EnvFileStatus, Setup, SetupError, SetupOutcome, bootstrap_env_file};

fn isolated_setup(dir: &Path) -> Setup {
    let mut setup = Setup::new(dir);
    setup.rustc_version = "1.88.0".to_string();
    setup.process_env = false;
    setup
}

fn run(setup: &Setup) -> (Result<SetupOutcome, SetupError>, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let result = setup.run(&mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn first_run_creates_env_from_template() {
    let dir = tempfile::tempdir().unwrap();
    config::write_template(&dir.path().join(".env.template")).unwrap();

    let (result, output) = run(&isolated_setup(dir.path()));

    let secrets = std::fs::read_to_string(dir.path().join(".env")).unwrap();
    assert_eq!(secrets, config::generate_template());
    assert!(output.contains("Created .env file from template"));
    assert!(output.contains("Configuration needs to be updated"));
    assert!(output.contains("Next steps:"));
    match result.unwrap() {
        SetupOutcome::Incomplete(validation) => assert_eq!(validation.missing().len(), 4),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn second_run_leaves_env_untouched() {
    let dir = tempfile::tempdir().unwrap();
    config::write_template(&dir.path().join(".env.template")).unwrap();
    let setup = isolated_setup(dir.path());

    run(&setup).0.unwrap();
    let before = std::fs::read_to_string(dir.path().join(".env")).unwrap();

    let (result, output) = run(&setup);
    result.unwrap();
    assert!(output.contains(".env file already exists"));
    assert_eq!(std::fs::read_to_string(dir.path().join(".env")).unwrap(), before);
}

#[test]
fn configured_env_completes_setup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "OPENAI_API_KEY=sk-live\n\
         FABRIC_SQL_ENDPOINT=lake.fabric.microsoft.com\n\
         FABRIC_DATABASE=finance\n\
         FABRIC_TOKEN=token\n",
    )
    .unwrap();

    let (result, output) = run(&isolated_setup(dir.path()));
    assert_eq!(result.unwrap(), SetupOutcome::Complete);
    assert!(output.contains("Configuration is properly set up"));
    assert!(output.contains("Setup complete!"));
    assert!(!output.contains("Next steps:"));
}

#[test]
fn invalid_port_in_env_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "APP_PORT=not-a-port\n").unwrap();

    let (result, output) = run(&isolated_setup(dir.path()));
    match result.unwrap() {
        SetupOutcome::ConfigError(message) => assert!(message.contains("APP_PORT")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(output.contains("Error checking configuration"));
}

#[test]
fn old_toolchain_stops_with_message_on_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let mut setup = isolated_setup(dir.path());
    setup.rustc_version = "1.60.0".to_string();

    let (result, output) = run(&setup);
    assert!(matches!(
        result.unwrap(),
        SetupOutcome::UnsupportedToolchain { ref found, .. } if found == "1.60.0"
    ));
    assert!(output.contains("Rust 1.85.0+ is required, but this binary was built with 1.60.0."));
    assert!(!output.contains("Rust toolchain"));
    assert!(!output.contains("Missing required crates"));
}

#[test]
fn unresolvable_crate_is_the_only_one_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut setup = isolated_setup(dir.path());
    setup.required_crates.push("left-pad-rs-missing".to_string());

    let (result, output) = run(&setup);
    assert_eq!(
        result.unwrap(),
        SetupOutcome::MissingDependencies(vec!["left-pad-rs-missing".to_string()])
    );
    assert!(output.contains("Missing required crates: left-pad-rs-missing\n"));
}

#[test]
fn bootstrap_without_template_asks_for_config_first() {
    let dir = tempfile::tempdir().unwrap();
    let status = bootstrap_env_file(&dir.path().join(".env"), &dir.path().join(".env.template")).unwrap();
    assert_eq!(status, EnvFileStatus::TemplateMissing);

    let (_, output) = run(&isolated_setup(dir.path()));
    assert!(output.contains("Please run 'finnexus config' first"));
}
