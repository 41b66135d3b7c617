#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{CannedInput, FakeRunner};
use dbscaffold::{
    cli::actions::scaffold,
    error::ScaffoldError,
    provision::{ENV_FILE, Settings},
    recipe,
    request::Field,
};
use std::fs;

#[test]
fn test_postgres_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = recipe::lookup("postgres").unwrap();
    let input = CannedInput::new(&["alice", "secret123", "mydb", "5432"]);
    let runner = FakeRunner::default();

    scaffold(recipe, &Settings::default(), dir.path(), &input, &runner).unwrap();

    let target = dir.path().join("mydb");
    assert!(target.join("compose.yml").is_file());
    assert_eq!(
        fs::read_to_string(target.join(ENV_FILE)).unwrap(),
        "POSTGRES_USER=alice\n\
         POSTGRES_PASSWORD=secret123\n\
         POSTGRES_DB=mydb\n\
         POSTGRES_VOLUME_NAME=mydb\n\
         POSTGRES_PORT=5432\n"
    );

    let commands: Vec<String> = runner
        .invocations()
        .iter()
        .map(|i| format!("{} {}", i.program, i.args.join(" ")))
        .collect();
    assert_eq!(
        commands,
        vec![
            "git clone -- https://github.com/lassejlv/postgres mydb",
            "docker pull postgres:16",
            "docker compose up -d",
        ]
    );
}

#[test]
fn test_existing_database_is_rejected_before_provisioning() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("mydb")).unwrap();

    let recipe = recipe::lookup("postgres").unwrap();
    let input = CannedInput::new(&["alice", "secret123", "mydb", "5432"]);
    let runner = FakeRunner::default();

    let err = scaffold(recipe, &Settings::default(), dir.path(), &input, &runner).unwrap_err();

    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::Validation(errors)) => {
            assert!(errors.has(Field::Database));
            assert!(err.to_string().contains("Database already exists"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(runner.invocations().is_empty());
    assert!(!dir.path().join("mydb").join(ENV_FILE).exists());
}

#[test]
fn test_invalid_answers_reported_together() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = recipe::lookup("postgres").unwrap();
    let input = CannedInput::new(&["", "secret123", "mydb", "80"]);
    let runner = FakeRunner::default();

    let err = scaffold(recipe, &Settings::default(), dir.path(), &input, &runner).unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Invalid input:"));
    assert!(message.contains("- username: must not be empty"));
    assert!(message.contains("- port: must be between 1024 and 65535"));
    assert!(runner.invocations().is_empty());
    assert!(!dir.path().join("mydb").exists());
}

#[test]
fn test_compose_failure_leaves_directory() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = recipe::lookup("postgres").unwrap();
    let input = CannedInput::new(&["alice", "secret123", "mydb", "5432"]);
    let runner = FakeRunner::failing_on("docker", "compose");

    let err = scaffold(recipe, &Settings::default(), dir.path(), &input, &runner).unwrap_err();

    assert_eq!(
        err.to_string(),
        "docker compose up failed: docker compose: simulated failure"
    );
    assert_eq!(runner.invocations().len(), 3);
    assert!(dir.path().join("mydb").join(ENV_FILE).is_file());
}

#[test]
fn test_clone_failure_stops_before_pull() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = recipe::lookup("postgres").unwrap();
    let input = CannedInput::new(&["alice", "secret123", "mydb", "5432"]);
    let runner = FakeRunner::failing_on("git", "clone");

    let err = scaffold(recipe, &Settings::default(), dir.path(), &input, &runner).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::Provisioning { .. })
    ));
    assert_eq!(runner.invocations().len(), 1);
    assert!(!dir.path().join("mydb").exists());
}

#[test]
fn test_option_like_database_name_never_reaches_git() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = recipe::lookup("postgres").unwrap();

    for name in ["--bare", "/tmp/elsewhere", "../escape"] {
        let input = CannedInput::new(&["alice", "secret123", name, "5432"]);
        let runner = FakeRunner::default();

        let err =
            scaffold(recipe, &Settings::default(), dir.path(), &input, &runner).unwrap_err();

        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::Validation(errors)) => assert!(errors.has(Field::Database)),
            other => panic!("unexpected error for {name}: {other:?}"),
        }
        assert!(runner.invocations().is_empty(), "{name}");
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
