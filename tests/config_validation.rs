use std::path::PathBuf;
use std::time::Duration;

use eventgate::config::model::{ConfigFile, RawConfigFile};
use eventgate::config::validate::validate_paths;
use eventgate::errors::EventgateError;
use eventgate::fs::mock::{mtime, MockFileSystem};
use eventgate::types::OutputTarget;
use eventgate::watch::WatchTarget;

fn parse(toml_str: &str) -> Result<ConfigFile, EventgateError> {
    let raw: RawConfigFile = toml::from_str(toml_str)?;
    ConfigFile::try_from(raw)
}

fn config_error(result: Result<ConfigFile, EventgateError>) -> String {
    match result {
        Err(EventgateError::ConfigError(msg)) => msg,
        other => panic!("expected ConfigError, got {:?}", other.map(|_| "Ok")),
    }
}

#[test]
fn minimal_folder_config_applies_defaults() {
    let cfg = parse(
        r#"
        [watch]
        dir = "data/incoming"
        pattern = "*.csv"
        additions = true
        timeout = 300
        "#,
    )
    .unwrap();

    let spec = cfg.spec();
    assert_eq!(
        spec.target,
        WatchTarget::Directory {
            dir: PathBuf::from("data/incoming"),
            pattern: "*.csv".to_string(),
        }
    );
    assert!(spec.mask.additions);
    assert!(!spec.mask.deletions);
    assert!(!spec.mask.changes);
    assert_eq!(spec.timeout, Duration::from_secs(300));
    // poll_interval falls back to the default.
    assert_eq!(spec.poll_interval, Duration::from_secs(5));

    // [output] omitted entirely: stdout + stderr.
    assert_eq!(cfg.output().normal, OutputTarget::Stdout);
    assert_eq!(cfg.output().timed_out, OutputTarget::Stderr);
}

#[test]
fn file_mode_config_builds_a_file_target() {
    let cfg = parse(
        r#"
        [watch]
        mode = "file"
        file = "/data/report.csv"
        changes = true
        timeout = 60
        poll_interval = 2

        [output]
        normal = "out.ndjson"
        timed_out = "-"
        "#,
    )
    .unwrap();

    assert_eq!(
        cfg.spec().target,
        WatchTarget::File {
            path: PathBuf::from("/data/report.csv"),
        }
    );
    assert_eq!(cfg.spec().poll_interval, Duration::from_secs(2));
    assert_eq!(
        cfg.output().normal,
        OutputTarget::File(PathBuf::from("out.ndjson"))
    );
    assert_eq!(cfg.output().timed_out, OutputTarget::Stdout);
}

#[test]
fn empty_interest_mask_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        dir = "data"
        pattern = "*.csv"
        timeout = 60
        "#,
    ));
    assert!(msg.contains("at least one event kind"), "{msg}");
}

#[test]
fn folder_mode_without_dir_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        pattern = "*.csv"
        additions = true
        timeout = 60
        "#,
    ));
    assert!(msg.contains("folder"), "{msg}");
}

#[test]
fn folder_mode_without_pattern_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        dir = "data"
        additions = true
        timeout = 60
        "#,
    ));
    assert!(msg.contains("file specification"), "{msg}");
}

#[test]
fn file_mode_without_file_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        mode = "file"
        additions = true
        timeout = 60
        "#,
    ));
    assert!(msg.contains("file"), "{msg}");
}

#[test]
fn zero_timeout_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        dir = "data"
        pattern = "*.csv"
        additions = true
        timeout = 0
        "#,
    ));
    assert!(msg.contains("timeout"), "{msg}");
}

#[test]
fn zero_poll_interval_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        dir = "data"
        pattern = "*.csv"
        additions = true
        timeout = 60
        poll_interval = 0
        "#,
    ));
    assert!(msg.contains("poll_interval"), "{msg}");
}

#[test]
fn broken_glob_pattern_is_rejected() {
    let msg = config_error(parse(
        r#"
        [watch]
        dir = "data"
        pattern = "report["
        additions = true
        timeout = 60
        "#,
    ));
    assert!(msg.contains("glob"), "{msg}");
}

#[test]
fn unknown_mode_fails_toml_deserialization() {
    let raw: Result<RawConfigFile, _> = toml::from_str(
        r#"
        [watch]
        mode = "symlink"
        dir = "data"
        pattern = "*"
        additions = true
        timeout = 60
        "#,
    );
    assert!(raw.is_err());
}

#[test]
fn validate_paths_requires_the_watched_dir_to_exist() {
    let fs = MockFileSystem::new();
    fs.add_file("present/a.csv", mtime(1));

    let ok = parse(
        r#"
        [watch]
        dir = "present"
        pattern = "*.csv"
        additions = true
        timeout = 60
        "#,
    )
    .unwrap();
    assert!(validate_paths(&fs, ok.spec()).is_ok());

    let missing = parse(
        r#"
        [watch]
        dir = "absent"
        pattern = "*.csv"
        additions = true
        timeout = 60
        "#,
    )
    .unwrap();
    let err = validate_paths(&fs, missing.spec()).unwrap_err();
    assert!(matches!(err, EventgateError::ConfigError(_)));
}

#[test]
fn validate_paths_checks_the_watched_files_parent() {
    let fs = MockFileSystem::new();
    fs.add_dir("data");

    let cfg = parse(
        r#"
        [watch]
        mode = "file"
        file = "data/report.csv"
        changes = true
        timeout = 60
        "#,
    )
    .unwrap();

    // The file itself doesn't exist yet; only its directory must.
    assert!(validate_paths(&fs, cfg.spec()).is_ok());

    let orphan = parse(
        r#"
        [watch]
        mode = "file"
        file = "nowhere/report.csv"
        changes = true
        timeout = 60
        "#,
    )
    .unwrap();
    assert!(validate_paths(&fs, orphan.spec()).is_err());
}

#[test]
fn output_targets_parse_from_strings() {
    assert_eq!("stdout".parse::<OutputTarget>(), Ok(OutputTarget::Stdout));
    assert_eq!("-".parse::<OutputTarget>(), Ok(OutputTarget::Stdout));
    assert_eq!("stderr".parse::<OutputTarget>(), Ok(OutputTarget::Stderr));
    assert_eq!(
        "errors.ndjson".parse::<OutputTarget>(),
        Ok(OutputTarget::File(PathBuf::from("errors.ndjson")))
    );
    assert!("".parse::<OutputTarget>().is_err());
}
