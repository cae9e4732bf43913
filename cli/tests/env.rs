//! # toolrs CLI Env Integration Tests
//!
//! File: cli/tests/env.rs
//!
//! `toolrs env set|unset` writing to the sandbox's `.bashrc`.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_env_set_then_unset() {
    let sandbox = Sandbox::new("");
    std::fs::write(sandbox.profile(), "alias ll='ls -l'\n").unwrap();

    sandbox
        .cmd()
        .args(["env", "set", "GREETING", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source "));
    let profile = sandbox.profile_contents();
    assert!(profile.contains("alias ll='ls -l'"));
    assert!(profile.contains("export GREETING='hello world'"));

    sandbox
        .cmd()
        .args(["env", "set", "GREETING", "bye"])
        .assert()
        .success();
    let profile = sandbox.profile_contents();
    assert_eq!(profile.matches("GREETING").count(), 1);
    assert!(profile.contains("export GREETING='bye'"));

    sandbox
        .cmd()
        .args(["env", "unset", "GREETING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));
    assert_eq!(sandbox.profile_contents(), "alias ll='ls -l'\n");
}

#[test]
fn test_env_set_prompts_for_missing_values() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args(["env", "set"])
        .write_stdin("EDITOR\nnvim\n")
        .assert()
        .success();
    assert!(sandbox.profile_contents().contains("export EDITOR='nvim'"));
}

#[test]
fn test_env_set_rejects_invalid_name() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .args(["env", "set", "1BAD-NAME", "x"])
        .assert()
        .code(1);
    assert!(sandbox.profile_contents().is_empty());
}

#[test]
fn test_env_unset_missing_variable_is_not_an_error() {
    Sandbox::new("")
        .cmd()
        .args(["env", "unset", "NOT_DEFINED_ANYWHERE_42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not set"));
}

#[test]
fn test_env_uses_configured_profile_path() {
    let dir = tempfile::tempdir().unwrap();
    let custom = dir.path().join("custom_profile");
    let sandbox = Sandbox::new(&format!(
        "[credentials]\nprofile_path = \"{}\"\n",
        custom.display()
    ));

    sandbox
        .cmd()
        .args(["env", "set", "TOKEN", "abc"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&custom)
        .unwrap()
        .contains("export TOKEN='abc'"));
    assert!(sandbox.profile_contents().is_empty());
}

#[test]
fn test_env_unset_inherited_variable_reports_nothing_removed() {
    let sandbox = Sandbox::new("");
    sandbox
        .cmd()
        .env("TOOLRS_INHERITED_ONLY", "from-shell")
        .args(["env", "unset", "TOOLRS_INHERITED_ONLY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was removed"))
        .stdout(predicate::str::contains("✅").not());
    assert!(sandbox.profile_contents().is_empty());
}

#[test]
fn test_env_set_rejects_multiline_value() {
    let sandbox = Sandbox::new("");
    std::fs::write(sandbox.profile(), "export KEEP='1'\n").unwrap();

    sandbox
        .cmd()
        .args(["env", "set", "BROKEN", "x\ny"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line breaks"));
    assert_eq!(sandbox.profile_contents(), "export KEEP='1'\n");
}
