//! # toolrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `toolrs` binary inside a `Sandbox`: a temporary HOME with its
//! own config file and `.bashrc`, so nothing touches the real user profile,
//! the real API key, or the network.
//!
//! Remote endpoints are replaced by a local `axum` server started with
//! `spawn_server`.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    process,
    sync::mpsc,
    thread,
};
use tempfile::TempDir;

/// # Get toolrs Command (`toolrs_cmd`)
///
/// An `assert_cmd::Command` for the `toolrs` binary built for this test run.
pub fn toolrs_cmd() -> Command {
    Command::cargo_bin("toolrs").expect("Failed to find toolrs binary for testing")
}

/// Isolated HOME plus config file for one test.
pub struct Sandbox {
    pub home: TempDir,
    pub config: PathBuf,
}

impl Sandbox {
    /// A sandbox whose config file holds `toml` and whose HOME has an empty `.bashrc`.
    pub fn new(toml: &str) -> Self {
        let home = tempfile::tempdir().expect("temp home");
        std::fs::write(home.path().join(".bashrc"), "").expect("write .bashrc");
        let config = home.path().join("toolrs.toml");
        std::fs::write(&config, toml).expect("write config");
        Self { home, config }
    }

    pub fn profile(&self) -> PathBuf {
        self.home.path().join(".bashrc")
    }

    pub fn profile_contents(&self) -> String {
        std::fs::read_to_string(self.profile()).expect("read .bashrc")
    }

    /// `toolrs` running with this sandbox as HOME and config.
    pub fn cmd(&self) -> Command {
        let mut cmd = toolrs_cmd();
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("TOOLRS_CONFIG", &self.config)
            .env("NO_PROXY", "127.0.0.1")
            .env("no_proxy", "127.0.0.1")
            .env_remove("OPENAI_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Serves `router` on an ephemeral local port from a background thread.
pub fn spawn_server(router: axum::Router) -> SocketAddr {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("server runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind test server");
            tx.send(listener.local_addr().expect("local addr"))
                .expect("send address");
            axum::serve(listener, router).await.expect("serve");
        });
    });
    rx.recv().expect("server address")
}

pub fn git_available() -> bool {
    process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Runs `git <args>` in `dir` and panics on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("HOME", dir)
        .output()
        .expect("spawn git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A repository with one commit and identity configured locally.
pub fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "user.email", "dev@example.com"]);
    git(dir, &["config", "user.name", "Dev"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    std::fs::write(dir.join("notes.txt"), "v1\n").expect("write notes.txt");
    git(dir, &["add", "."]);
    git(dir, &["commit", "-q", "-m", "initial"]);
}
