//! # toolrs Application Context
//!
//! File: cli/src/core/context.rs
//!
//! ## Overview
//!
//! `AppContext` is the single assembly point for the collaborators a command
//! needs: the loaded `Config`, the process-wide `CancellationToken`, and
//! constructors for the process runner, git/docker helpers, HTTP client and
//! credential store. Command handlers receive `&AppContext` from `main.rs` and
//! never build these pieces themselves.
//!
use crate::{
    common::{
        docker::DockerClient,
        git::GitClient,
        network,
        process::SystemRunner,
    },
    core::{
        config::Config,
        credentials::{EnvCredentialStore, LayeredCredentialStore, ProfileCredentialStore},
        error::Result,
    },
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Shared, read-only state for a single command run.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn new(config: Config, cancel: CancellationToken) -> Self {
        Self { config, cancel }
    }

    /// Process runner honouring the configured timeout and the run's cancellation token.
    pub fn runner(&self) -> SystemRunner {
        SystemRunner::new(self.config.process.timeout(), self.cancel.clone())
    }

    pub fn git(&self) -> GitClient<SystemRunner> {
        GitClient::new(self.runner())
    }

    pub fn docker(&self) -> DockerClient<SystemRunner> {
        DockerClient::new(self.runner())
    }

    pub fn http_client(&self) -> Result<reqwest::Client> {
        network::http_client()
    }

    /// Environment first, then the configured (or discovered) shell profile.
    pub fn credentials(&self) -> LayeredCredentialStore {
        let profile = match &self.config.credentials.profile_path {
            Some(path) => Some(ProfileCredentialStore::new(path)),
            None => dirs::home_dir().and_then(|home| ProfileCredentialStore::discover(&home)),
        };
        debug!(
            "Credential profile: {:?}",
            profile.as_ref().map(|p| p.path().display().to_string())
        );
        LayeredCredentialStore::new(EnvCredentialStore::new(), profile)
    }
}
