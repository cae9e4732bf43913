//! # toolrs Docker Container Lifecycle
//!
//! File: cli/src/common/docker/lifecycle.rs
//!
//! Stops containers with a single `docker stop <ids...>` invocation and
//! returns the ids Docker reports as stopped.
//!
use super::{state::parse_ids, DockerClient};
use crate::{common::process::ProcessRunner, core::error::Result};
use tracing::info;

impl<R: ProcessRunner> DockerClient<R> {
    /// Stops `ids`. An empty slice is a no-op and spawns nothing.
    pub async fn stop(&self, ids: &[String]) -> Result<Vec<String>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let args = std::iter::once("stop".to_string()).chain(ids.iter().cloned());
        let output = self.run_checked(args, "Error stopping containers.").await?;
        let stopped = parse_ids(&output);
        info!("Stopped {} container(s)", stopped.len());
        Ok(stopped)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::process::fake::ScriptedRunner;

    #[tokio::test]
    async fn test_stop_empty_is_noop() {
        let docker = DockerClient::new(ScriptedRunner::new());
        assert!(docker.stop(&[]).await.unwrap().is_empty());
        assert!(docker.runner().calls().is_empty());
    }

    #[tokio::test]
    async fn test_stop_passes_all_ids_in_one_call() {
        let docker = DockerClient::new(ScriptedRunner::new().ok("a1\nb2\n"));
        let ids = vec!["a1".to_string(), "b2".to_string()];
        let stopped = docker.stop(&ids).await.unwrap();
        assert_eq!(stopped, ids);
        assert_eq!(docker.runner().calls(), vec![vec!["docker", "stop", "a1", "b2"]]);
    }

    #[tokio::test]
    async fn test_stop_failure() {
        let docker = DockerClient::new(ScriptedRunner::new().fail("No such container"));
        let err = docker.stop(&["zz".to_string()]).await.unwrap_err();
        assert_eq!(err.to_string(), "Error stopping containers.");
    }
}
