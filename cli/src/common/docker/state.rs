//! # toolrs Docker State Querying
//!
//! File: cli/src/common/docker/state.rs
//!
//! ## Overview
//!
//! Read-only queries against the Docker daemon via the `docker` CLI:
//!
//! - **`list_containers`**: `docker ps --format {{.ID}}|{{.Names}}|{{.Image}}|{{.Ports}}`
//!   parsed into `ContainerRow`s with a 1-based position and a tidied ports column.
//! - **`running_ids`**: `docker ps -q`.
//!
use super::DockerClient;
use crate::{common::process::ProcessRunner, core::error::Result};
use tracing::{debug, warn};

const PS_FORMAT: &str = "{{.ID}}|{{.Names}}|{{.Image}}|{{.Ports}}";

/// One running container as shown by `toolrs docker list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRow {
    /// 1-based position in the listing.
    pub position: usize,
    pub id: String,
    pub name: String,
    pub image: String,
    /// Comma-separated port mappings, or `-` when none are published.
    pub ports: String,
}

impl ContainerRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.id.clone(),
            self.name.clone(),
            self.image.clone(),
            self.ports.clone(),
        ]
    }
}

/// Column headers matching `ContainerRow::cells`.
pub const CONTAINER_HEADERS: [&str; 5] = ["#", "ID", "Name", "Image", "Ports"];

/// Parses `docker ps` output produced with `PS_FORMAT`.
pub fn parse_container_rows(output: &str) -> Vec<ContainerRow> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = line.splitn(4, '|');
            let id = fields.next()?.trim();
            let (name, image) = match (fields.next(), fields.next()) {
                (Some(name), Some(image)) => (name.trim(), image.trim()),
                _ => {
                    warn!("Skipping malformed docker ps line: {}", line);
                    return None;
                }
            };
            let ports = fields.next().unwrap_or("");
            Some((id.to_string(), name.to_string(), image.to_string(), format_ports(ports)))
        })
        .enumerate()
        .map(|(i, (id, name, image, ports))| ContainerRow {
            position: i + 1,
            id,
            name,
            image,
            ports,
        })
        .collect()
}

/// Trims each mapping, collapses inner whitespace, and joins with `, `.
fn format_ports(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "-".to_string();
    }
    raw.split(',')
        .map(|part| part.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One id per non-empty line, as printed by `docker ps -q` and `docker stop`.
pub(super) fn parse_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl<R: ProcessRunner> DockerClient<R> {
    pub async fn list_containers(&self) -> Result<Vec<ContainerRow>> {
        let output = self
            .run_checked(["ps", "--format", PS_FORMAT], "Error listing Docker containers.")
            .await?;
        let rows = parse_container_rows(&output);
        debug!("docker ps returned {} container(s)", rows.len());
        Ok(rows)
    }

    pub async fn running_ids(&self) -> Result<Vec<String>> {
        let output = self
            .run_checked(["ps", "-q"], "Error retrieving running container IDs.")
            .await?;
        Ok(parse_ids(&output))
    }
}
