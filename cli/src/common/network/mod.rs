//! # toolrs Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! HTTP plumbing shared by the commands that reach remote endpoints: the
//! chat-completion client (`common::ai::client`) and the currency rate lookup.
//!
//! ## Architecture
//!
//! - **`http_client`**: builds the single `reqwest::Client` used for a run.
//! - **`currency`**: fetches and converts exchange rates from the jsDelivr
//!   hosted currency API.
//!
use crate::core::error::Result;
use anyhow::Context;

pub mod currency;

const USER_AGENT: &str = concat!("toolrs/", env!("CARGO_PKG_VERSION"));

/// HTTP client with the toolrs user agent. Timeouts are applied per call by the callers.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}
