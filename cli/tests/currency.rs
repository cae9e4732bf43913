//! # toolrs CLI Currency Integration Tests
//!
//! File: cli/tests/currency.rs
//!
//! `toolrs currency convert` against a local rate server configured through
//! `[currency] api_base`.
//!
mod common;
use common::*;

use axum::{routing::get, Json, Router};
use predicates::prelude::*;
use serde_json::json;

fn rate_sandbox() -> Sandbox {
    let addr = spawn_server(Router::new().route(
        "/currencies/usd.json",
        get(|| async { Json(json!({ "date": "2024-05-01", "usd": { "eur": 0.5, "brl": 5.0 } })) }),
    ));
    Sandbox::new(&format!(
        "[currency]\napi_base = \"http://{}/currencies\"\n",
        addr
    ))
}

#[test]
fn test_convert_with_flags() {
    rate_sandbox()
        .cmd()
        .args(["currency", "convert", "--amount", "10", "--from", "usd", "--to", "eur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 USD is equal to 5.00 EUR"));
}

#[test]
fn test_convert_prompts_for_missing_values() {
    rate_sandbox()
        .cmd()
        .args(["currency", "convert"])
        .write_stdin("2.5\nUSD\nbrl\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2.5 USD is equal to 12.50 BRL"));
}

#[test]
fn test_convert_unknown_target_fails() {
    rate_sandbox()
        .cmd()
        .args(["currency", "convert", "-a", "1", "-f", "usd", "-t", "xyz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid target currency."));
}

#[test]
fn test_convert_rejects_non_positive_amount() {
    rate_sandbox()
        .cmd()
        .args(["currency", "convert", "-a", "0", "-f", "usd", "-t", "eur"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The amount must be a positive number."));
}
