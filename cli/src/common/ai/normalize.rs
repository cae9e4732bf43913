//! # Response Text Normalizer (`common::ai::normalize`)
//!
//! File: cli/src/common/ai/normalize.rs
//!
//! Models like to wrap answers in markdown even when told not to. `normalize`
//! removes a fence around the whole answer and any run of markdown or quote
//! punctuation at either end, leaving the text in between untouched.
//!

/// Characters stripped from both ends, in addition to whitespace.
const NOISE: &[char] = &['`', '*', '#', '>', '_', '~', '-', '+', ':', '"', '\''];

const FENCE: &str = "```";

fn is_noise(c: char) -> bool {
    c.is_whitespace() || NOISE.contains(&c)
}

/// Cleans generated text for display or use as a commit message.
///
/// 1. Empty input stays empty.
/// 2. Text wrapped entirely in one fenced block becomes the block's content
///    (an optional language tag on the opening line is dropped).
/// 3. Leading and trailing noise characters and whitespace are removed.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let body = unwrap_fence(text).unwrap_or(text);
    body.trim_start_matches(is_noise)
        .trim_end_matches(is_noise)
        .trim()
        .to_string()
}

/// Content of a fence spanning the whole text, if it is exactly one fence.
fn unwrap_fence(text: &str) -> Option<&str> {
    let inner = text.trim().strip_prefix(FENCE)?.strip_suffix(FENCE)?;
    if inner.contains(FENCE) {
        return None;
    }
    let body = match inner.split_once('\n') {
        Some((tag, rest)) if is_language_tag(tag) => rest,
        _ => inner,
    };
    Some(body.trim())
}

fn is_language_tag(line: &str) -> bool {
    line.trim_end()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
