//! # Completion Responses (`common::ai::response`)
//!
//! File: cli/src/common/ai/response.rs
//!
//! Parses the body returned by the chat-completion endpoint. An `error`
//! object wins over everything else; a body with no usable `choices`
//! (absent, `null` or empty) is `AiError::EmptyResponse`.
//!
use super::{AiError, UNKNOWN_ERROR};
use serde::Deserialize;
use serde_json::Value;

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

impl Choice {
    /// Generated text, empty when the endpoint sent none.
    pub fn text(&self) -> &str {
        self.message.content.as_deref().unwrap_or("")
    }
}

/// A successful completion: at least one choice, in endpoint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(Choice::text)
    }
}

#[derive(Debug, Deserialize)]
struct RawBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    choices: Option<Vec<Choice>>,
    #[serde(default)]
    usage: Option<Usage>,
}

/// Maps a response body onto `CompletionResponse` or the matching `AiError`.
pub fn parse_body(body: &str) -> Result<CompletionResponse, AiError> {
    let raw: RawBody =
        serde_json::from_str(body).map_err(|e| AiError::InvalidResponse(e.to_string()))?;

    if let Some(error) = raw.error.filter(|e| !e.is_null()) {
        return Err(AiError::Api(error_message(&error)));
    }

    match raw.choices {
        Some(choices) if !choices.is_empty() => Ok(CompletionResponse {
            choices,
            usage: raw.usage,
        }),
        _ => Err(AiError::EmptyResponse),
    }
}

fn error_message(error: &Value) -> String {
    let message = match error {
        Value::String(text) => Some(text.as_str()),
        Value::Object(map) => map.get("message").and_then(Value::as_str),
        _ => None,
    };
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_with_usage() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Brasília"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let response = parse_body(body).unwrap();
        assert_eq!(response.first_text(), Some("Brasília"));
        assert_eq!(
            response.usage,
            Some(Usage {
                prompt_tokens: 12,
                completion_tokens: 3,
                total_tokens: 15
            })
        );
    }

    #[test]
    fn test_empty_absent_and_null_choices() {
        for body in [r#"{"choices": []}"#, r#"{}"#, r#"{"choices": null}"#] {
            assert_eq!(parse_body(body), Err(AiError::EmptyResponse), "body: {}", body);
        }
    }

    #[test]
    fn test_error_object_is_api_error() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            parse_body(body),
            Err(AiError::Api("Incorrect API key provided".into()))
        );
        assert_eq!(
            parse_body(r#"{"error": {"code": 500}}"#),
            Err(AiError::Api(UNKNOWN_ERROR.into()))
        );
    }

    #[test]
    fn test_error_wins_over_choices() {
        let body = r#"{"error": "quota exceeded", "choices": [{"message": {"content": "x"}}]}"#;
        assert_eq!(parse_body(body), Err(AiError::Api("quota exceeded".into())));
    }

    #[test]
    fn test_null_content_reads_as_empty() {
        let response = parse_body(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(response.first_text(), Some(""));
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_unparseable_body() {
        assert!(matches!(
            parse_body("<html>Bad Gateway</html>"),
            Err(AiError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_body("\"plain text\""),
            Err(AiError::InvalidResponse(_))
        ));
    }
}
