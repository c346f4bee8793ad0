use serde_json::Value;
use va_core::{ApiErrorBody, ArticleResult, ValidationError};

pub const SOFT_FAILURE_FALLBACK: &str = "Processing failed, please check the video URL or try again.";
pub const UNRECOGNIZED_RESPONSE: &str =
    "Received data from backend, but no article content was generated or an unknown error occurred.";
pub const NETWORK_FAILURE: &str = "Failed to connect to the server or network error. Please try again.";

/// Where a displayed error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected before any request was made.
    Validation,
    /// The request itself failed.
    Network,
    /// The response body was not JSON.
    InvalidResponse,
    /// Non-2xx status.
    Api,
    /// 2xx status whose payload reports a failure.
    SoftFailure,
    /// 2xx status with nothing we know how to show.
    Unrecognized,
    /// The embedded player reported an error.
    Player,
}

impl FailureKind {
    /// Failures that also hide the video player.
    pub fn hides_player(self) -> bool {
        matches!(self, FailureKind::Network | FailureKind::InvalidResponse)
    }

    /// Failures reported by the backend or transport. Player errors are
    /// not shown over these.
    pub fn is_backend(self) -> bool {
        matches!(
            self,
            FailureKind::Network
                | FailureKind::InvalidResponse
                | FailureKind::Api
                | FailureKind::SoftFailure
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network() -> Self {
        Self::new(FailureKind::Network, NETWORK_FAILURE)
    }
}

impl From<ValidationError> for Failure {
    fn from(err: ValidationError) -> Self {
        Self::new(FailureKind::Validation, err.to_string())
    }
}

/// Result of reducing one HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Article data with a summary or at least one section.
    Article(ArticleResult),
    /// Video metadata, but the backend produced no article.
    MetadataOnly(ArticleResult),
    Failure(Failure),
}

/// Decide how a settled `process-video` response is shown.
///
/// The status code alone is not enough: the backend reports some failures
/// with a 2xx status and a failure marker in the payload text.
pub fn classify_response(status: u16, body: &str) -> Outcome {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("API response was not JSON: {}", e);
            return Outcome::Failure(Failure::new(
                FailureKind::InvalidResponse,
                format!(
                    "An unexpected error occurred. Status: {}. Please check server logs.",
                    status
                ),
            ));
        }
    };

    if !(200..300).contains(&status) {
        let reason = serde_json::from_value::<ApiErrorBody>(value)
            .ok()
            .and_then(|body| body.reason())
            .unwrap_or_else(|| format!("An API error occurred: {}", status));
        tracing::error!("API error response ({}): {}", status, reason);
        return Outcome::Failure(Failure::new(FailureKind::Api, reason));
    }

    let result: ArticleResult = match serde_json::from_value(value) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Unexpected response shape: {}", e);
            return Outcome::Failure(Failure::new(FailureKind::Unrecognized, UNRECOGNIZED_RESPONSE));
        }
    };

    if let Some(message) = soft_failure_message(&result) {
        return Outcome::Failure(Failure::new(FailureKind::SoftFailure, message));
    }

    if let Some(article) = &result.llm_article_data {
        if article.summary.to_lowercase().contains("error:") {
            return Outcome::Failure(Failure::new(
                FailureKind::SoftFailure,
                format!("Processing Error: {}", article.summary),
            ));
        }
    }

    if result.has_article_content() {
        Outcome::Article(result)
    } else if result.video_data.is_some() && result.llm_article_data.is_none() {
        Outcome::MetadataOnly(result)
    } else {
        Outcome::Failure(Failure::new(FailureKind::Unrecognized, UNRECOGNIZED_RESPONSE))
    }
}

// A `message` mentioning "failed", or any error attached to the video.
// Shown text: the message, then the video error, then the fallback.
fn soft_failure_message(result: &ArticleResult) -> Option<String> {
    let message = result.message.as_deref().filter(|m| !m.is_empty());
    let message_failed = message.map_or(false, |m| m.to_lowercase().contains("failed"));
    let video_error = result.video_data.as_ref().and_then(|video| video.error());

    if !message_failed && video_error.is_none() {
        return None;
    }

    Some(message.or(video_error).unwrap_or(SOFT_FAILURE_FALLBACK).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(outcome: Outcome) -> Failure {
        match outcome {
            Outcome::Failure(failure) => failure,
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_article_success() {
        let body = r#"{
            "video_data": {"video_id": "x", "title": "T"},
            "llm_article_data": {"summary": "S", "table_of_contents": [], "article_sections": []}
        }"#;
        match classify_response(200, body) {
            Outcome::Article(result) => assert_eq!(result.video_id(), Some("x")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_json_body() {
        let failure = failure(classify_response(504, "<html>Gateway Timeout</html>"));
        assert_eq!(failure.kind, FailureKind::InvalidResponse);
        assert_eq!(
            failure.message,
            "An unexpected error occurred. Status: 504. Please check server logs."
        );
        assert!(failure.kind.hides_player());
    }

    #[test]
    fn test_http_error_uses_detail() {
        let failure = failure(classify_response(503, r#"{"detail": "upstream down"}"#));
        assert_eq!(failure.kind, FailureKind::Api);
        assert_eq!(failure.message, "upstream down");
        assert!(!failure.kind.hides_player());
    }

    #[test]
    fn test_http_error_falls_back_to_message_then_status() {
        let body = r#"{"message": "Failed to process video.", "error_detail": "connect refused"}"#;
        assert_eq!(failure(classify_response(502, body)).message, "Failed to process video.");
        assert_eq!(failure(classify_response(500, "{}")).message, "An API error occurred: 500");
        assert_eq!(failure(classify_response(500, "[1, 2]")).message, "An API error occurred: 500");
    }

    #[test]
    fn test_soft_failure_in_message() {
        let body = r#"{"video_data": null, "llm_article_data": null, "message": "Transcript FAILED to load"}"#;
        let failure = failure(classify_response(200, body));
        assert_eq!(failure.kind, FailureKind::SoftFailure);
        assert_eq!(failure.message, "Transcript FAILED to load");
    }

    #[test]
    fn test_soft_failure_in_video_error() {
        let body = r#"{
            "video_data": {"video_id": "x", "title": "T", "error": "Video unavailable"},
            "llm_article_data": null,
            "message": "done"
        }"#;
        let failure_with_message = failure(classify_response(200, body));
        assert_eq!(failure_with_message.kind, FailureKind::SoftFailure);
        assert_eq!(failure_with_message.message, "done");

        let body = r#"{"video_data": {"video_id": "x", "error": "Video unavailable"}, "llm_article_data": null}"#;
        assert_eq!(failure(classify_response(200, body)).message, "Video unavailable");

        let body = r#"{"video_data": {"video_id": "x", "error": "Video unavailable"}, "message": ""}"#;
        assert_eq!(failure(classify_response(200, body)).message, "Video unavailable");
    }

    #[test]
    fn test_soft_failure_with_null_title() {
        let body = r#"{
            "message": "Processing failed: no transcript",
            "video_data": {"video_id": "x", "title": null},
            "llm_article_data": null
        }"#;
        let failure = failure(classify_response(200, body));
        assert_eq!(failure.kind, FailureKind::SoftFailure);
        assert_eq!(failure.message, "Processing failed: no transcript");
    }

    #[test]
    fn test_null_summary_with_sections_is_an_article() {
        let body = r#"{
            "video_data": {"video_id": "x", "title": "T"},
            "llm_article_data": {
                "summary": null,
                "table_of_contents": ["Intro"],
                "article_sections": [{"heading": "Intro", "content_block": "Body"}]
            }
        }"#;
        match classify_response(200, body) {
            Outcome::Article(result) => {
                let article = result.llm_article_data.expect("article");
                assert_eq!(article.summary, "");
                assert_eq!(article.article_sections.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_soft_failure_in_summary() {
        let body = r#"{
            "video_data": {"video_id": "x", "title": "T"},
            "llm_article_data": {"summary": "Error: transcript missing", "table_of_contents": [], "article_sections": []}
        }"#;
        let failure = failure(classify_response(200, body));
        assert_eq!(failure.kind, FailureKind::SoftFailure);
        assert_eq!(failure.message, "Processing Error: Error: transcript missing");
    }

    #[test]
    fn test_metadata_only() {
        let body = r#"{"video_data": {"video_id": "x", "title": "T"}, "llm_article_data": null}"#;
        assert!(matches!(classify_response(200, body), Outcome::MetadataOnly(_)));
    }

    #[test]
    fn test_empty_article_is_unrecognized() {
        let body = r#"{
            "video_data": {"video_id": "x", "title": "T"},
            "llm_article_data": {"summary": "", "table_of_contents": [], "article_sections": []}
        }"#;
        let failure = failure(classify_response(200, body));
        assert_eq!(failure.kind, FailureKind::Unrecognized);
        assert_eq!(failure.message, UNRECOGNIZED_RESPONSE);

        assert_eq!(failure_kind(classify_response(200, "{}")), FailureKind::Unrecognized);
        assert_eq!(failure_kind(classify_response(200, "42")), FailureKind::Unrecognized);
    }

    fn failure_kind(outcome: Outcome) -> FailureKind {
        failure(outcome).kind
    }
}
