use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::{AppState, ProxyError};

/// Relay a `process-video` call to the upstream backend, adding the access
/// credentials. Upstream status and body are passed back untouched.
pub async fn process_video(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, ProxyError> {
    if method != Method::POST {
        return Err(ProxyError::MethodNotAllowed(method));
    }

    let target = state.config.target().map_err(|e| {
        tracing::error!("Proxy is not configured: {}", e);
        ProxyError::from(e)
    })?;

    let payload = parse_body(&body)?;

    let reply = state
        .forwarder
        .forward(&target, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Error forwarding request to backend: {}", e);
            ProxyError::BadGateway(error_text(e))
        })?;

    let status = StatusCode::from_u16(reply.status).map_err(|e| ProxyError::BadGateway(e.to_string()))?;
    Ok((status, Json(reply.body)).into_response())
}

fn parse_body(body: &[u8]) -> Result<Value, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ProxyError::BadRequest(e.to_string()))
}

// Unwrap the transport error so the caller sees reqwest's own text.
fn error_text(err: va_core::Error) -> String {
    match err {
        va_core::Error::Http(e) => e.to_string(),
        va_core::Error::Serialization(e) => e.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), Value::Null);
        assert_eq!(parse_body(b"  \n").unwrap(), Value::Null);
        assert_eq!(
            parse_body(br#"{"video_url": "https://youtu.be/x"}"#).unwrap()["video_url"],
            "https://youtu.be/x"
        );
        assert!(matches!(parse_body(b"video_url=x"), Err(ProxyError::BadRequest(_))));
    }
}
