use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use va_core::ProxyErrorBody;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(Method),

    #[error("Server configuration error: {0}")]
    Config(String),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Failed to process video: {0}")]
    BadGateway(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn envelope(message: &str, detail: &str) -> Json<ProxyErrorBody> {
        Json(ProxyErrorBody {
            message: message.to_string(),
            error_detail: detail.to_string(),
        })
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ProxyError::MethodNotAllowed(_) => {
                (status, [(header::ALLOW, "POST")], self.to_string()).into_response()
            }
            ProxyError::Config(detail) => {
                (status, Self::envelope("Server configuration error.", detail)).into_response()
            }
            ProxyError::BadRequest(detail) => {
                (status, Self::envelope("Invalid request body.", detail)).into_response()
            }
            ProxyError::BadGateway(detail) => {
                (status, Self::envelope("Failed to process video.", detail)).into_response()
            }
        }
    }
}

impl From<va_core::Error> for ProxyError {
    fn from(err: va_core::Error) -> Self {
        match err {
            va_core::Error::Config(detail) => ProxyError::Config(detail),
            other => ProxyError::BadGateway(other.to_string()),
        }
    }
}
