use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::protocol::{ErrorResponse, JSON_CONTENT_TYPE};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Content-Length inválido.")]
    InvalidContentLength,

    #[error("Body vacío.")]
    EmptyBody,

    #[error("El body debe ser JSON válido.")]
    InvalidJson(#[source] serde_json::Error),

    #[error("JSON debe tener campos 'seqA' y 'seqB' como strings.")]
    SchemaViolation(#[source] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidContentLength
            | Self::EmptyBody
            | Self::InvalidJson(_)
            | Self::SchemaViolation(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            let cause = std::error::Error::source(&self).map(ToString::to_string);
            tracing::warn!(error = %self, cause = ?cause, "rejected compare request");
        }

        let body = Json(ErrorResponse { error: self.to_string() });
        (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn request_errors_are_bad_request() {
        assert_eq!(ServerError::InvalidContentLength.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::EmptyBody.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn startup_and_serve_errors_are_server_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        assert_eq!(ServerError::Io(io).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ServerError::Config("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Internal("accept loop failed".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_error_response_carries_message() {
        let response = ServerError::Internal("accept loop failed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        let body: ErrorResponse = serde_json::from_str(&body_of(response).await).unwrap();
        assert_eq!(body.error, "internal error: accept loop failed");
    }

    #[tokio::test]
    async fn empty_body_response_is_json() {
        let response = ServerError::EmptyBody.into_response();
        assert_eq!(body_of(response).await, r#"{"error":"Body vacío."}"#);
    }
}
