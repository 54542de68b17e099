use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{
    DomainErrorKind, EntityErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind,
};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match &self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::Entity(entity_error_kind) => match entity_error_kind {
                    EntityErrorKind::NotFound => StatusCode::NOT_FOUND,
                    EntityErrorKind::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
                    EntityErrorKind::DbTransaction => StatusCode::INTERNAL_SERVER_ERROR,
                },
                InternalErrorKind::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                InternalErrorKind::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Network | ExternalErrorKind::Other(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
        }
    }

    /// Client-facing message. Storage details stay in the logs.
    fn detail(&self, status: StatusCode) -> String {
        if status.is_server_error() && status != StatusCode::BAD_GATEWAY {
            "Internal Server Error".to_string()
        } else {
            self.0.message()
        }
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html#associatedconstant.UNPROCESSABLE_ENTITY
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("Request failed with {status}: {:?}", self.0);
        } else {
            warn!("Request rejected with {status}: {}", self.0.message());
        }

        (status, Json(json!({ "detail": self.detail(status) }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: DomainError) -> (StatusCode, serde_json::Value) {
        let response = Error(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_are_unprocessable() {
        let (status, body) = render(DomainError::validation("Text must not be empty")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({"detail": "Text must not be empty"}));
    }

    #[tokio::test]
    async fn provider_errors_are_bad_gateway_with_provider_message() {
        let (status, body) = render(DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                "Provider error: model_decommissioned".to_string(),
            )),
        })
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({"detail": "Provider error: model_decommissioned"}));
    }

    #[tokio::test]
    async fn storage_errors_are_internal_and_opaque() {
        let (status, body) = render(DomainError {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                EntityErrorKind::DbTransaction,
            )),
        })
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Internal Server Error"}));
    }
}
