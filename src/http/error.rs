//! Mapping of handler failures onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde_json::json;

use crate::db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("not found"),
            _ => HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() })),
        }
    }
}

/// Store errors other than not-found are logged here and never reach the client.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound,
            other => {
                log::error!("storage failure: {other}");
                ApiError::Internal
            }
        }
    }
}

/// Reject empty path keys before touching the store.
pub fn require_key(key: &str, name: &str) -> Result<(), ApiError> {
    if key.is_empty() {
        Err(ApiError::bad_request(format!("missing {name}")))
    } else {
        Ok(())
    }
}

/// JSON extractor settings: lenient about `Content-Type`, and any decode
/// failure becomes a plain 400.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, req: &HttpRequest| {
            log::warn!("invalid request body on {} {}: {err}", req.method(), req.path());
            ApiError::bad_request("invalid request body").into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound {
            entity: "media",
            key: "x".into(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn internal_errors_are_redacted() {
        let err: ApiError = StoreError::Query {
            op: "upsert player",
            source: sqlx::Error::RowNotFound,
        }
        .into();
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(res.into_body()).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(!text.contains("upsert player"));
        assert!(text.contains("internal server error"));
    }

    #[test]
    fn blank_keys_are_rejected() {
        assert!(require_key("", "id").is_err());
        assert!(require_key("p1", "id").is_ok());
    }
}
