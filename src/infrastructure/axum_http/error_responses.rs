use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::application::usecases::{
    admin_auth::AdminAuthError, advertisers::AdvertiserError, content::ContentError,
    postings::PostingError, submissions::SubmissionError,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    let body = Json(ErrorResponse {
        code: status.as_u16(),
        message,
    });

    (status, body).into_response()
}

/// Errors raised by the http layer itself, before a use case runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Internal(err) => {
                error!(error = ?err, "http: internal error");
                // Don't leak internal error detail to client
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        error_response(status, message)
    }
}

macro_rules! use_case_error_response {
    ($($error:ty),+ $(,)?) => {
        $(
            impl IntoResponse for $error {
                fn into_response(self) -> Response {
                    let status = self.status_code();
                    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                        error!(error = ?self, "http: internal error");
                        "Internal server error".to_string()
                    } else {
                        if status.is_server_error() {
                            error!(error = ?self, "http: upstream failure");
                        }
                        self.to_string()
                    };

                    error_response(status, message)
                }
            }
        )+
    };
}

use_case_error_response!(
    AdvertiserError,
    PostingError,
    SubmissionError,
    ContentError,
    AdminAuthError,
);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn quota_error_keeps_its_message() {
        let response = PostingError::QuotaExceeded {
            plan: "3_months".to_string(),
            limit: 12,
            count: 12,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_of(response).await;
        assert_eq!(body["code"], 403);
        assert_eq!(
            body["message"],
            "Posting limit reached. Your 3_months plan allows 12 listings. You have 12 active listings."
        );
    }

    #[tokio::test]
    async fn internal_detail_is_hidden() {
        let response =
            AdvertiserError::Internal(anyhow::anyhow!("connection refused on 10.0.0.3")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body["message"], "Internal server error");
    }
}
