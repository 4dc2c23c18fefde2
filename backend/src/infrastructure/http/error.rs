use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::application::dto::ActionResponse;
use crate::domain::DomainError;

/// Error type at the HTTP boundary.
///
/// Domain failures map to the client envelope: duplicate id and not-found
/// stay HTTP 200 with `success:false` (the page builder treats them as
/// normal outcomes), validation is 400, missing/insufficient auth is 403.
/// Store failures are 500 with a sanitized message; the detail goes to the
/// log only.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Domain(err) = self;

        let (status, body) = match &err {
            DomainError::Validation(_) => {
                (StatusCode::BAD_REQUEST, ActionResponse::failure(&err))
            }
            DomainError::DuplicateId(_) | DomainError::NotFound(_) => {
                (StatusCode::OK, ActionResponse::failure(&err))
            }
            DomainError::Forbidden(_) => (StatusCode::FORBIDDEN, ActionResponse::failure(&err)),
            DomainError::Store(detail) => {
                error!("store failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ActionResponse::failure_with_message(&err, "Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
