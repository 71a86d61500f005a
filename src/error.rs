use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("An email address is required")]
    MissingEmail,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ActivityNotFound | AppError::ParticipantNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp | AppError::ActivityFull => StatusCode::BAD_REQUEST,
            AppError::MissingEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
