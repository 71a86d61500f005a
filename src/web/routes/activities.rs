use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::database::{ActivityDirectory, ActivityStore};
use crate::error::AppError;
use crate::services::activities_service::{self, MessageView};

// Missing `email` is reported as a JSON error by the service, not by the extractor.
#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageView>, AppError> {
    activities_service::sign_up(&store, &activity_name, query.email())
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Signup for {} failed: {}", activity_name, e);
            e
        })
}

pub async fn remove_participant_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageView>, AppError> {
    activities_service::remove_participant(&store, &activity_name, query.email())
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Removal from {} failed: {}", activity_name, e);
            e
        })
}
