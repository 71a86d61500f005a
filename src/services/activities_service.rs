use serde::Serialize;
use tracing::{info, warn};

use crate::database::{ActivityDirectory, ActivityStore, RemovalOutcome, SignupOutcome};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageView {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.snapshot().await
}

pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, AppError> {
    let email = require_email(store, activity_name, email).await?;

    match store.add_participant(activity_name, email).await {
        SignupOutcome::Added => {
            info!(activity = %activity_name, %email, "participant signed up");
            Ok(MessageView {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        SignupOutcome::UnknownActivity => Err(AppError::ActivityNotFound),
        SignupOutcome::AlreadyEnrolled => Err(AppError::AlreadySignedUp),
        SignupOutcome::Full => {
            warn!(activity = %activity_name, %email, "signup rejected, activity full");
            Err(AppError::ActivityFull)
        }
    }
}

pub async fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, AppError> {
    let email = require_email(store, activity_name, email).await?;

    match store.remove_participant(activity_name, email).await {
        RemovalOutcome::Removed => {
            info!(activity = %activity_name, %email, "participant removed");
            Ok(MessageView {
                message: format!("Removed {} from {}", email, activity_name),
            })
        }
        RemovalOutcome::UnknownActivity => Err(AppError::ActivityNotFound),
        RemovalOutcome::NotEnrolled => Err(AppError::ParticipantNotFound),
    }
}

// Unknown activity wins over a blank email. Emails match exactly after
// trimming; no case folding and no format check.
async fn require_email<'a>(
    store: &ActivityStore,
    activity_name: &str,
    email: &'a str,
) -> Result<&'a str, AppError> {
    if !store.contains(activity_name).await {
        return Err(AppError::ActivityNotFound);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::MissingEmail);
    }
    Ok(email)
}
