use thiserror::Error;
use tracing::{debug, info, warn};

use crate::database::ActivityStore;
use crate::models::ActivityMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub type ActivityResult<T> = Result<T, ActivityError>;

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.snapshot().await
}

/// Appends `email` to the activity's participants and returns the confirmation
/// message. Capacity is reported but not enforced.
pub async fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ActivityResult<String> {
    let outcome = store
        .update(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(ActivityError::AlreadySignedUp);
            }
            let was_full = activity.is_full();
            activity.participants.push(email.to_string());
            Ok(was_full)
        })
        .await
        .ok_or(ActivityError::NotFound)?;

    let was_full = outcome?;
    if was_full {
        warn!(activity = %activity_name, "signup accepted past max_participants");
    }
    info!(activity = %activity_name, "participant signed up");
    debug!(activity = %activity_name, %email, "signup");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister_from_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ActivityResult<String> {
    store
        .update(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::NotSignedUp);
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .await
        .ok_or(ActivityError::NotFound)??;

    info!(activity = %activity_name, "participant unregistered");
    debug!(activity = %activity_name, %email, "unregister");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
