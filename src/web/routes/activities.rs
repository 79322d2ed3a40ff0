use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::{ActivityMap, MessageResponse};
use crate::services::activities_service;
use crate::web::app::AppState;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&state.store).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query.inspect_err(|e| {
        warn!(activity = %activity_name, "signup rejected: {}", e.body_text());
    })?;
    match activities_service::signup_for_activity(&state.store, &activity_name, &query.email)
        .await
    {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!(activity = %activity_name, "signup rejected: {}", e);
            debug!(activity = %activity_name, email = %query.email, "rejected signup");
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = query.inspect_err(|e| {
        warn!(activity = %activity_name, "unregister rejected: {}", e.body_text());
    })?;
    match activities_service::unregister_from_activity(&state.store, &activity_name, &query.email)
        .await
    {
        Ok(message) => Ok(Json(MessageResponse { message })),
        Err(e) => {
            warn!(activity = %activity_name, "unregister rejected: {}", e);
            debug!(activity = %activity_name, email = %query.email, "rejected unregister");
            Err(e.into())
        }
    }
}
