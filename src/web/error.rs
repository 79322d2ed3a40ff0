use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorDetail;
use crate::services::activities_service::ActivityError;

/// JSON error response: `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        let status = match err {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorDetail {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_status() {
        assert_eq!(ApiError::from(ActivityError::NotFound).status, StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(ActivityError::AlreadySignedUp).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ActivityError::NotSignedUp).status,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn detail_is_error_message() {
        let err = ApiError::from(ActivityError::AlreadySignedUp);
        assert!(err.detail.contains("already signed up"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn query_rejection_keeps_status_and_reason() {
        let uri: http::Uri = "/activities/Chess%20Club/signup?seats=many".parse().unwrap();
        let rejection =
            axum::extract::Query::<std::collections::HashMap<String, u32>>::try_from_uri(&uri)
                .unwrap_err();
        let err = ApiError::from(rejection);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.detail.contains("deserialize"), "{}", err.detail);
    }
}
