use axum::Json;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::clients::ExerciseStore;
use crate::config::Config;
use crate::error::RecommendationError;
use crate::models::plan::WorkoutPlan;
use crate::models::profile::SurveyProfile;
use crate::services::recommendation::RecommendationService;

#[derive(Clone)]
pub struct AppState<S> {
    pub config: Config,
    pub recommendation_service: RecommendationService<S>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub workouts: Vec<WorkoutPlan>,
}

/// Only enforced when an API token is configured.
fn authenticate_request(headers: &HeaderMap, expected_token: Option<&str>) -> Result<(), StatusCode> {
    let Some(expected_token) = expected_token else {
        return Ok(());
    };

    let auth_str = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if token == expected_token => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecommendationError::MalformedProfile(_) => StatusCode::BAD_REQUEST,
            RecommendationError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub async fn recommend_handler<S>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Json(survey): Json<SurveyProfile>,
) -> Response
where
    S: ExerciseStore + Clone + 'static,
{
    if let Err(status) = authenticate_request(&headers, state.config.api_token.as_deref()) {
        return status.into_response();
    }

    match state.recommendation_service.recommend_for_survey(survey).await {
        Ok(workouts) => {
            tracing::info!(workout_count = workouts.len(), "recommend.completed");
            Json(RecommendationResponse { workouts }).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "recommend.failed");
            e.into_response()
        }
    }
}
