use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};
use validator::Validate;

// Import domain entities and services
use pregnancy_guide_domain::entities::progress::ProgressSnapshot;
use pregnancy_guide_domain::entities::tracker::TrackerResult;
use pregnancy_guide_domain::entities::weekly::WeekContent;
use pregnancy_guide_domain::services::{TrackerServiceError, TrackerServiceTrait};

// Import our entities
use crate::entities::common::{validation_details, ErrorResponse};
use crate::entities::tracker::{
    DoughnutChart, ProgressBar, ProgressResponse, TrackerRequest, TrackerResponse, WeekContentResponse,
};

/// Service type for dependency injection
pub type SharedTrackerService = Arc<dyn TrackerServiceTrait + Send + Sync>;

/// Calculate the due date, current week and week content
#[utoipa::path(
    post,
    path = "/api/v1/tracker",
    request_body = TrackerRequest,
    responses(
        (status = 200, description = "Tracker result; out-of-range weeks carry a warning", body = TrackerResponse),
        (status = 400, description = "Invalid calculation type or date", body = ErrorResponse),
        (status = 404, description = "No content for the computed week", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "tracker"
)]
#[instrument(skip(service, request))]
pub async fn track_pregnancy(
    State(service): State<SharedTrackerService>,
    Json(request): Json<TrackerRequest>,
) -> Result<impl IntoResponse, Response> {
    info!("Tracking pregnancy from {}", request.calculation_type);

    if let Err(errors) = request.validate() {
        warn!("Invalid tracker request: {}", errors);
        return Err(ErrorResponse::validation_error("Invalid tracker request", Some(validation_details(&errors)))
            .into_response());
    }

    match service.track(&request.calculation_type, &request.date) {
        Ok(result) => Ok((StatusCode::OK, Json(convert_to_public_tracker(result)))),
        Err(e) => Err(tracker_error_response(e)),
    }
}

/// Get the content for one week
#[utoipa::path(
    get,
    path = "/api/v1/weeks/{week}",
    params(
        ("week" = i64, Path, description = "Gestational week, 1 to 41")
    ),
    responses(
        (status = 200, description = "Week content found", body = WeekContentResponse),
        (status = 404, description = "No content for the week", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "tracker"
)]
#[instrument(skip(service))]
pub async fn get_week_content(
    State(service): State<SharedTrackerService>,
    Path(week): Path<i64>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching content for week {}", week);

    match service.week_content(week) {
        Ok(content) => Ok((StatusCode::OK, Json(convert_to_public_week_content(content)))),
        Err(e) => Err(tracker_error_response(e)),
    }
}

/// Map tracker errors to HTTP responses
pub fn tracker_error_response(err: TrackerServiceError) -> Response {
    match err {
        TrackerServiceError::InvalidMode(e) => {
            warn!("Invalid calculation type: {}", e);
            ErrorResponse::bad_request(&e.to_string()).into_response()
        }
        TrackerServiceError::InvalidDate(_) => {
            warn!("Invalid date: {}", err);
            ErrorResponse::bad_request(&err.to_string()).into_response()
        }
        TrackerServiceError::DataNotFound(msg) => {
            info!("Week content not found: {}", msg);
            ErrorResponse::not_found(&msg).into_response()
        }
        TrackerServiceError::RepositoryError(msg) => {
            error!("Error reading week content: {}", msg);
            ErrorResponse::internal_error().into_response()
        }
    }
}

fn convert_to_public_progress(snapshot: ProgressSnapshot) -> ProgressResponse {
    ProgressResponse {
        week: snapshot.week,
        percentage_completed: snapshot.percentage_completed,
        trimester: snapshot.trimester.label().to_string(),
        doughnut: DoughnutChart {
            completed: snapshot.doughnut.completed,
            remaining: snapshot.doughnut.remaining,
        },
        progress_bar: ProgressBar {
            markers: snapshot.progress_bar.markers.to_vec(),
            label_positions: snapshot.progress_bar.label_positions.to_vec(),
        },
    }
}

fn convert_to_public_week_content(content: WeekContent) -> WeekContentResponse {
    WeekContentResponse {
        week: content.week,
        baby_development: content.baby_development,
        pregnancy_symptoms: content.pregnancy_symptoms,
        pregnancy_checklist: content.pregnancy_checklist,
        images: content.images,
    }
}

fn convert_to_public_tracker(result: TrackerResult) -> TrackerResponse {
    TrackerResponse {
        calculation_type: result.calculation_type.label().to_string(),
        reference_date: result.reference_date.format("%Y-%m-%d").to_string(),
        due_date: result.due_date.format("%Y-%m-%d").to_string(),
        week: result.week.number(),
        in_range: result.week.is_in_range(),
        progress: result.progress.map(convert_to_public_progress),
        week_content: result.week_content.map(convert_to_public_week_content),
        warning: result.warning,
    }
}
