use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::models::EventView;

pub const SUCCESS_MESSAGE: &str = "Success";

/// `{success, message}` body shared by every mutating endpoint.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub schedule: Vec<EventView>,
}

pub fn message(success: bool, text: impl Into<String>, status: StatusCode) -> impl IntoResponse {
    let body = ApiMessage {
        success,
        message: text.into(),
    };
    (status, Json(body))
}

pub fn success() -> impl IntoResponse {
    message(true, SUCCESS_MESSAGE, StatusCode::OK)
}

pub fn schedule(events: Vec<EventView>) -> impl IntoResponse {
    (StatusCode::OK, Json(ScheduleResponse { schedule: events }))
}
