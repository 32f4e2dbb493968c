//! Management API used by the admin tool.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::info;

use crate::models::{Event, EventDetails, EventView, Privilege};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{schedule, success};

const API_DATE_FORMAT: &str = "%Y-%m-%d";
const API_TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub event_name: String,
    pub event_desc: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    #[serde(default)]
    pub event_type: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditEventRequest {
    pub event_name: String,
    pub date: String,
    pub event_desc: String,
    pub time: String,
    pub venue: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveEventQuery {
    #[serde(rename = "eventName", alias = "name")]
    pub event_name: String,
    pub date: String,
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), API_DATE_FORMAT)
        .map_err(|e| AppError::ValidationError(format!("invalid date '{}': {}", raw, e)))
}

fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    API_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw.trim(), format).ok())
        .ok_or_else(|| AppError::ValidationError(format!("invalid time '{}'", raw)))
}

fn require_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::ValidationError("eventName is empty".to_string()));
    }
    Ok(name.to_string())
}

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let event_type = Privilege::from_level(request.event_type)
        .ok_or_else(|| {
            AppError::ValidationError(format!("invalid eventType {}", request.event_type))
        })?
        .level();
    let event = Event {
        name: require_name(&request.event_name)?,
        date: parse_date(&request.date)?,
        description: request.event_desc,
        time: parse_time(&request.time)?,
        venue: request.venue,
        event_type,
    };

    state.store.create(&event).await?;
    info!(name = %event.name, date = %event.date, "Event created");

    Ok(success())
}

pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = state.store.get_all().await?;
    Ok(schedule(events.into_iter().map(EventView::from).collect()))
}

pub async fn edit_event(
    State(state): State<AppState>,
    payload: Result<Json<EditEventRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let name = require_name(&request.event_name)?;
    let date = parse_date(&request.date)?;
    let details = EventDetails {
        description: request.event_desc,
        time: parse_time(&request.time)?,
        venue: request.venue,
    };

    state.store.update(&name, date, &details).await?;
    info!(name = %name, date = %date, "Event edited");

    Ok(success())
}

pub async fn remove_event(
    State(state): State<AppState>,
    query: Result<Query<RemoveEventQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let name = require_name(&query.event_name)?;
    let date = parse_date(&query.date)?;

    state.store.delete(&name, date).await?;
    info!(name = %name, date = %date, "Event removed");

    Ok(success())
}
