use axum::Json;
use serde::Serialize;

pub mod events;
pub mod webhook;

pub use events::{create_event, edit_event, list_events, remove_event};
pub use webhook::telegram_webhook;

#[derive(Serialize)]
pub struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "ok",
        service: "club-bulletin",
    })
}
