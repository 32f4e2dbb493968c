use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{
    create_event, edit_event, health_check, list_events, remove_event, telegram_webhook,
};
use crate::state::AppState;

pub const WEBHOOK_PATH: &str = "/bot/webhook";

pub fn create_routes(state: AppState) -> Router {
    let security = create_security_headers_layer(state.config.production);
    let cors = create_cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/health", get(health_check))
        .route("/events", get(list_events))
        .route("/events/create", post(create_event))
        .route("/events/edit", put(edit_event))
        .route("/events/remove", delete(remove_event))
        .route(WEBHOOK_PATH, post(telegram_webhook))
        .layer(TraceLayer::new_for_http())
        .layer(security)
        .layer(cors)
        .with_state(state)
}
