//! Inbound chat webhook. Always answers 200 with an empty body so the chat
//! platform never redelivers an update that may already have mutated state.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::bot::{OutboundMessage, Update};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WebhookQuery {
    pub token: Option<String>,
}

pub async fn telegram_webhook(
    State(state): State<AppState>,
    query: Result<Query<WebhookQuery>, QueryRejection>,
    body: Bytes,
) -> StatusCode {
    let token = query.ok().and_then(|Query(query)| query.token);
    if token.as_deref() != Some(state.config.webhook_secret.as_str()) {
        debug!("Webhook call with missing or wrong secret ignored");
        return StatusCode::OK;
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "Unreadable webhook payload");
            return StatusCode::OK;
        }
    };

    let Some((chat_id, text)) = update.text_message() else {
        debug!(update_id = update.update_id, "Update without text ignored");
        return StatusCode::OK;
    };

    let Some(reply) = state.commands.handle(chat_id, text).await else {
        return StatusCode::OK;
    };

    let message = OutboundMessage::new(chat_id, reply.text, reply.rich_text);
    if let Err(e) = state.notifier.send(&message).await {
        warn!(chat_id, update_id = update.update_id, error = %e, "Reply not delivered");
    }

    StatusCode::OK
}
