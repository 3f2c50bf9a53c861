use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::models::webhook::{WebhookEnvelope, WebhookMessage};
use crate::services::messaging::SendOutcome;
use crate::services::{dialog, normalizer};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

// GET /webhook, the platform subscription handshake: echo the
// challenge back when the verify token matches.
pub async fn verify_webhook(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyParams>,
) -> Response {
    let mode_ok = params.mode.as_deref() == Some("subscribe");
    let token_ok = params.verify_token.as_deref() == Some(state.config.verify_token.as_str());

    if mode_ok && token_ok {
        tracing::info!("webhook verified");
        return (StatusCode::OK, params.challenge.unwrap_or_default()).into_response();
    }

    tracing::warn!("webhook verification failed");
    StatusCode::FORBIDDEN.into_response()
}

fn validate_meta_signature(app_secret: &str, signature: &str, body: &[u8]) -> bool {
    // Header format: "sha256=<hex digest of the raw body>"
    let Some(received) = signature.strip_prefix("sha256=") else {
        return false;
    };

    let mut mac = match Hmac::<Sha256>::new_from_slice(app_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body);
    let expected = hex_digest(&mac.finalize().into_bytes());

    expected == received
}

fn hex_digest(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Walks the envelope for the first real message. Status-only
/// deliveries (sent/delivered/read receipts) have no `messages` and
/// fall through to `None`.
fn first_message(envelope: &WebhookEnvelope) -> Option<(String, &WebhookMessage)> {
    for entry in &envelope.entry {
        for change in &entry.changes {
            let Some(value) = &change.value else { continue };
            let Some(message) = value.messages.first() else {
                continue;
            };
            let phone_number_id = value
                .metadata
                .as_ref()
                .and_then(|m| m.phone_number_id.clone())
                .unwrap_or_default();
            return Some((phone_number_id, message));
        }
    }
    None
}

// POST /webhook, one inbound message per delivery. Always answers
// 200: the platform retries non-2xx responses, and a retried message
// would replay dialog transitions.
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Validate the platform signature; an empty app secret skips the
    // check (dev mode).
    if !state.config.app_secret.is_empty() {
        let signature = headers
            .get("x-hub-signature-256")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if signature.is_empty() {
            tracing::warn!("missing X-Hub-Signature-256 header");
            return (StatusCode::FORBIDDEN, "Missing signature").into_response();
        }

        if !validate_meta_signature(&state.config.app_secret, signature, &body) {
            tracing::warn!("invalid webhook signature");
            return (StatusCode::FORBIDDEN, "Invalid signature").into_response();
        }
    }

    let envelope: WebhookEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable webhook body, acking anyway");
            return StatusCode::OK.into_response();
        }
    };

    let Some((phone_number_id, message)) = first_message(&envelope) else {
        return StatusCode::OK.into_response();
    };

    let Some(from) = message.from.clone() else {
        return StatusCode::OK.into_response();
    };

    tracing::info!(from = %from, phone_number_id = %phone_number_id, "incoming message");

    let Some(clinic) = state.clinics.resolve(&phone_number_id) else {
        tracing::warn!(phone_number_id = %phone_number_id, "message for unregistered clinic, dropping");
        return StatusCode::OK.into_response();
    };

    let inbound = normalizer::from_webhook(message);
    let replies = dialog::process_message(&state, &clinic, &from, &inbound);

    // State is committed by now; a failed send loses at most the
    // user-visible copy of it.
    for payload in &replies {
        match state.messaging.send_message(&clinic, &from, payload).await {
            SendOutcome::Sent => {}
            SendOutcome::Failed(err) => {
                tracing::error!(error = %err, to = %from, "failed to deliver reply");
            }
        }
    }

    StatusCode::OK.into_response()
}
