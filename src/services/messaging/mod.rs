pub mod whatsapp;

use async_trait::async_trait;

use crate::models::Clinic;
use crate::services::outbound::MessagePayload;

/// Result of one delivery attempt.
///
/// Failures are data, not panics: by the time anything is sent the
/// booking state is already committed, so the caller records the
/// failure and keeps going.
#[derive(Debug, PartialEq)]
pub enum SendOutcome {
    Sent,
    Failed(SendError),
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SendError {
    #[error("clinic has no messaging credentials configured")]
    MissingCredentials,
    #[error("send timed out")]
    Timeout,
    #[error("send failed: {0}")]
    Request(String),
    #[error("platform rejected the message with status {0}")]
    Platform(u16),
}

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(
        &self,
        clinic: &Clinic,
        to: &str,
        payload: &MessagePayload,
    ) -> SendOutcome;
}
