use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{MessagingProvider, SendError, SendOutcome};
use crate::models::Clinic;
use crate::services::outbound::MessagePayload;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v18.0";

/// Delivers messages through the WhatsApp Cloud API.
///
/// Credentials live on the [`Clinic`], not here: one provider serves
/// every tenant, posting to each clinic's own phone-number endpoint
/// with that clinic's token.
pub struct WhatsAppProvider {
    client: reqwest::Client,
    timeout: Duration,
}

impl WhatsAppProvider {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[derive(Serialize)]
struct OutboundRequest<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(flatten)]
    payload: &'a MessagePayload,
}

#[async_trait]
impl MessagingProvider for WhatsAppProvider {
    async fn send_message(
        &self,
        clinic: &Clinic,
        to: &str,
        payload: &MessagePayload,
    ) -> SendOutcome {
        if clinic.whatsapp_token.is_empty() || clinic.phone_number_id.is_empty() {
            return SendOutcome::Failed(SendError::MissingCredentials);
        }

        let url = format!("{GRAPH_API_BASE}/{}/messages", clinic.phone_number_id);
        let request = OutboundRequest {
            messaging_product: "whatsapp",
            to,
            payload,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&clinic.whatsapp_token)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await;

        match response {
            Ok(res) if res.status().is_success() => SendOutcome::Sent,
            Ok(res) => SendOutcome::Failed(SendError::Platform(res.status().as_u16())),
            Err(err) if err.is_timeout() => SendOutcome::Failed(SendError::Timeout),
            Err(err) => SendOutcome::Failed(SendError::Request(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::outbound;
    use serde_json::json;

    #[tokio::test]
    async fn refuses_to_send_without_a_token() {
        let provider = WhatsAppProvider::new(Duration::from_secs(1));
        let clinic = Clinic::new("ABC Clinic", "15550009999", "phone_id_1", "");
        let outcome = provider
            .send_message(&clinic, "15550001111", &outbound::text("hi"))
            .await;
        assert_eq!(outcome, SendOutcome::Failed(SendError::MissingCredentials));
    }

    #[tokio::test]
    async fn refuses_to_send_without_a_phone_number_id() {
        let provider = WhatsAppProvider::new(Duration::from_secs(1));
        let clinic = Clinic::new("ABC Clinic", "15550009999", "", "token");
        let outcome = provider
            .send_message(&clinic, "15550001111", &outbound::text("hi"))
            .await;
        assert_eq!(outcome, SendOutcome::Failed(SendError::MissingCredentials));
    }

    #[test]
    fn request_body_carries_product_recipient_and_payload() {
        let payload = outbound::text("see you at 9");
        let request = OutboundRequest {
            messaging_product: "whatsapp",
            to: "15550001111",
            payload: &payload,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "messaging_product": "whatsapp",
                "to": "15550001111",
                "type": "text",
                "text": {"body": "see you at 9"}
            })
        );
    }
}
