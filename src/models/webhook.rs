use serde::Deserialize;

/// WhatsApp Cloud API webhook body. Every level is optional or may be
/// empty: status-only deliveries (sent/read receipts) carry no
/// `messages` at all, and Meta adds fields freely, so everything beyond
/// what we read is ignored.
#[derive(Debug, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub changes: Vec<WebhookChange>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookChange {
    pub value: Option<ChangeValue>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeValue {
    pub metadata: Option<ChangeMetadata>,
    #[serde(default)]
    pub messages: Vec<WebhookMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeMetadata {
    pub phone_number_id: Option<String>,
}

/// One raw message as delivered. `text` and `interactive` are both
/// optional; which one is present depends on the `type` field, but the
/// normalizer goes by the payloads themselves rather than trusting it.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookMessage {
    pub from: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub text: Option<TextContent>,
    pub interactive: Option<InteractiveContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractiveContent {
    pub button_reply: Option<ReplyRef>,
    pub list_reply: Option<ReplyRef>,
}

/// The reply half of a tapped button or list row. The platform always
/// includes the id of the tapped option.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyRef {
    pub id: String,
    pub title: Option<String>,
}
