//! Collapses the webhook message shapes into [`InboundMessage`].
//!
//! The dialog engine never sees platform JSON; everything funnels
//! through here first.

use crate::models::webhook::WebhookMessage;
use crate::models::InboundMessage;

/// Maps one raw webhook message to its normalized form.
///
/// Interactive replies win over any text the payload also carries:
/// button replies first, then list replies, then plain text. Anything
/// else (media, location, stickers) is [`InboundMessage::Unsupported`].
pub fn from_webhook(message: &WebhookMessage) -> InboundMessage {
    if let Some(interactive) = &message.interactive {
        if let Some(reply) = &interactive.button_reply {
            return InboundMessage::ButtonReply {
                id: reply.id.clone(),
            };
        }
        if let Some(reply) = &interactive.list_reply {
            return InboundMessage::ListReply {
                id: reply.id.clone(),
            };
        }
    }

    if let Some(text) = &message.text {
        if let Some(body) = &text.body {
            return InboundMessage::Text { body: body.clone() };
        }
    }

    InboundMessage::Unsupported
}

/// The single token the dialog engine matches on: the reply id for
/// structured input, trimmed body text otherwise. Unsupported input
/// yields an empty token, which matches nothing.
pub fn input_token(message: &InboundMessage) -> String {
    match message {
        InboundMessage::Text { body } => body.trim().to_string(),
        InboundMessage::ButtonReply { id } | InboundMessage::ListReply { id } => id.clone(),
        InboundMessage::Unsupported => String::new(),
    }
}
