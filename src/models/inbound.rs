/// A single inbound user message, already stripped of platform wrapping.
///
/// `Unsupported` covers everything the dialog cannot act on (images,
/// stickers, reactions, location pins); it normalizes to an empty input
/// token and gets the unrecognized-input treatment.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    Text { body: String },
    ButtonReply { id: String },
    ListReply { id: String },
    Unsupported,
}

impl InboundMessage {
    /// True only for free-form text. The name-entry step insists on this;
    /// a tapped button is never a patient name.
    pub fn is_text(&self) -> bool {
        matches!(self, InboundMessage::Text { .. })
    }
}
