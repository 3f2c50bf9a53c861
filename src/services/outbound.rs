//! Builders for the three message shapes the WhatsApp Cloud API accepts.
//!
//! These are pure: no state, no I/O. The transport layer wraps the
//! payload with `messaging_product` and the recipient before sending.

use serde::Serialize;

/// Platform caps. Titles and descriptions are cut by character count:
/// doctor names and menu labels can carry emoji, and a byte cut could
/// split one in half.
const MAX_BUTTONS: usize = 3;
const BUTTON_TITLE_MAX: usize = 20;
const LIST_TITLE_MAX: usize = 24;
const LIST_DESCRIPTION_MAX: usize = 72;

/// All list rows render under one fixed section.
const LIST_SECTION_TITLE: &str = "Options";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessagePayload {
    Text { text: TextBody },
    Interactive { interactive: Interactive },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBody {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Interactive {
    Button { body: BodyText, action: ButtonAction },
    List { body: BodyText, action: ListAction },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonAction {
    pub buttons: Vec<ButtonItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub reply: ReplyButton,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyButton {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListAction {
    pub button: String,
    pub sections: Vec<ListSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// A reply-button choice before platform shaping.
#[derive(Debug, Clone)]
pub struct ButtonOption {
    pub id: String,
    pub title: String,
}

impl ButtonOption {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// A list-row choice before platform shaping.
#[derive(Debug, Clone)]
pub struct ListOption {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl ListOption {
    pub fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn text(body: impl Into<String>) -> MessagePayload {
    MessagePayload::Text {
        text: TextBody { body: body.into() },
    }
}

/// Button menu. The platform allows at most 3 buttons with 20-character
/// titles; extras are dropped and long titles cut.
pub fn buttons(body: impl Into<String>, options: Vec<ButtonOption>) -> MessagePayload {
    let buttons = options
        .into_iter()
        .take(MAX_BUTTONS)
        .map(|option| ButtonItem {
            item_type: "reply".to_string(),
            reply: ReplyButton {
                id: option.id,
                title: truncate_chars(&option.title, BUTTON_TITLE_MAX),
            },
        })
        .collect();

    MessagePayload::Interactive {
        interactive: Interactive::Button {
            body: BodyText { text: body.into() },
            action: ButtonAction { buttons },
        },
    }
}

/// List menu under a single fixed section. Row titles are capped at 24
/// characters and descriptions at 72.
pub fn list(
    body: impl Into<String>,
    button_label: impl Into<String>,
    options: Vec<ListOption>,
) -> MessagePayload {
    let rows = options
        .into_iter()
        .map(|option| ListRow {
            id: option.id,
            title: truncate_chars(&option.title, LIST_TITLE_MAX),
            description: truncate_chars(&option.description, LIST_DESCRIPTION_MAX),
        })
        .collect();

    MessagePayload::Interactive {
        interactive: Interactive::List {
            body: BodyText { text: body.into() },
            action: ListAction {
                button: button_label.into(),
                sections: vec![ListSection {
                    title: LIST_SECTION_TITLE.to_string(),
                    rows,
                }],
            },
        },
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_payload_wire_shape() {
        let payload = text("hello there");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"type": "text", "text": {"body": "hello there"}})
        );
    }

    #[test]
    fn button_payload_wire_shape() {
        let payload = buttons(
            "Choose:",
            vec![ButtonOption::new("btn_book", "Book Appointment")],
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "interactive",
                "interactive": {
                    "type": "button",
                    "body": {"text": "Choose:"},
                    "action": {
                        "buttons": [
                            {"type": "reply", "reply": {"id": "btn_book", "title": "Book Appointment"}}
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn list_payload_wire_shape() {
        let payload = list(
            "Pick a doctor:",
            "Select Doctor",
            vec![ListOption::new("dr_general", "Dr. Meera Nair", "General Physician")],
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "interactive",
                "interactive": {
                    "type": "list",
                    "body": {"text": "Pick a doctor:"},
                    "action": {
                        "button": "Select Doctor",
                        "sections": [{
                            "title": "Options",
                            "rows": [{
                                "id": "dr_general",
                                "title": "Dr. Meera Nair",
                                "description": "General Physician"
                            }]
                        }]
                    }
                }
            })
        );
    }

    #[test]
    fn button_titles_truncate_to_twenty_chars() {
        let long = "a".repeat(30);
        let payload = buttons("b", vec![ButtonOption::new("id", &long)]);
        let MessagePayload::Interactive {
            interactive: Interactive::Button { action, .. },
        } = payload
        else {
            panic!("expected button payload");
        };
        assert_eq!(action.buttons[0].reply.title.chars().count(), 20);
    }

    #[test]
    fn at_most_three_buttons_survive() {
        let options = (0..5)
            .map(|i| ButtonOption::new(&format!("id{i}"), &format!("title{i}")))
            .collect();
        let MessagePayload::Interactive {
            interactive: Interactive::Button { action, .. },
        } = buttons("b", options)
        else {
            panic!("expected button payload");
        };
        assert_eq!(action.buttons.len(), 3);
        assert_eq!(action.buttons[2].reply.id, "id2");
    }

    #[test]
    fn list_rows_truncate_title_and_description() {
        let payload = list(
            "b",
            "label",
            vec![ListOption::new("id", &"t".repeat(40), &"d".repeat(100))],
        );
        let MessagePayload::Interactive {
            interactive: Interactive::List { action, .. },
        } = payload
        else {
            panic!("expected list payload");
        };
        let row = &action.sections[0].rows[0];
        assert_eq!(row.title.chars().count(), 24);
        assert_eq!(row.description.chars().count(), 72);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Each tooth is one char but several bytes; a byte cut would panic
        // or mangle the title.
        let toothy = "🦷".repeat(25);
        let payload = buttons("b", vec![ButtonOption::new("id", &toothy)]);
        let MessagePayload::Interactive {
            interactive: Interactive::Button { action, .. },
        } = payload
        else {
            panic!("expected button payload");
        };
        assert_eq!(action.buttons[0].reply.title.chars().count(), 20);
    }

    #[test]
    fn builders_are_referentially_transparent() {
        let a = list("body", "label", vec![ListOption::new("i", "t", "d")]);
        let b = list("body", "label", vec![ListOption::new("i", "t", "d")]);
        assert_eq!(a, b);
    }
}
