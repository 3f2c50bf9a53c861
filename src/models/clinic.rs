use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

/// A tenant: one clinic with its own WhatsApp number and credentials.
/// Inbound traffic is matched to a clinic by `phone_number_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Clinic {
    pub name: String,
    pub business_phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub phone_number_id: String,
    #[serde(skip_serializing)]
    pub whatsapp_token: String,
    pub created_at: NaiveDateTime,
}

impl Clinic {
    pub fn new(
        name: &str,
        business_phone_number: &str,
        phone_number_id: &str,
        whatsapp_token: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            business_phone_number: business_phone_number.to_string(),
            logo_url: None,
            phone_number_id: phone_number_id.to_string(),
            whatsapp_token: whatsapp_token.to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
