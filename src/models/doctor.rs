use serde::{Deserialize, Serialize};

/// Soft ceiling used by the availability view. Booking never refuses a
/// token; a doctor past this count simply shows as "full".
pub const DAILY_TOKEN_LIMIT: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub tokens_issued_today: u32,
    #[serde(default)]
    pub currently_serving: u32,
}

impl Doctor {
    pub fn new(id: &str, name: &str, specialization: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialization: specialization.to_string(),
            tokens_issued_today: 0,
            currently_serving: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.tokens_issued_today < DAILY_TOKEN_LIMIT
    }
}
