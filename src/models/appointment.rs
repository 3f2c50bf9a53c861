use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

/// One completed booking. Records are append-only; nothing in the bot
/// ever edits or deletes them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub doctor_id: String,
    pub patient_name: String,
    pub token_number: u32,
    pub clinic_phone_id: String,
    pub created_at: NaiveDateTime,
}

impl Appointment {
    pub fn new(
        user_id: &str,
        doctor_id: &str,
        patient_name: &str,
        token_number: u32,
        clinic_phone_id: &str,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            doctor_id: doctor_id.to_string(),
            patient_name: patient_name.to_string(),
            token_number,
            clinic_phone_id: clinic_phone_id.to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
