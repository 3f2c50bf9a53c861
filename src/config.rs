use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub verify_token: String,
    // empty = skip webhook signature validation (dev mode)
    pub app_secret: String,
    pub admin_token: String,
    pub clinic_name: String,
    pub business_phone_number: String,
    pub phone_number_id: String,
    pub whatsapp_token: String,
    // JSON array of doctors; empty = built-in seed roster
    pub clinic_doctors: String,
    pub send_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            verify_token: env::var("VERIFY_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            app_secret: env::var("APP_SECRET").unwrap_or_default(),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            clinic_name: env::var("CLINIC_NAME").unwrap_or_else(|_| "ABC Clinic".to_string()),
            business_phone_number: env::var("BUSINESS_PHONE_NUMBER").unwrap_or_default(),
            phone_number_id: env::var("PHONE_NUMBER_ID").unwrap_or_default(),
            whatsapp_token: env::var("WHATSAPP_TOKEN").unwrap_or_default(),
            clinic_doctors: env::var("CLINIC_DOCTORS").unwrap_or_default(),
            send_timeout_secs: env::var("SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
