use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinicbot::config::AppConfig;
use clinicbot::handlers;
use clinicbot::models::Clinic;
use clinicbot::services::messaging::whatsapp::WhatsAppProvider;
use clinicbot::state::AppState;
use clinicbot::store::{self, AppointmentLog, ClinicDirectory, DoctorRegistry, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let seed = if config.clinic_doctors.is_empty() {
        store::doctors::default_seed()
    } else {
        store::doctors::seed_from_json(&config.clinic_doctors)?
    };
    tracing::info!(doctors = seed.len(), "doctor registry seeded");

    let clinics = ClinicDirectory::new();
    if config.phone_number_id.is_empty() {
        tracing::warn!("PHONE_NUMBER_ID not set; register clinics via POST /api/admin/clinics");
    } else {
        clinics.register(Clinic::new(
            &config.clinic_name,
            &config.business_phone_number,
            &config.phone_number_id,
            &config.whatsapp_token,
        ));
        tracing::info!(clinic = %config.clinic_name, "default clinic registered from env");
    }

    let messaging = WhatsAppProvider::new(Duration::from_secs(config.send_timeout_secs));

    let state = Arc::new(AppState {
        config: config.clone(),
        clinics,
        doctors: DoctorRegistry::new(seed),
        sessions: SessionStore::new(),
        appointments: AppointmentLog::new(),
        messaging: Box::new(messaging),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/webhook", get(handlers::webhook::verify_webhook))
        .route("/webhook", post(handlers::webhook::receive_webhook))
        .route("/api/admin/doctors", get(handlers::admin::get_doctors))
        .route(
            "/api/admin/appointments",
            get(handlers::admin::get_appointments),
        )
        .route("/api/admin/clinics", get(handlers::admin::get_clinics))
        .route("/api/admin/clinics", post(handlers::admin::register_clinic))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
