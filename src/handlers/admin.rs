use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Clinic;
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/doctors
#[derive(Serialize)]
pub struct DoctorStatusResponse {
    id: String,
    name: String,
    specialization: String,
    tokens_issued_today: u32,
    currently_serving: u32,
    available: bool,
}

pub async fn get_doctors(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<DoctorStatusResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let response: Vec<DoctorStatusResponse> = state
        .doctors
        .list()
        .into_iter()
        .map(|d| DoctorStatusResponse {
            available: d.is_available(),
            id: d.id,
            name: d.name,
            specialization: d.specialization,
            tokens_issued_today: d.tokens_issued_today,
            currently_serving: d.currently_serving,
        })
        .collect();

    Ok(Json(response))
}

// GET /api/admin/appointments
#[derive(Deserialize)]
pub struct AppointmentsQuery {
    pub doctor: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    id: String,
    user_id: String,
    doctor_id: String,
    patient_name: String,
    token_number: u32,
    clinic_phone_id: String,
    created_at: String,
}

pub async fn get_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query.limit.unwrap_or(50);
    let doctor_filter = query.doctor.as_deref();

    // Newest first.
    let response: Vec<AppointmentResponse> = state
        .appointments
        .list()
        .into_iter()
        .rev()
        .filter(|a| doctor_filter.map_or(true, |d| a.doctor_id == d))
        .take(limit)
        .map(|a| AppointmentResponse {
            created_at: a.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            id: a.id,
            user_id: a.user_id,
            doctor_id: a.doctor_id,
            patient_name: a.patient_name,
            token_number: a.token_number,
            clinic_phone_id: a.clinic_phone_id,
        })
        .collect();

    Ok(Json(response))
}

// GET /api/admin/clinics
pub async fn get_clinics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Clinic>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    Ok(Json(state.clinics.list()))
}

// POST /api/admin/clinics
#[derive(Deserialize)]
pub struct RegisterClinicRequest {
    pub name: String,
    pub business_phone_number: String,
    pub logo_url: Option<String>,
    pub phone_number_id: String,
    pub whatsapp_token: String,
}

pub async fn register_clinic(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<RegisterClinicRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if body.phone_number_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "phone_number_id is required".to_string(),
        ));
    }
    if body.whatsapp_token.trim().is_empty() {
        return Err(AppError::BadRequest(
            "whatsapp_token is required".to_string(),
        ));
    }

    let mut clinic = Clinic::new(
        &body.name,
        &body.business_phone_number,
        &body.phone_number_id,
        &body.whatsapp_token,
    );
    clinic.logo_url = body.logo_url;

    tracing::info!(
        clinic = %clinic.name,
        phone_number_id = %clinic.phone_number_id,
        "clinic registered"
    );
    state.clinics.register(clinic);

    Ok(Json(serde_json::json!({"ok": true})))
}
