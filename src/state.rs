use crate::config::AppConfig;
use crate::services::messaging::MessagingProvider;
use crate::store::{AppointmentLog, ClinicDirectory, DoctorRegistry, SessionStore};

pub struct AppState {
    pub config: AppConfig,
    pub clinics: ClinicDirectory,
    pub doctors: DoctorRegistry,
    pub sessions: SessionStore,
    pub appointments: AppointmentLog,
    pub messaging: Box<dyn MessagingProvider>,
}
