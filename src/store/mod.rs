pub mod appointments;
pub mod clinics;
pub mod doctors;
pub mod sessions;

pub use appointments::AppointmentLog;
pub use clinics::ClinicDirectory;
pub use doctors::DoctorRegistry;
pub use sessions::SessionStore;
