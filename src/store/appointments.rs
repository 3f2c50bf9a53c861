use std::sync::Mutex;

use crate::models::Appointment;

/// Append-only booking log. Nothing ever edits or removes an entry.
pub struct AppointmentLog {
    inner: Mutex<Vec<Appointment>>,
}

impl AppointmentLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn append(&self, appointment: Appointment) {
        self.inner.lock().unwrap().push(appointment);
    }

    /// All appointments in booking order (oldest first).
    pub fn list(&self) -> Vec<Appointment> {
        self.inner.lock().unwrap().clone()
    }
}

impl Default for AppointmentLog {
    fn default() -> Self {
        Self::new()
    }
}
