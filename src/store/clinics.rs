use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Clinic;

/// Registered tenants, keyed by the WhatsApp `phone_number_id` that
/// shows up in webhook metadata. Registering the same id again replaces
/// the earlier credentials.
pub struct ClinicDirectory {
    inner: Mutex<HashMap<String, Clinic>>,
}

impl ClinicDirectory {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    pub fn register(&self, clinic: Clinic) {
        self.inner
            .lock()
            .unwrap()
            .insert(clinic.phone_number_id.clone(), clinic);
    }

    pub fn resolve(&self, phone_number_id: &str) -> Option<Clinic> {
        self.inner.lock().unwrap().get(phone_number_id).cloned()
    }

    /// Sorted by name so the listing is stable across calls.
    pub fn list(&self) -> Vec<Clinic> {
        let mut clinics: Vec<Clinic> = self.inner.lock().unwrap().values().cloned().collect();
        clinics.sort_by(|a, b| a.name.cmp(&b.name));
        clinics
    }
}

impl Default for ClinicDirectory {
    fn default() -> Self {
        Self::new()
    }
}
