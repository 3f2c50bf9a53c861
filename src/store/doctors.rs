use std::sync::Mutex;

use anyhow::Context;

use crate::models::Doctor;

/// Shared doctor roster with the per-doctor token counters.
///
/// The roster is seeded once at startup and its order is stable; menus
/// render doctors in exactly this order. `issue_token` is the only
/// mutation and runs as a single read-modify-write under the lock, so
/// two concurrent bookings can never observe the same counter value.
pub struct DoctorRegistry {
    inner: Mutex<Vec<Doctor>>,
}

impl DoctorRegistry {
    pub fn new(seed: Vec<Doctor>) -> Self {
        Self {
            inner: Mutex::new(seed),
        }
    }

    /// All doctors in seed order.
    pub fn list(&self) -> Vec<Doctor> {
        self.inner.lock().unwrap().clone()
    }

    pub fn find(&self, id: &str) -> Option<Doctor> {
        self.inner.lock().unwrap().iter().find(|d| d.id == id).cloned()
    }

    /// Issue the next queue token for a doctor. Returns the updated
    /// doctor snapshot together with the issued token number, or `None`
    /// when the id is unknown. The counter only ever goes up.
    pub fn issue_token(&self, id: &str) -> Option<(Doctor, u32)> {
        let mut doctors = self.inner.lock().unwrap();
        let doctor = doctors.iter_mut().find(|d| d.id == id)?;
        doctor.tokens_issued_today += 1;
        let token = doctor.tokens_issued_today;
        Some((doctor.clone(), token))
    }
}

/// Roster used when `CLINIC_DOCTORS` is not configured.
pub fn default_seed() -> Vec<Doctor> {
    vec![
        Doctor::new("dr_general", "Dr. Meera Nair", "General Physician"),
        Doctor::new("dr_dental", "Dr. Arjun Shetty", "Dentist"),
        Doctor::new("dr_skin", "Dr. Kavya Menon", "Dermatologist"),
    ]
}

/// Parse a roster out of the `CLINIC_DOCTORS` env var: a JSON array of
/// `{"id", "name", "specialization"}` objects (counters default to 0).
pub fn seed_from_json(raw: &str) -> anyhow::Result<Vec<Doctor>> {
    let doctors: Vec<Doctor> =
        serde_json::from_str(raw).context("CLINIC_DOCTORS is not a valid doctor array")?;
    anyhow::ensure!(!doctors.is_empty(), "CLINIC_DOCTORS must list at least one doctor");
    Ok(doctors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_token_increments_and_returns_new_value() {
        let registry = DoctorRegistry::new(default_seed());
        let (doc, token) = registry.issue_token("dr_general").unwrap();
        assert_eq!(token, 1);
        assert_eq!(doc.tokens_issued_today, 1);
        let (_, token) = registry.issue_token("dr_general").unwrap();
        assert_eq!(token, 2);
    }

    #[test]
    fn issue_token_unknown_doctor_is_none() {
        let registry = DoctorRegistry::new(default_seed());
        assert!(registry.issue_token("dr_nobody").is_none());
        // and nothing moved
        assert!(registry.list().iter().all(|d| d.tokens_issued_today == 0));
    }

    #[test]
    fn list_keeps_seed_order() {
        let registry = DoctorRegistry::new(default_seed());
        let ids: Vec<String> = registry.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["dr_general", "dr_dental", "dr_skin"]);
    }

    #[test]
    fn seed_from_json_parses_roster() {
        let doctors = seed_from_json(
            r#"[{"id":"dr_x","name":"Dr. X","specialization":"Cardiology"}]"#,
        )
        .unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].id, "dr_x");
        assert_eq!(doctors[0].tokens_issued_today, 0);
    }

    #[test]
    fn seed_from_json_rejects_empty() {
        assert!(seed_from_json("[]").is_err());
        assert!(seed_from_json("not json").is_err());
    }
}
