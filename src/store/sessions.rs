use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Session;

/// Conversation state per (clinic, user), held for the process lifetime.
///
/// `update` runs the whole read-modify-write under the map lock: the
/// dialog transition is synchronous, so holding the lock across it is
/// cheap and keeps two concurrent messages from the same user from
/// interleaving. Lock order is sessions → doctors → appointments; the
/// stores on the right never reach back into this one.
pub struct SessionStore {
    inner: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Get-or-create: first contact lands a fresh session at `Start`.
    pub fn get(&self, clinic_id: &str, user_id: &str) -> Session {
        let mut sessions = self.inner.lock().unwrap();
        sessions
            .entry(key(clinic_id, user_id))
            .or_insert_with(|| Session::new(user_id))
            .clone()
    }

    pub fn set(&self, clinic_id: &str, user_id: &str, session: Session) {
        self.inner
            .lock()
            .unwrap()
            .insert(key(clinic_id, user_id), session);
    }

    /// Atomic read-modify-write for one user's session.
    pub fn update<R>(
        &self,
        clinic_id: &str,
        user_id: &str,
        f: impl FnOnce(&mut Session) -> R,
    ) -> R {
        let mut sessions = self.inner.lock().unwrap();
        let session = sessions
            .entry(key(clinic_id, user_id))
            .or_insert_with(|| Session::new(user_id));
        f(session)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn key(clinic_id: &str, user_id: &str) -> String {
    format!("{clinic_id}:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    #[test]
    fn get_creates_fresh_session_at_start() {
        let store = SessionStore::new();
        let session = store.get("pnid_1", "15550001111");
        assert_eq!(session.step, Step::Start);
        assert!(session.selected_doctor_id.is_none());
        assert_eq!(session.user_id, "15550001111");
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SessionStore::new();
        let mut session = store.get("pnid_1", "u1");
        session.step = Step::EnterName;
        session.selected_doctor_id = Some("dr_general".into());
        store.set("pnid_1", "u1", session.clone());
        assert_eq!(store.get("pnid_1", "u1"), session);
    }

    #[test]
    fn sessions_are_scoped_per_clinic() {
        let store = SessionStore::new();
        let mut session = store.get("pnid_1", "u1");
        session.step = Step::EnterName;
        store.set("pnid_1", "u1", session);
        // Same user against another clinic starts fresh.
        assert_eq!(store.get("pnid_2", "u1").step, Step::Start);
    }

    #[test]
    fn update_mutates_in_place() {
        let store = SessionStore::new();
        store.update("pnid_1", "u1", |s| s.step = Step::SelectDoctorBook);
        assert_eq!(store.get("pnid_1", "u1").step, Step::SelectDoctorBook);
    }
}
