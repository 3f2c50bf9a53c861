/// Where a user currently is in the conversation.
///
/// `SelectDoctorAvail` is entered after the availability view but has no
/// transitions of its own; any input there falls back to a reset. That
/// dead end is intentional and must stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Start,
    SelectDoctorBook,
    EnterName,
    SelectDoctorAvail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub step: Step,
    pub selected_doctor_id: Option<String>,
}

impl Session {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            step: Step::Start,
            selected_doctor_id: None,
        }
    }

    /// Back to the main menu, dropping any in-progress selection.
    pub fn reset(&mut self) {
        self.step = Step::Start;
        self.selected_doctor_id = None;
    }
}
