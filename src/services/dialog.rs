use crate::models::{Appointment, Clinic, Doctor, InboundMessage, Session, Step};
use crate::services::normalizer;
use crate::services::outbound::{self, ButtonOption, ListOption, MessagePayload};
use crate::state::AppState;
use crate::store::{AppointmentLog, DoctorRegistry};

pub const BTN_BOOK: &str = "btn_book";
pub const BTN_STATUS: &str = "btn_status";
pub const BTN_AVAIL: &str = "btn_avail";

/// Menu buttons that should land the user back on the welcome menu
/// reply with the greeting token, so the global override handles them.
const MAIN_MENU_ID: &str = "hi";

/// Exact-match escape hatch, deliberately case-sensitive so the word
/// "reset" can still appear in a patient name.
const RESET_TOKEN: &str = "RESET";

/// Runs one inbound message through the dialog machine and returns the
/// replies to deliver, in order.
///
/// The whole turn executes under the session lock: greeting override,
/// transition, token issue, appointment append. Every mutation is
/// committed before the caller delivers anything, so a failed send can
/// lose a confirmation text but never a booking.
pub fn process_message(
    state: &AppState,
    clinic: &Clinic,
    from: &str,
    message: &InboundMessage,
) -> Vec<MessagePayload> {
    let input = normalizer::input_token(message);
    let is_text = message.is_text();
    let ctx = TurnContext {
        doctors: &state.doctors,
        appointments: &state.appointments,
        clinic,
        user: from,
    };

    state.sessions.update(&clinic.phone_number_id, from, |session| {
        tracing::info!(
            user = from,
            clinic = %clinic.phone_number_id,
            step = ?session.step,
            input = %input,
            "processing message"
        );

        if is_greeting_or_reset(&input) {
            session.reset();
            return vec![welcome_menu(&clinic.name)];
        }

        transition(session, &input, is_text, &ctx)
    })
}

struct TurnContext<'a> {
    doctors: &'a DoctorRegistry,
    appointments: &'a AppointmentLog,
    clinic: &'a Clinic,
    user: &'a str,
}

fn transition(
    session: &mut Session,
    input: &str,
    is_text: bool,
    ctx: &TurnContext,
) -> Vec<MessagePayload> {
    match session.step {
        Step::Start => match input {
            BTN_BOOK => {
                let doctors = ctx.doctors.list();
                if doctors.is_empty() {
                    return vec![outbound::text(
                        "No doctors are available right now. Please check back later.",
                    )];
                }
                session.step = Step::SelectDoctorBook;
                vec![doctor_list_menu(&doctors)]
            }
            BTN_STATUS => {
                vec![queue_status_text(&ctx.doctors.list()), next_steps_menu()]
            }
            BTN_AVAIL => {
                session.step = Step::SelectDoctorAvail;
                vec![availability_text(&ctx.doctors.list()), next_steps_menu()]
            }
            _ => vec![outbound::text(
                "Sorry, I didn't understand that. Send \"Hi\" to see the menu.",
            )],
        },

        Step::SelectDoctorBook => match ctx.doctors.find(input) {
            Some(doctor) => {
                session.selected_doctor_id = Some(doctor.id.clone());
                session.step = Step::EnterName;
                vec![outbound::text(format!(
                    "You picked {}. Please reply with the patient's full name.",
                    doctor.name
                ))]
            }
            None => vec![outbound::text(
                "That's not one of the listed doctors. Please pick a doctor from the list.",
            )],
        },

        Step::EnterName => {
            if !is_text || input.is_empty() {
                return vec![outbound::text(
                    "Please type the patient's name as a text message.",
                )];
            }
            book_appointment(session, input, ctx)
        }

        // Availability browsing has no follow-up flow; any reply here
        // falls back to the main menu.
        Step::SelectDoctorAvail => fallback(session),
    }
}

fn book_appointment(
    session: &mut Session,
    patient_name: &str,
    ctx: &TurnContext,
) -> Vec<MessagePayload> {
    let Some(doctor_id) = session.selected_doctor_id.clone() else {
        return fallback(session);
    };
    let Some((doctor, token)) = ctx.doctors.issue_token(&doctor_id) else {
        tracing::warn!(doctor = %doctor_id, "selected doctor missing from registry");
        return fallback(session);
    };

    let appointment = Appointment::new(
        ctx.user,
        &doctor.id,
        patient_name,
        token,
        &ctx.clinic.phone_number_id,
    );
    ctx.appointments.append(appointment);
    session.reset();

    tracing::info!(
        user = ctx.user,
        doctor = %doctor.id,
        token,
        "appointment booked"
    );

    vec![
        outbound::text(format!(
            "✅ Appointment booked!\n\nPatient: {patient_name}\nDoctor: {} ({})\nYour token number: {token}\nNow serving: {}",
            doctor.name, doctor.specialization, doctor.currently_serving
        )),
        main_menu_prompt(),
    ]
}

fn fallback(session: &mut Session) -> Vec<MessagePayload> {
    session.reset();
    vec![outbound::buttons(
        "Let's start over.",
        vec![ButtonOption::new(MAIN_MENU_ID, "🏠 Main Menu")],
    )]
}

fn is_greeting_or_reset(input: &str) -> bool {
    input.eq_ignore_ascii_case("hi") || input.eq_ignore_ascii_case("hello") || input == RESET_TOKEN
}

pub fn welcome_menu(clinic_name: &str) -> MessagePayload {
    outbound::buttons(
        format!("👋 Welcome to {clinic_name}\nPlease choose an option:"),
        vec![
            ButtonOption::new(BTN_BOOK, "📅 Book Appointment"),
            ButtonOption::new(BTN_STATUS, "🎫 Check Token Status"),
            ButtonOption::new(BTN_AVAIL, "🩺 Check Availability"),
        ],
    )
}

fn doctor_list_menu(doctors: &[Doctor]) -> MessagePayload {
    let options = doctors
        .iter()
        .map(|doctor| ListOption::new(&doctor.id, &doctor.name, &doctor.specialization))
        .collect();
    outbound::list(
        "Please choose a doctor for your appointment:",
        "Select Doctor",
        options,
    )
}

fn queue_status_text(doctors: &[Doctor]) -> MessagePayload {
    let mut body = String::from("📊 Current queue status:\n");
    for doctor in doctors {
        body.push_str(&format!(
            "\n{} ({})\nTokens issued: {} | Now serving: {}\n",
            doctor.name, doctor.specialization, doctor.tokens_issued_today, doctor.currently_serving
        ));
    }
    outbound::text(body)
}

fn availability_text(doctors: &[Doctor]) -> MessagePayload {
    let mut body = String::from("🗓 Today's availability:\n");
    for doctor in doctors {
        let status = if doctor.is_available() {
            "✅ available"
        } else {
            "❌ full"
        };
        body.push_str(&format!(
            "\n{} ({}): {}",
            doctor.name, doctor.specialization, status
        ));
    }
    outbound::text(body)
}

fn next_steps_menu() -> MessagePayload {
    outbound::buttons(
        "What would you like to do next?",
        vec![
            ButtonOption::new(BTN_BOOK, "📅 Book Appointment"),
            ButtonOption::new(MAIN_MENU_ID, "🏠 Main Menu"),
        ],
    )
}

fn main_menu_prompt() -> MessagePayload {
    outbound::buttons(
        "Is there anything else I can help you with?",
        vec![ButtonOption::new(MAIN_MENU_ID, "🏠 Main Menu")],
    )
}
