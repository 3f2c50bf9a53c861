pub mod appointment;
pub mod clinic;
pub mod doctor;
pub mod inbound;
pub mod session;
pub mod webhook;

pub use appointment::Appointment;
pub use clinic::Clinic;
pub use doctor::{Doctor, DAILY_TOKEN_LIMIT};
pub use inbound::InboundMessage;
pub use session::{Session, Step};
