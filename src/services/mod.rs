pub mod dialog;
pub mod messaging;
pub mod normalizer;
pub mod outbound;
