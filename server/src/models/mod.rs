pub mod participant;
pub mod scheme;

pub use participant::{NewParticipant, Participant};
pub use scheme::{NewScheme, Scheme};
