//! Text heuristics shared by the log parsers.
//!
//! - [`names`] - display-name normalization
//! - [`participants`] - session roster and sender attribution
//! - [`locale`] - month tables and session-heading dates

pub mod locale;
pub mod names;
pub mod participants;

pub use locale::{MonthTable, UNKNOWN_DATE, format_session_date};
pub use names::{NameVariants, first_token, heavy_normalize, light_normalize};
pub use participants::{Participant, ParticipantMap};
