//! The checklist markup.
//!
//! ```text
//! // Aircraft Type = C172
//! // Checklist Type = Normal
//! #Before Start
//! -Battery..ON
//! +Voltmeter..CHECK
//! ```
//!
//! [`parse_checklist`] builds a [`preflight_model::Checklist`] from such
//! text; [`write_checklist`] turns a checklist back into markup.

mod error;
mod line;
mod parser;
mod writer;

pub use error::ParseError;
pub use parser::{ParseOutcome, parse_checklist, parse_lines};
pub use writer::write_checklist;

/// Directive keys that fill the checklist's own fields instead of options.
pub const AIRCRAFT_TYPE_KEY: &str = "Aircraft Type";
pub const CHECKLIST_TYPE_KEY: &str = "Checklist Type";
pub const CHECKLIST_VERSION_KEY: &str = "Checklist Version";
pub const REAL_WORLD_CLEARANCE_KEY: &str = "Real World Clearance";
