// Persona Roster - Core Library
// Exposes the roster core for the terminal UI, script mode, and tests

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod record;
pub mod roster;
pub mod script;
pub mod validation;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use error::{Action, Result, RosterError};
pub use form::{Field, FormState};
pub use record::Record;
pub use roster::{is_duplicate, Roster};
pub use script::{run_script, Command, ScriptSummary};
pub use validation::validate;
