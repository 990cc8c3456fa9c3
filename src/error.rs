// Roster errors - every failure here is an expected user-input condition

use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

/// Which roster operation was attempted. Picks the user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    Remove,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Update => "update",
            Action::Remove => "remove",
        }
    }

    /// Verb used in user-facing messages
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Update => "modify",
            Action::Remove => "delete",
        }
    }

    /// Message shown after the action succeeds
    pub fn success_message(&self) -> &'static str {
        match self {
            Action::Add => "Person added successfully.",
            Action::Update => "Modified successfully.",
            Action::Remove => "Deleted successfully.",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// One or more field-level messages, in rule order
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("{}", duplicate_message(*action))]
    Duplicate { action: Action },

    #[error("You must select a person to {} it.", .action.verb())]
    NoSelection { action: Action },
}

impl RosterError {
    /// Field messages for a validation failure, empty otherwise
    pub fn messages(&self) -> &[String] {
        match self {
            RosterError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn duplicate_message(action: Action) -> &'static str {
    match action {
        Action::Update => "Cannot modify to a person already in the table.",
        Action::Add | Action::Remove => "Duplicate person.",
    }
}
