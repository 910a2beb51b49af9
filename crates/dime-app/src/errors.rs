//! Application error taxonomy
//!
//! Only genuinely exceptional outcomes are errors. Lookups that simply find
//! nothing (`member`, `for_member`, `manager_for`) return `Option` or empty
//! collections instead.

use dime_core::effects::{ClockError, StorageError};
use thiserror::Error;

/// Errors surfaced by workflows and by snapshot load/save
#[derive(Debug, Error)]
pub enum AppError {
    /// Login rejected. The display text is the user-facing message.
    #[error("Identifiants invalides")]
    InvalidCredentials,

    /// Clock collaborator failed
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Storage collaborator failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Snapshot encoding or decoding failed
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Message safe to show the operator
    ///
    /// Collaborator failures carry internal detail, so everything except a
    /// credential rejection collapses to a generic notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "Identifiants invalides",
            _ => "Une erreur est survenue",
        }
    }

    /// True when the operator can fix the problem by retrying with
    /// different input
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::InvalidCredentials)
    }
}
