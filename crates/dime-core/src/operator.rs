//! Authenticated operator identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in operator of the management console
///
/// The application authenticates a single administrative identity; the
/// record carries only what the session needs to display and persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub username: String,
}

impl Operator {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
