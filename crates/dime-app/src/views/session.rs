//! Session view state
//!
//! Tracks the signed-in operator and the in-flight flag of a login attempt.
//! Credential checking itself lives here so the workflow layer stays a thin
//! sequencing of delay, check, and persistence.

use dime_core::Operator;
use serde::{Deserialize, Serialize};

/// Username of the single administrative identity
pub const OPERATOR_USERNAME: &str = "user@administrateur";
/// Password of the single administrative identity
pub const OPERATOR_PASSWORD: &str = "maisondegloire@237";

/// Exact-match credential check, case and whitespace sensitive
pub fn credentials_valid(username: &str, password: &str) -> bool {
    username == OPERATOR_USERNAME && password == OPERATOR_PASSWORD
}

/// Operator session state
///
/// Invariant: `authenticated` is true exactly when `operator` is set. The
/// mutation methods below preserve it; external code should go through them
/// rather than poking fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub operator: Option<Operator>,
    pub authenticated: bool,
    pub loading: bool,
}

impl SessionState {
    // ─── Queries ─────────────────────────────────────────────────────────

    /// True while a login attempt is inside its latency window
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when an operator is signed in
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Mark a login attempt as started
    pub fn begin_login(&mut self) {
        self.loading = true;
    }

    /// Record a successful login
    pub fn complete_login(&mut self, operator: Operator) {
        self.operator = Some(operator);
        self.authenticated = true;
        self.loading = false;
    }

    /// Record a failed login; identity state stays untouched
    pub fn fail_login(&mut self) {
        self.loading = false;
    }

    /// Sign the operator out; idempotent
    pub fn clear(&mut self) {
        self.operator = None;
        self.authenticated = false;
    }
}
