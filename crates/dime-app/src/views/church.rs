//! Church profile view state

use dime_core::{ChurchInfo, ChurchInfoUpdate, Tribe, TribeManager};
use serde::{Deserialize, Serialize};

/// Congregation profile and tribe leadership
///
/// Seeded state carries exactly one manager row per tribe; nothing here
/// adds or removes rows, renames happen in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurchState {
    pub info: ChurchInfo,
    pub managers: Vec<TribeManager>,
}

impl ChurchState {
    pub fn new(info: ChurchInfo, managers: Vec<TribeManager>) -> Self {
        Self { info, managers }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// The manager row for one tribe
    pub fn manager_for(&self, tribe: Tribe) -> Option<&TribeManager> {
        self.managers.iter().find(|manager| manager.tribe == tribe)
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Merge a profile patch; only populated fields overwrite
    pub fn update_info(&mut self, update: ChurchInfoUpdate) {
        self.info.apply(update);
    }

    /// Rename the manager of one tribe; false when the row is missing
    pub fn set_manager(&mut self, tribe: Tribe, name: impl Into<String>) -> bool {
        match self.managers.iter_mut().find(|m| m.tribe == tribe) {
            Some(manager) => {
                manager.manager_name = name.into();
                true
            }
            None => false,
        }
    }
}
