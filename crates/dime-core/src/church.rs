//! Church profile and tribe leadership records

use crate::tribe::Tribe;
use serde::{Deserialize, Serialize};

/// Identity card of the congregation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurchInfo {
    pub name: String,
    /// Logo reference (URL or data URI); empty when unset
    pub logo: String,
    /// ISO 4217 currency code used for contribution amounts
    pub currency: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Merge patch for [`ChurchInfo`]: only populated fields overwrite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurchInfoUpdate {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub currency: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ChurchInfo {
    /// Apply a merge patch field by field
    pub fn apply(&mut self, update: ChurchInfoUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(logo) = update.logo {
            self.logo = logo;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

/// Pairing of a tribe with the member responsible for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TribeManager {
    pub tribe: Tribe,
    pub manager_name: String,
}
