//! Tithe contribution records

use crate::identifiers::{MemberId, TitheId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded contribution
///
/// Amounts are whole currency units (the church operates in XAF, which has
/// no subunit), so `u64` rules out negative contributions by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tithe {
    pub id: TitheId,
    /// Contributing member. The ledger tolerates identifiers that no longer
    /// resolve in the directory; aggregates treat those as tribeless.
    pub member_id: MemberId,
    pub amount: u64,
    pub date: NaiveDate,
}

/// Input record for ledger registration; the ledger mints the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTithe {
    pub member_id: MemberId,
    pub amount: u64,
    pub date: NaiveDate,
}

impl NewTithe {
    /// Attach an identifier, producing the stored record
    pub fn with_id(self, id: TitheId) -> Tithe {
        Tithe {
            id,
            member_id: self.member_id,
            amount: self.amount,
            date: self.date,
        }
    }
}
