//! The twelve tribes a member may belong to
//!
//! The set is closed: every member and every tribe manager references one of
//! these variants, never a free-form string. Labels are the canonical French
//! spellings and double as the serialized form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tribe affiliation of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tribe {
    Ruben,
    #[serde(rename = "Siméon")]
    Simeon,
    #[serde(rename = "Lévi")]
    Levi,
    Juda,
    Dan,
    Nephthali,
    Gad,
    Aser,
    Issacar,
    Zabulon,
    Joseph,
    Benjamin,
}

impl Tribe {
    /// All twelve tribes in canonical order
    pub const ALL: [Tribe; 12] = [
        Tribe::Ruben,
        Tribe::Simeon,
        Tribe::Levi,
        Tribe::Juda,
        Tribe::Dan,
        Tribe::Nephthali,
        Tribe::Gad,
        Tribe::Aser,
        Tribe::Issacar,
        Tribe::Zabulon,
        Tribe::Joseph,
        Tribe::Benjamin,
    ];

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            Tribe::Ruben => "Ruben",
            Tribe::Simeon => "Siméon",
            Tribe::Levi => "Lévi",
            Tribe::Juda => "Juda",
            Tribe::Dan => "Dan",
            Tribe::Nephthali => "Nephthali",
            Tribe::Gad => "Gad",
            Tribe::Aser => "Aser",
            Tribe::Issacar => "Issacar",
            Tribe::Zabulon => "Zabulon",
            Tribe::Joseph => "Joseph",
            Tribe::Benjamin => "Benjamin",
        }
    }

    /// Fixed chart colour paired with the tribe in contribution reports
    pub fn color(&self) -> &'static str {
        match self {
            Tribe::Ruben => "#3b82f6",
            Tribe::Simeon => "#8b5cf6",
            Tribe::Levi => "#ec4899",
            Tribe::Juda => "#f59e0b",
            Tribe::Dan => "#10b981",
            Tribe::Nephthali => "#06b6d4",
            Tribe::Gad => "#ef4444",
            Tribe::Aser => "#84cc16",
            Tribe::Issacar => "#f97316",
            Tribe::Zabulon => "#6366f1",
            Tribe::Joseph => "#14b8a6",
            Tribe::Benjamin => "#a855f7",
        }
    }
}

impl fmt::Display for Tribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unrecognized tribe label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tribe: {0}")]
pub struct UnknownTribe(pub String);

impl FromStr for Tribe {
    type Err = UnknownTribe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tribe::ALL
            .iter()
            .find(|tribe| tribe.label() == s)
            .copied()
            .ok_or_else(|| UnknownTribe(s.to_string()))
    }
}
