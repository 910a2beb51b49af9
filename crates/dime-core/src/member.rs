//! Membership records

use crate::identifiers::MemberId;
use crate::tribe::Tribe;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Member gender, serialized in the compact `"M"` / `"F"` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("M"),
            Gender::Female => f.write_str("F"),
        }
    }
}

/// A registered church member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    /// Phone contact, stored verbatim (e.g. `+237 600000001`)
    pub contact: String,
    pub tribe: Tribe,
    /// Date the member joined the church
    pub joined_at: NaiveDate,
}

/// Input record for directory insertion; the directory mints the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub contact: String,
    pub tribe: Tribe,
    pub joined_at: NaiveDate,
}

impl NewMember {
    /// Attach an identifier, producing the stored record
    pub fn with_id(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            contact: self.contact,
            tribe: self.tribe,
            joined_at: self.joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewMember {
        NewMember {
            name: "Jean Dupont".to_string(),
            age: 45,
            gender: Gender::Male,
            contact: "+237 600000001".to_string(),
            tribe: Tribe::Juda,
            joined_at: NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date"),
        }
    }

    #[test]
    fn test_with_id_preserves_every_field() {
        let member = draft().with_id(MemberId::from("1"));
        assert_eq!(member.id, MemberId::from("1"));
        assert_eq!(member.name, "Jean Dupont");
        assert_eq!(member.age, 45);
        assert_eq!(member.gender, Gender::Male);
        assert_eq!(member.tribe, Tribe::Juda);
    }

    #[test]
    fn test_gender_uses_compact_serialized_form() {
        let json = serde_json::to_string(&Gender::Female).expect("serialize");
        assert_eq!(json, "\"F\"");
    }

    #[test]
    fn test_member_json_shape_matches_snapshots() {
        let member = draft().with_id(MemberId::from("1"));
        let json = serde_json::to_value(&member).expect("serialize");
        assert_eq!(json["id"], "1");
        assert_eq!(json["gender"], "M");
        assert_eq!(json["tribe"], "Juda");
        assert_eq!(json["joined_at"], "2025-01-10");
    }
}
