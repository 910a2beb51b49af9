//! Seed dataset
//!
//! The state a fresh installation starts from, and the fallback when a
//! stored snapshot is missing or unreadable. The fixed identifiers ("1"
//! through "15", "t1" through "t4") keep the dataset stable across
//! reinstalls; freshly added records get generated identifiers instead.

// Seed dates are static literals; an invalid one is a programming error.
#![allow(clippy::expect_used)]

use chrono::NaiveDate;
use dime_core::{
    ChurchInfo, Gender, Member, MemberId, Tithe, TitheId, Tribe, TribeManager,
};

use crate::views::{ChurchState, MembersState, SessionState, TithesState};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

fn member(
    id: &str,
    name: &str,
    age: u8,
    gender: Gender,
    contact: &str,
    tribe: Tribe,
    joined_at: NaiveDate,
) -> Member {
    Member {
        id: MemberId::from(id),
        name: name.to_string(),
        age,
        gender,
        contact: contact.to_string(),
        tribe,
        joined_at,
    }
}

/// The fifteen founding members
pub fn members() -> Vec<Member> {
    use Gender::{Female as F, Male as M};
    vec![
        member("1", "Jean Dupont", 45, M, "+237 600000001", Tribe::Juda, date(2025, 1, 10)),
        member("2", "Marie Salla", 32, F, "+237 600000002", Tribe::Benjamin, date(2025, 2, 15)),
        member("3", "Paul Atangana", 28, M, "+237 600000003", Tribe::Levi, date(2025, 3, 1)),
        member("4", "Alice Ngo", 24, F, "+237 600000004", Tribe::Ruben, date(2025, 3, 5)),
        member("5", "Bernard Tche", 50, M, "+237 600000005", Tribe::Simeon, date(2025, 3, 10)),
        member("6", "Catherine Mvogo", 35, F, "+237 600000006", Tribe::Zabulon, date(2025, 3, 15)),
        member("7", "Daniel Eboa", 41, M, "+237 600000007", Tribe::Issacar, date(2025, 3, 20)),
        member("8", "Esther Biloa", 29, F, "+237 600000008", Tribe::Dan, date(2025, 3, 25)),
        member("9", "Fabrice Kengne", 33, M, "+237 600000009", Tribe::Gad, date(2025, 3, 30)),
        member("10", "Gisèle Abena", 27, F, "+237 600000010", Tribe::Aser, date(2025, 4, 1)),
        member("11", "Hervé Nana", 38, M, "+237 600000011", Tribe::Nephthali, date(2025, 4, 5)),
        member("12", "Irène Ngono", 45, F, "+237 600000012", Tribe::Joseph, date(2025, 4, 10)),
        member("13", "Joseph Mballa", 55, M, "+237 600000013", Tribe::Joseph, date(2025, 4, 15)),
        member("14", "Kévin Foko", 22, M, "+237 600000014", Tribe::Benjamin, date(2025, 4, 20)),
        member("15", "Léa Bella", 31, F, "+237 600000015", Tribe::Juda, date(2025, 4, 25)),
    ]
}

/// The opening ledger entries
pub fn tithes() -> Vec<Tithe> {
    let tithe = |id: &str, member: &str, amount: u64, on: NaiveDate| Tithe {
        id: TitheId::from(id),
        member_id: MemberId::from(member),
        amount,
        date: on,
    };
    vec![
        tithe("t1", "1", 5000, date(2026, 1, 5)),
        tithe("t2", "2", 10000, date(2026, 1, 10)),
        tithe("t3", "1", 2500, date(2026, 1, 12)),
        tithe("t4", "3", 15000, date(2025, 12, 20)),
    ]
}

/// The congregation profile
pub fn church_info() -> ChurchInfo {
    ChurchInfo {
        name: "Gère ma Dîme Centra".to_string(),
        logo: String::new(),
        currency: "XAF".to_string(),
        address: "Yaoundé, Cameroun".to_string(),
        phone: "+237 600 000 000".to_string(),
        email: "contact@geremadime.cm".to_string(),
    }
}

/// One manager per tribe, drawn from the founding members
pub fn tribe_managers() -> Vec<TribeManager> {
    let row = |tribe: Tribe, name: &str| TribeManager {
        tribe,
        manager_name: name.to_string(),
    };
    vec![
        row(Tribe::Juda, "Jean Dupont"),
        row(Tribe::Benjamin, "Marie Salla"),
        row(Tribe::Levi, "Paul Atangana"),
        row(Tribe::Ruben, "Alice Ngo"),
        row(Tribe::Simeon, "Bernard Tche"),
        row(Tribe::Zabulon, "Catherine Mvogo"),
        row(Tribe::Issacar, "Daniel Eboa"),
        row(Tribe::Dan, "Esther Biloa"),
        row(Tribe::Gad, "Fabrice Kengne"),
        row(Tribe::Aser, "Gisèle Abena"),
        row(Tribe::Nephthali, "Hervé Nana"),
        row(Tribe::Joseph, "Irène Ngono"),
    ]
}

/// Fresh session store: signed out
pub fn session_state() -> SessionState {
    SessionState::default()
}

/// Fresh member directory over the founding members
pub fn members_state() -> MembersState {
    MembersState::with_members(members())
}

/// Fresh ledger over the opening entries
pub fn tithes_state() -> TithesState {
    TithesState::with_tithes(tithes())
}

/// Fresh church profile
pub fn church_state() -> ChurchState {
    ChurchState::new(church_info(), tribe_managers())
}
