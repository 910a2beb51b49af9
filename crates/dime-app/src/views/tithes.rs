//! Tithe ledger view state
//!
//! Append-only registration order, with every reading derived on demand:
//! per-member history, calendar-month totals, per-tribe generosity, and the
//! daily series the dashboard charts. "Today" always arrives as an argument
//! so the readings stay pure; the application core supplies it from the
//! clock effect.

use crate::views::members::MembersState;
use chrono::{Datelike, Months, NaiveDate};
use dime_core::{DailyPoint, MemberId, NewTithe, Tithe, TitheId, Tribe};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn days_in_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// Ledger of contributions in registration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TithesState {
    pub tithes: Vec<Tithe>,
}

impl TithesState {
    /// Ledger over existing records
    pub fn with_tithes(tithes: Vec<Tithe>) -> Self {
        Self { tithes }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// One member's contributions, most recent date first
    ///
    /// The sort is stable: same-date records keep their registration order.
    /// An unknown member simply has no history.
    pub fn for_member(&self, member_id: &MemberId) -> Vec<&Tithe> {
        let mut history: Vec<&Tithe> = self
            .tithes
            .iter()
            .filter(|tithe| &tithe.member_id == member_id)
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Sum of contributions falling in `today`'s calendar month
    pub fn total_for_month(&self, today: NaiveDate) -> u64 {
        self.tithes
            .iter()
            .filter(|tithe| same_month(tithe.date, today))
            .map(|tithe| tithe.amount)
            .sum()
    }

    /// All-time contribution total
    pub fn total(&self) -> u64 {
        self.tithes.iter().map(|tithe| tithe.amount).sum()
    }

    /// Number of ledger records
    pub fn count(&self) -> usize {
        self.tithes.len()
    }

    /// All-time totals per tribe, keyed in first-encounter order
    ///
    /// Each record resolves through the directory; records whose member is
    /// gone contribute to no tribe.
    pub fn tribe_totals(&self, members: &MembersState) -> IndexMap<Tribe, u64> {
        let mut totals: IndexMap<Tribe, u64> = IndexMap::new();
        for tithe in &self.tithes {
            if let Some(member) = members.member(&tithe.member_id) {
                *totals.entry(member.tribe).or_insert(0) += tithe.amount;
            }
        }
        totals
    }

    /// The tribe with the strictly greatest all-time total
    ///
    /// Ties keep the earlier tribe (strict `>` over first-encounter order).
    /// `None` when the ledger is empty or nothing resolves to a tribe.
    pub fn most_generous_tribe(&self, members: &MembersState) -> Option<Tribe> {
        let mut best: Option<(Tribe, u64)> = None;
        for (tribe, total) in self.tribe_totals(members) {
            match best {
                Some((_, max)) if total <= max => {}
                _ => best = Some((tribe, total)),
            }
        }
        best.map(|(tribe, _)| tribe)
    }

    /// Daily totals for `today`'s month, one point per calendar day
    ///
    /// The series always spans the whole month: every day appears in
    /// ascending order, zero when nothing was contributed, so its length
    /// equals the number of days in the month.
    pub fn daily_evolution(&self, today: NaiveDate) -> Vec<DailyPoint> {
        let mut series: Vec<DailyPoint> = (1..=days_in_month(today))
            .filter_map(|day| NaiveDate::from_ymd_opt(today.year(), today.month(), day))
            .map(|date| DailyPoint { date, amount: 0 })
            .collect();
        for tithe in &self.tithes {
            if same_month(tithe.date, today) {
                if let Some(point) = series.get_mut(tithe.date.day0() as usize) {
                    point.amount += tithe.amount;
                }
            }
        }
        series
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Append a contribution and mint its identifier
    ///
    /// The member id is taken as given: the ledger keeps records even for
    /// members later removed from the directory.
    pub fn register(&mut self, draft: NewTithe) -> TitheId {
        let id = TitheId::generate();
        self.tithes.push(draft.with_id(id.clone()));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dime_core::{Gender, Member};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn tithe(id: &str, member: &str, amount: u64, on: NaiveDate) -> Tithe {
        Tithe {
            id: TitheId::from(id),
            member_id: MemberId::from(member),
            amount,
            date: on,
        }
    }

    fn member(id: &str, name: &str, tribe: Tribe) -> Member {
        Member {
            id: MemberId::from(id),
            name: name.to_string(),
            age: 30,
            gender: Gender::Female,
            contact: format!("+237 60000000{id}"),
            tribe,
            joined_at: date(2025, 1, 1),
        }
    }

    fn directory() -> MembersState {
        MembersState::with_members(vec![
            member("1", "Jean Dupont", Tribe::Juda),
            member("2", "Marie Salla", Tribe::Benjamin),
            member("3", "Paul Atangana", Tribe::Levi),
        ])
    }

    fn ledger() -> TithesState {
        TithesState::with_tithes(vec![
            tithe("t1", "1", 5000, date(2026, 1, 5)),
            tithe("t2", "2", 10000, date(2026, 1, 10)),
            tithe("t3", "1", 2500, date(2026, 1, 12)),
            tithe("t4", "3", 15000, date(2025, 12, 20)),
        ])
    }

    #[test]
    fn test_history_is_date_descending() {
        let state = ledger();
        let history = state.for_member(&MemberId::from("1"));
        let ids: Vec<&str> = history.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t1"]);
    }

    #[test]
    fn test_history_is_stable_for_equal_dates() {
        let mut state = ledger();
        state.register(NewTithe {
            member_id: MemberId::from("1"),
            amount: 100,
            date: date(2026, 1, 12),
        });
        let history = state.for_member(&MemberId::from("1"));
        // t3 was registered before the new same-date record
        assert_eq!(history[0].id.as_str(), "t3");
        assert_eq!(history[1].amount, 100);
        assert_eq!(history[2].id.as_str(), "t1");
    }

    #[test]
    fn test_unknown_member_has_empty_history() {
        let state = ledger();
        assert!(state.for_member(&MemberId::from("absent")).is_empty());
    }

    #[test]
    fn test_month_total_respects_calendar_boundaries() {
        let state = ledger();
        assert_eq!(state.total_for_month(date(2026, 1, 31)), 17500);
        assert_eq!(state.total_for_month(date(2025, 12, 1)), 15000);
        assert_eq!(state.total_for_month(date(2026, 2, 1)), 0);
    }

    #[test]
    fn test_tribe_totals_follow_first_encounter_order() {
        let state = ledger();
        let totals = state.tribe_totals(&directory());
        let order: Vec<Tribe> = totals.keys().copied().collect();
        assert_eq!(order, vec![Tribe::Juda, Tribe::Benjamin, Tribe::Levi]);
        assert_eq!(totals[&Tribe::Juda], 7500);
    }

    #[test]
    fn test_most_generous_tribe_uses_all_time_totals() {
        let state = ledger();
        assert_eq!(state.most_generous_tribe(&directory()), Some(Tribe::Levi));
    }

    #[test]
    fn test_most_generous_tribe_tie_keeps_the_earlier_tribe() {
        let state = TithesState::with_tithes(vec![
            tithe("a", "1", 4000, date(2026, 1, 3)),
            tithe("b", "2", 4000, date(2026, 1, 4)),
        ]);
        assert_eq!(state.most_generous_tribe(&directory()), Some(Tribe::Juda));
    }

    #[test]
    fn test_most_generous_tribe_is_none_when_nothing_resolves() {
        let empty = TithesState::default();
        assert_eq!(empty.most_generous_tribe(&directory()), None);

        let dangling = TithesState::with_tithes(vec![tithe("x", "gone", 9000, date(2026, 1, 2))]);
        assert_eq!(dangling.most_generous_tribe(&directory()), None);
    }

    #[test]
    fn test_dangling_member_ids_are_kept_but_tribeless() {
        let mut state = ledger();
        state.register(NewTithe {
            member_id: MemberId::from("gone"),
            amount: 99999,
            date: date(2026, 1, 20),
        });

        // the record exists and counts toward month totals
        assert_eq!(state.count(), 5);
        assert_eq!(state.total_for_month(date(2026, 1, 1)), 117_499);
        // but moves no tribe
        assert_eq!(state.most_generous_tribe(&directory()), Some(Tribe::Levi));
    }

    #[test]
    fn test_daily_evolution_spans_every_day_of_the_month() {
        let mut state = ledger();
        state.register(NewTithe {
            member_id: MemberId::from("2"),
            amount: 500,
            date: date(2026, 1, 5),
        });

        let series = state.daily_evolution(date(2026, 1, 15));
        assert_eq!(series.len(), 31);
        let days: Vec<u32> = series.iter().map(|p| p.date.day()).collect();
        assert_eq!(days, (1..=31).collect::<Vec<u32>>());

        // same-day contributions are summed onto their day
        assert_eq!(series[4].amount, 5500);
        assert_eq!(series[9].amount, 10000);
        assert_eq!(series[11].amount, 2500);
        // every other day is present with a zero amount
        assert_eq!(series[0].amount, 0);
        assert_eq!(series[30].amount, 0);
        assert_eq!(series.iter().map(|p| p.amount).sum::<u64>(), 18000);
    }

    #[test]
    fn test_daily_evolution_length_follows_the_calendar() {
        let state = TithesState::default();
        assert_eq!(state.daily_evolution(date(2026, 2, 10)).len(), 28);
        assert_eq!(state.daily_evolution(date(2024, 2, 10)).len(), 29);
        assert_eq!(state.daily_evolution(date(2025, 12, 31)).len(), 31);
        assert!(state
            .daily_evolution(date(2026, 2, 10))
            .iter()
            .all(|p| p.amount == 0));
    }

    #[test]
    fn test_register_appends_in_order() {
        let mut state = TithesState::default();
        let first = state.register(NewTithe {
            member_id: MemberId::from("1"),
            amount: 1000,
            date: date(2026, 2, 1),
        });
        let second = state.register(NewTithe {
            member_id: MemberId::from("1"),
            amount: 2000,
            date: date(2026, 2, 2),
        });

        assert_ne!(first, second);
        assert_eq!(state.tithes[0].id, first);
        assert_eq!(state.tithes[1].id, second);
    }
}
