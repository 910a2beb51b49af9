//! Reports assembly
//!
//! Builds the full [`ReportsData`] bundle out of the directory and the
//! ledger. Pure: `today` comes in as an argument, amounts stay raw numbers,
//! labels stay canonical strings. The presentation layer formats.

use chrono::{Datelike, NaiveDate};
use dime_core::{AgeGroup, Kpi, KpiValue, MonthlyPoint, ReportsData, Tribe, TribeContribution};
use std::collections::BTreeMap;

use crate::views::{MembersState, TithesState};

/// Sentinel label when no tribe has contributed anything
pub const NO_TRIBE_LABEL: &str = "Aucune";

const AGE_RANGES: [(&str, u8, u8); 6] = [
    ("0-17", 0, 17),
    ("18-25", 18, 25),
    ("26-35", 26, 35),
    ("36-45", 36, 45),
    ("46-55", 46, 55),
    ("56+", 56, u8::MAX),
];

/// Assemble everything the reports surface renders
pub fn build_reports(
    members: &MembersState,
    tithes: &TithesState,
    today: NaiveDate,
) -> ReportsData {
    ReportsData {
        kpis: build_kpis(members, tithes, today),
        evolution: monthly_evolution(tithes, today),
        tribes: tribe_contributions(members, tithes),
        age_pyramid: age_pyramid(members),
    }
}

fn build_kpis(members: &MembersState, tithes: &TithesState, today: NaiveDate) -> Vec<Kpi> {
    let month_total = tithes.total_for_month(today);

    // Change is measured against the previous calendar month; with no
    // baseline there is no percentage to show.
    let previous_total = today
        .with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last_of_previous| tithes.total_for_month(last_of_previous))
        .unwrap_or(0);
    let change = if previous_total > 0 {
        Some(((month_total as f64 - previous_total as f64) / previous_total as f64) * 100.0)
    } else {
        None
    };

    let generous = tithes
        .most_generous_tribe(members)
        .map(|tribe| tribe.label().to_string())
        .unwrap_or_else(|| NO_TRIBE_LABEL.to_string());

    vec![
        Kpi {
            title: "Dîmes du mois".to_string(),
            value: KpiValue::Amount(month_total),
            change,
            icon: "banknotes".to_string(),
        },
        Kpi {
            title: "Membres actifs".to_string(),
            value: KpiValue::Count(members.active_count() as u64),
            change: None,
            icon: "users".to_string(),
        },
        Kpi {
            title: "Tribu la plus généreuse".to_string(),
            value: KpiValue::Text(generous),
            change: None,
            icon: "trophy".to_string(),
        },
        Kpi {
            title: "Total des dîmes".to_string(),
            value: KpiValue::Amount(tithes.total()),
            change: None,
            icon: "chart-bar".to_string(),
        },
    ]
}

/// Monthly totals for `today`'s calendar year, ascending, months without
/// contributions absent
fn monthly_evolution(tithes: &TithesState, today: NaiveDate) -> Vec<MonthlyPoint> {
    let year = today.year();
    let mut per_month: BTreeMap<u32, u64> = BTreeMap::new();
    for tithe in &tithes.tithes {
        if tithe.date.year() == year {
            *per_month.entry(tithe.date.month()).or_insert(0) += tithe.amount;
        }
    }
    per_month
        .into_iter()
        .map(|(month, amount)| MonthlyPoint {
            month: format!("{year:04}-{month:02}"),
            amount,
        })
        .collect()
}

/// Per-tribe totals in canonical tribe order, zero-total tribes omitted
fn tribe_contributions(members: &MembersState, tithes: &TithesState) -> Vec<TribeContribution> {
    let totals = tithes.tribe_totals(members);
    Tribe::ALL
        .iter()
        .filter_map(|tribe| {
            let amount = totals.get(tribe).copied().unwrap_or(0);
            (amount > 0).then(|| TribeContribution {
                tribe: *tribe,
                amount,
                color: tribe.color().to_string(),
            })
        })
        .collect()
}

/// Member counts over the fixed age ranges; every range appears
fn age_pyramid(members: &MembersState) -> Vec<AgeGroup> {
    AGE_RANGES
        .iter()
        .map(|(range, low, high)| AgeGroup {
            range: (*range).to_string(),
            count: members
                .members
                .iter()
                .filter(|member| member.age >= *low && member.age <= *high)
                .count() as u64,
        })
        .collect()
}
