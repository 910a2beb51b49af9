//! Aggregate shapes consumed by the reporting and dashboard surfaces
//!
//! These are data-transfer records: the core fills them with numbers and
//! canonical labels, and the presentation layer decides typography, locale
//! formatting, and chart rendering.

use crate::tribe::Tribe;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value carried by a KPI card
///
/// Serialized untagged so counts and amounts appear as bare numbers and
/// textual values as bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KpiValue {
    /// A cardinality (member count, record count)
    Count(u64),
    /// A currency amount in whole units
    Amount(u64),
    /// A label (tribe name, sentinel text)
    Text(String),
}

/// One KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub title: String,
    pub value: KpiValue,
    /// Relative change against the previous period, when known
    pub change: Option<f64>,
    /// Icon identifier resolved by the presentation layer
    pub icon: String,
}

/// Contribution total for one day of the probed month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub amount: u64,
}

/// Contribution total for one month, keyed `YYYY-MM`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub amount: u64,
}

/// Total contributed by one tribe, with its fixed chart colour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TribeContribution {
    pub tribe: Tribe,
    pub amount: u64,
    pub color: String,
}

/// Member count within one age range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroup {
    pub range: String,
    pub count: u64,
}

/// Everything the reports surface renders in one assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportsData {
    pub kpis: Vec<Kpi>,
    pub evolution: Vec<MonthlyPoint>,
    pub tribes: Vec<TribeContribution>,
    pub age_pyramid: Vec<AgeGroup>,
}
