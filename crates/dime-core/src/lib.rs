//! Dime Core - Domain Model Foundation
//!
//! Foundational types for the church membership and tithe management
//! application. This crate carries no application logic and no I/O: it
//! defines the entity model, the aggregate shapes the reporting surfaces
//! consume, the versioned cell that makes state observable, and the pure
//! effect interfaces higher layers implement.
//!
//! # Layers
//!
//! - **Entities**: `Member`, `Tithe`, `Tribe`, `TribeManager`, `ChurchInfo`,
//!   `Operator` and their input records
//! - **Reports**: `ReportsData` and the KPI / evolution / pyramid shapes
//! - **Reactive**: `StoreCell<T>` with poll-based `Watcher`s
//! - **Effects**: `ClockEffects`, `StorageEffects` trait signatures only;
//!   handlers live in `dime-effects`

#![allow(missing_docs)]
#![forbid(unsafe_code)]

// === Modules ===

/// Church profile and tribe leadership records
pub mod church;

/// Pure effect interfaces (no implementations)
pub mod effects;

/// Member and tithe identifier newtypes
pub mod identifiers;

/// Membership records
pub mod member;

/// Authenticated operator identity
pub mod operator;

/// Versioned observable cells
pub mod reactive;

/// Aggregate shapes for reporting surfaces
pub mod reports;

/// Tithe contribution records
pub mod tithe;

/// The closed set of twelve tribes
pub mod tribe;

// === Re-exports ===

pub use church::{ChurchInfo, ChurchInfoUpdate, TribeManager};
pub use effects::{ClockEffects, ClockError, StorageEffects, StorageError};
pub use identifiers::{MemberId, TitheId};
pub use member::{Gender, Member, NewMember};
pub use operator::Operator;
pub use reactive::{StoreCell, Watcher};
pub use reports::{
    AgeGroup, DailyPoint, Kpi, KpiValue, MonthlyPoint, ReportsData, TribeContribution,
};
pub use tithe::{NewTithe, Tithe};
pub use tribe::{Tribe, UnknownTribe};
