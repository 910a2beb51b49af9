//! Dime App - Headless Application Core
//!
//! The portable state core of the church membership and tithe management
//! console. Frontends (web, terminal, mobile shells) embed this crate, read
//! state through [`StoreCell`](dime_core::reactive::StoreCell) watchers, and
//! mutate through the workflow functions.
//!
//! # Structure
//!
//! - **Views**: one state struct per store (session, members, tithes,
//!   church) with pure queries and synchronous mutations
//! - **Workflows**: async operations that sequence mutation, effects, and
//!   persistence (`login`, `add_member`, `register_tithe`, ...)
//! - **Guard**: the pure navigation decision for the route table
//! - **Reports**: assembly of the KPI / evolution / pyramid bundle
//! - **AppCore**: ties the cells to the clock and storage collaborators
//!
//! # Example
//!
//! ```rust,ignore
//! use dime_app::{workflows, AppConfig, AppCore};
//! use dime_effects::{FilesystemStorage, SystemClock};
//! use std::sync::Arc;
//!
//! let app = AppCore::load(
//!     AppConfig::default(),
//!     Arc::new(SystemClock::new()),
//!     Arc::new(FilesystemStorage::new("./data")),
//! )
//! .await?;
//!
//! workflows::login(&app, "user@administrateur", "maisondegloire@237").await?;
//! let mut members = app.members().watch();
//! ```

#![allow(missing_docs)]
#![forbid(unsafe_code)]

// === Modules ===

/// AppCore, configuration, and persistence keys
pub mod app;

/// Application error taxonomy
pub mod errors;

/// Navigation guard
pub mod guard;

/// Reports assembly
pub mod reports;

/// Seed dataset
pub mod seed;

/// View states, one per store
pub mod views;

/// Async workflows over the core
pub mod workflows;

// === Re-exports ===

pub use app::{keys, AppConfig, AppCore};
pub use errors::AppError;
pub use guard::{evaluate, Route, RouteDecision};
pub use reports::{build_reports, NO_TRIBE_LABEL};
pub use views::{
    ChurchState, MembersState, SessionState, TithesState, TribeFilter, DEFAULT_PAGE_SIZE,
};
