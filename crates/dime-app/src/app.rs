//! Application core
//!
//! Owns the four store cells and the two effect collaborators. Hosts build
//! one `AppCore` at startup (fresh via [`AppCore::new`], or restored via
//! [`AppCore::load`]), hand clones of the cells' watchers to their UI, and
//! drive mutations through the workflow functions.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::errors::AppError;
use crate::guard::{self, Route, RouteDecision};
use crate::reports::build_reports;
use crate::seed;
use crate::views::{ChurchState, MembersState, SessionState, TithesState};
use dime_core::reactive::StoreCell;
use dime_core::{ClockEffects, DailyPoint, ReportsData, StorageEffects};

/// Storage keys, one snapshot document per store
pub mod keys {
    pub const SESSION: &str = "auth";
    pub const MEMBERS: &str = "member";
    pub const TITHES: &str = "tithe";
    pub const CHURCH: &str = "church";
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Simulated latency of a login attempt
    pub login_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
        }
    }
}

/// The headless application core
pub struct AppCore {
    config: AppConfig,
    clock: Arc<dyn ClockEffects>,
    storage: Arc<dyn StorageEffects>,
    session: StoreCell<SessionState>,
    members: StoreCell<MembersState>,
    tithes: StoreCell<TithesState>,
    church: StoreCell<ChurchState>,
}

impl AppCore {
    /// Fresh core over the seed dataset
    pub fn new(
        config: AppConfig,
        clock: Arc<dyn ClockEffects>,
        storage: Arc<dyn StorageEffects>,
    ) -> Self {
        Self {
            config,
            clock,
            storage,
            session: StoreCell::new(seed::session_state()),
            members: StoreCell::new(seed::members_state()),
            tithes: StoreCell::new(seed::tithes_state()),
            church: StoreCell::new(seed::church_state()),
        }
    }

    /// Core restored from storage
    ///
    /// Each store loads independently: a missing snapshot falls back to the
    /// seed for that store, and an unreadable one is logged and replaced by
    /// the seed rather than failing startup. Storage I/O errors do fail.
    pub async fn load(
        config: AppConfig,
        clock: Arc<dyn ClockEffects>,
        storage: Arc<dyn StorageEffects>,
    ) -> Result<Self, AppError> {
        let session = load_snapshot(&storage, keys::SESSION)
            .await?
            .unwrap_or_else(seed::session_state);
        let members = load_snapshot(&storage, keys::MEMBERS)
            .await?
            .unwrap_or_else(seed::members_state);
        let tithes = load_snapshot(&storage, keys::TITHES)
            .await?
            .unwrap_or_else(seed::tithes_state);
        let church = load_snapshot(&storage, keys::CHURCH)
            .await?
            .unwrap_or_else(seed::church_state);

        Ok(Self {
            config,
            clock,
            storage,
            session: StoreCell::new(session),
            members: StoreCell::new(members),
            tithes: StoreCell::new(tithes),
            church: StoreCell::new(church),
        })
    }

    // ─── Store access ────────────────────────────────────────────────────

    pub fn session(&self) -> &StoreCell<SessionState> {
        &self.session
    }

    pub fn members(&self) -> &StoreCell<MembersState> {
        &self.members
    }

    pub fn tithes(&self) -> &StoreCell<TithesState> {
        &self.tithes
    }

    pub fn church(&self) -> &StoreCell<ChurchState> {
        &self.church
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) fn clock(&self) -> &Arc<dyn ClockEffects> {
        &self.clock
    }

    // ─── Navigation ──────────────────────────────────────────────────────

    /// Guard a navigation against the current session
    pub fn guard(&self, route: Route) -> RouteDecision {
        guard::evaluate(route, self.session.get().authenticated)
    }

    // ─── Clock-anchored readings ─────────────────────────────────────────

    /// Today's date according to the clock collaborator
    pub async fn today(&self) -> Result<NaiveDate, AppError> {
        Ok(self.clock.now().await?.date_naive())
    }

    /// Sum of contributions in the current calendar month
    pub async fn total_tithes_this_month(&self) -> Result<u64, AppError> {
        let today = self.today().await?;
        Ok(self.tithes.get().total_for_month(today))
    }

    /// Daily contribution series for the current month
    pub async fn daily_evolution(&self) -> Result<Vec<DailyPoint>, AppError> {
        let today = self.today().await?;
        Ok(self.tithes.get().daily_evolution(today))
    }

    /// Full reports bundle against the current date
    pub async fn reports(&self) -> Result<ReportsData, AppError> {
        let today = self.today().await?;
        let members = self.members.get();
        let tithes = self.tithes.get();
        Ok(build_reports(&members, &tithes, today))
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    pub async fn persist_session(&self) -> Result<(), AppError> {
        self.persist(keys::SESSION, &self.session.get()).await
    }

    pub async fn persist_members(&self) -> Result<(), AppError> {
        self.persist(keys::MEMBERS, &self.members.get()).await
    }

    pub async fn persist_tithes(&self) -> Result<(), AppError> {
        self.persist(keys::TITHES, &self.tithes.get()).await
    }

    pub async fn persist_church(&self) -> Result<(), AppError> {
        self.persist(keys::CHURCH, &self.church.get()).await
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(value)?;
        self.storage.store(key, bytes).await?;
        Ok(())
    }
}

/// Fetch and decode one snapshot; unreadable documents count as absent
async fn load_snapshot<T: DeserializeOwned>(
    storage: &Arc<dyn StorageEffects>,
    key: &str,
) -> Result<Option<T>, AppError> {
    match storage.retrieve(key).await? {
        Some(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!(key, %error, "snapshot unreadable, falling back to seed");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}
