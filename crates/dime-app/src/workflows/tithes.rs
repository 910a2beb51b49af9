//! Tithe ledger workflow

use tracing::info;

use crate::app::AppCore;
use crate::errors::AppError;
use dime_core::{NewTithe, TitheId};

/// Record a contribution
///
/// **What it does**: appends the tithe to the ledger and persists the tithe
/// store. The member reference is taken as given; the ledger tolerates
/// identifiers the directory no longer resolves.
/// **Returns**: the minted identifier.
pub async fn register_tithe(app: &AppCore, draft: NewTithe) -> Result<TitheId, AppError> {
    let amount = draft.amount;
    let id = app.tithes().modify(|ledger| ledger.register(draft));
    app.persist_tithes().await?;
    info!(tithe_id = %id, amount, "tithe registered");
    Ok(id)
}
