//! Church profile workflow

use tracing::{debug, info};

use crate::app::AppCore;
use crate::errors::AppError;
use dime_core::{ChurchInfoUpdate, Tribe};

/// Merge a profile patch and persist the church store
pub async fn update_church_info(app: &AppCore, update: ChurchInfoUpdate) -> Result<(), AppError> {
    app.church().modify(|church| church.update_info(update));
    app.persist_church().await?;
    info!("church profile updated");
    Ok(())
}

/// Rename the manager of one tribe
///
/// **Returns**: true when the row existed and was renamed. Nothing is
/// persisted when the tribe has no row.
pub async fn set_tribe_manager(
    app: &AppCore,
    tribe: Tribe,
    name: impl Into<String>,
) -> Result<bool, AppError> {
    let name = name.into();
    let renamed = app
        .church()
        .modify(|church| church.set_manager(tribe, name));
    if renamed {
        app.persist_church().await?;
        info!(tribe = %tribe, "tribe manager updated");
    } else {
        debug!(tribe = %tribe, "tribe manager row missing");
    }
    Ok(renamed)
}
