//! Member directory workflow

use tracing::info;

use crate::app::AppCore;
use crate::errors::AppError;
use dime_core::{Member, NewMember};

/// Register a new member
///
/// **What it does**: appends the member at the tail of the directory and
/// persists the member store.
/// **Returns**: the created record, identifier included.
pub async fn add_member(app: &AppCore, draft: NewMember) -> Result<Member, AppError> {
    let member = app.members().modify(|directory| directory.add(draft));
    app.persist_members().await?;
    info!(member_id = %member.id, "member registered");
    Ok(member)
}
