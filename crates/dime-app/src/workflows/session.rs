//! Session workflow

use tracing::{debug, info};

use crate::app::AppCore;
use crate::errors::AppError;
use crate::views::session::{credentials_valid, SessionState};
use dime_core::Operator;

/// Sign the operator in
///
/// **What it does**: flags the session as loading, waits out the configured
/// latency window, checks the credentials, then either completes the login
/// and persists the session or fails without touching identity state.
/// **Returns**: unit on success, `InvalidCredentials` on a rejected pair.
pub async fn login(app: &AppCore, username: &str, password: &str) -> Result<(), AppError> {
    app.session().modify(SessionState::begin_login);

    // The delay is part of the observable contract: loading stays true for
    // the whole window, on failure paths too.
    if let Err(error) = app.clock().sleep(app.config().login_delay).await {
        app.session().modify(SessionState::fail_login);
        return Err(error.into());
    }

    if !credentials_valid(username, password) {
        app.session().modify(SessionState::fail_login);
        debug!(username, "login rejected");
        return Err(AppError::InvalidCredentials);
    }

    app.session()
        .modify(|session| session.complete_login(Operator::new(username)));
    app.persist_session().await?;
    info!(username, "operator signed in");
    Ok(())
}

/// Sign the operator out; idempotent
pub async fn logout(app: &AppCore) -> Result<(), AppError> {
    app.session().modify(SessionState::clear);
    app.persist_session().await?;
    info!("operator signed out");
    Ok(())
}
