//! Navigation guard
//!
//! A pure decision over the navigation surface: the only inputs are the
//! target route and whether an operator is signed in, and the only outputs
//! are proceed-or-redirect. The embedding frontend owns the actual router;
//! it asks here before committing a transition.

use serde::{Deserialize, Serialize};

/// Screens of the management console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Guest-only sign-in screen
    Login,
    Dashboard,
    Members,
    /// Detail screen; the frontend carries the member id alongside
    MemberProfile,
    Reports,
    Settings,
}

impl Route {
    /// Path pattern the frontend binds this route to
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Members => "/members",
            Route::MemberProfile => "/members/:id",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
        }
    }

    /// True for every screen behind the session, i.e. all but login
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Outcome of guarding one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteDecision {
    /// Let the transition happen
    Proceed,
    /// Target needs a session and there is none
    RedirectToLogin,
    /// Signed-in operators skip the login screen
    RedirectToDashboard,
}

/// Decide a navigation to `route` given the session flag
pub fn evaluate(route: Route, authenticated: bool) -> RouteDecision {
    if route.requires_auth() && !authenticated {
        RouteDecision::RedirectToLogin
    } else if route == Route::Login && authenticated {
        RouteDecision::RedirectToDashboard
    } else {
        RouteDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [Route; 5] = [
        Route::Dashboard,
        Route::Members,
        Route::MemberProfile,
        Route::Reports,
        Route::Settings,
    ];

    #[test]
    fn test_unauthenticated_visitors_bounce_to_login() {
        for route in PROTECTED {
            assert_eq!(evaluate(route, false), RouteDecision::RedirectToLogin);
        }
    }

    #[test]
    fn test_authenticated_operators_proceed_everywhere_but_login() {
        for route in PROTECTED {
            assert_eq!(evaluate(route, true), RouteDecision::Proceed);
        }
    }

    #[test]
    fn test_login_screen_is_guest_only() {
        assert_eq!(evaluate(Route::Login, false), RouteDecision::Proceed);
        assert_eq!(
            evaluate(Route::Login, true),
            RouteDecision::RedirectToDashboard
        );
    }

    #[test]
    fn test_paths_cover_the_navigation_surface() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::MemberProfile.path(), "/members/:id");
        assert!(!Route::Login.requires_auth());
        assert!(Route::Settings.requires_auth());
    }
}
