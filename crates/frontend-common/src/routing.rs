//! Route authorization policy
//!
//! Pure decision layer: given a route's policy and the current session
//! snapshot, decide whether to render, wait, or redirect. The router side
//! performs redirects with history replacement so Back does not return to a
//! gated page.

use crate::session::SessionSnapshot;

/// Access policy a route declares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Only sensible for signed-out visitors (login, register)
    PublicOnly,
    /// Requires a signed-in user
    Authenticated,
    /// Requires a signed-in administrator
    AdminOnly,
}

/// What the gate decided for this render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration still pending: show a placeholder and decide next render
    Loading,
    Render,
    RedirectHome,
    RedirectLogin,
    RedirectForbidden,
}

/// Evaluate a route policy against the current session.
///
/// The "no user" check precedes the "not administrator" check, so an
/// unauthenticated visit to an admin route redirects to login, never to the
/// forbidden page.
pub fn evaluate_route(policy: RoutePolicy, session: &SessionSnapshot) -> RouteDecision {
    if session.loading {
        return RouteDecision::Loading;
    }
    match policy {
        RoutePolicy::PublicOnly => {
            if session.user.is_some() {
                RouteDecision::RedirectHome
            } else {
                RouteDecision::Render
            }
        }
        RoutePolicy::Authenticated => {
            if session.user.is_none() {
                RouteDecision::RedirectLogin
            } else {
                RouteDecision::Render
            }
        }
        RoutePolicy::AdminOnly => {
            if session.user.is_none() {
                RouteDecision::RedirectLogin
            } else if session.is_admin {
                RouteDecision::Render
            } else {
                RouteDecision::RedirectForbidden
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;

    fn signed_out(loading: bool) -> SessionSnapshot {
        SessionSnapshot {
            user: None,
            token: None,
            is_admin: false,
            loading,
        }
    }

    fn signed_in(role: &str) -> SessionSnapshot {
        let user = User {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            username: "u1".to_string(),
            avatar_url: None,
            role: role.to_string(),
        };
        SessionSnapshot {
            is_admin: user.is_admin(),
            token: Some("T1".to_string()),
            user: Some(user),
            loading: false,
        }
    }

    #[test]
    fn every_policy_waits_while_hydration_is_pending() {
        let session = signed_out(true);
        for policy in [
            RoutePolicy::PublicOnly,
            RoutePolicy::Authenticated,
            RoutePolicy::AdminOnly,
        ] {
            assert_eq!(evaluate_route(policy, &session), RouteDecision::Loading);
        }
    }

    #[test]
    fn public_only_routes_bounce_signed_in_users_home() {
        assert_eq!(
            evaluate_route(RoutePolicy::PublicOnly, &signed_in("user")),
            RouteDecision::RedirectHome
        );
        assert_eq!(
            evaluate_route(RoutePolicy::PublicOnly, &signed_out(false)),
            RouteDecision::Render
        );
    }

    #[test]
    fn authenticated_routes_require_a_user() {
        assert_eq!(
            evaluate_route(RoutePolicy::Authenticated, &signed_out(false)),
            RouteDecision::RedirectLogin
        );
        assert_eq!(
            evaluate_route(RoutePolicy::Authenticated, &signed_in("user")),
            RouteDecision::Render
        );
    }

    #[test]
    fn admin_routes_check_sign_in_before_role() {
        // Unauthenticated visitors go to login, never to the forbidden page.
        assert_eq!(
            evaluate_route(RoutePolicy::AdminOnly, &signed_out(false)),
            RouteDecision::RedirectLogin
        );
        assert_eq!(
            evaluate_route(RoutePolicy::AdminOnly, &signed_in("user")),
            RouteDecision::RedirectForbidden
        );
        assert_eq!(
            evaluate_route(RoutePolicy::AdminOnly, &signed_in("admin")),
            RouteDecision::Render
        );
    }

    #[test]
    fn role_comparison_is_exact() {
        assert_eq!(
            evaluate_route(RoutePolicy::AdminOnly, &signed_in("Administrator")),
            RouteDecision::RedirectForbidden
        );
    }
}
