//! Session state types

use serde::{Deserialize, Serialize};

/// Authenticated user record as returned by the identity endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub role: String,
}

impl User {
    /// Whether this user is an administrator. Derived from `role` on every
    /// call, never cached.
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Startup hydration progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hydration {
    Pending,
    Ready,
}

/// Internal mutable session record.
///
/// `user` is present only when `token` is present and was validated against
/// the identity endpoint; a token without a user is a transient state that
/// settles before `hydration` becomes `Ready`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub hydration: Hydration,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            hydration: Hydration::Pending,
        }
    }
}

impl SessionState {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            token: self.token.clone(),
            is_admin: self.user.as_ref().is_some_and(User::is_admin),
            loading: self.hydration == Hydration::Pending,
        }
    }
}

/// Read-only view of the session handed to views
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_admin: bool,
    pub loading: bool,
}
