//! Session error taxonomy

use thiserror::Error;

use crate::client::ApiError;

/// Fallback when the server gives us nothing displayable
pub(crate) const GENERIC_SIGN_IN_ERROR: &str = "Unable to sign in. Please try again.";

/// Errors surfaced by session operations
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Login or registration rejected; the message is shown inline
    #[error("{0}")]
    Authentication(String),

    /// The stored token is no longer accepted; recovered by logging out,
    /// never displayed
    #[error("session expired")]
    SessionExpired,
}

impl AuthError {
    /// Map a login/register failure into a displayable error. Transport
    /// failures carry no server message, so they fall back to a generic one.
    pub(crate) fn from_sign_in(err: &ApiError) -> Self {
        match err.server_message() {
            Some(message) => Self::Authentication(message.to_string()),
            None => Self::Authentication(GENERIC_SIGN_IN_ERROR.to_string()),
        }
    }
}
