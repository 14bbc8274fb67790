//! Typed HTTP client plumbing
//!
//! Every outbound request goes through [`ApiClient`], which reads the current
//! bearer token from a [`TokenCell`] at request-build time. The session store
//! is the only writer of that cell.

use std::cell::RefCell;
use std::rc::Rc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or request error
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Bad request
    #[error("{0}")]
    BadRequest(String),

    /// Credentials rejected or token no longer valid
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Forbidden
    #[error("{0}")]
    Forbidden(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Server returned an error status
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Create an error from an HTTP status code and server message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected our credentials
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// The server-provided message, if the server produced one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Server { message, .. } => Some(message),
            Self::Request(_) | Self::Serialization(_) => None,
        }
    }
}

/// Error body shape the API uses for non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Shared single-writer cell holding the current bearer token.
///
/// The session store writes it; request building reads it at call time, so
/// concurrent requests each see the token that was current when they were
/// built.
#[derive(Clone, Debug, Default)]
pub struct TokenCell(Rc<RefCell<Option<String>>>);

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    pub fn set(&self, token: Option<String>) {
        *self.0.borrow_mut() = token;
    }
}

/// Typed API client
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: TokenCell,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: TokenCell) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            token,
        }
    }

    /// Build a request. The bearer header reflects the token at call time.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match self.token.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Build a request authenticated with an explicit token, bypassing the
    /// cell. Used when validating a token that is not (yet) the session's.
    pub fn request_with_token(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(token)
    }

    /// Execute a request and deserialize the JSON response
    pub async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    /// Execute a request, discarding any response body
    pub async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    async fn error_from_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                error: Some(message),
            }) => message,
            _ => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ApiError::from_status(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_cell_reads_reflect_the_latest_write() {
        let cell = TokenCell::new();
        assert_eq!(cell.get(), None);

        cell.set(Some("T1".to_string()));
        assert_eq!(cell.get(), Some("T1".to_string()));

        let shared = cell.clone();
        shared.set(None);
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn from_status_maps_the_interesting_codes() {
        let err = ApiError::from_status(reqwest::StatusCode::UNAUTHORIZED, "nope".into());
        assert!(err.is_auth_expired());
        assert_eq!(err.server_message(), Some("nope"));

        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert!(!err.is_transport());
    }
}
