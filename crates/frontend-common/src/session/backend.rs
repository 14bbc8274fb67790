//! Remote identity endpoints

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::state::User;
use crate::client::{ApiClient, ApiError};

/// Payload of a successful login or registration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignIn {
    pub user: User,
    pub session: SessionTokens,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
}

/// The identity calls the session store depends on
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Validate a token and fetch the user it belongs to
    async fn identify(&self, token: &str) -> Result<User, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<SignIn, ApiError>;

    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<SignIn, ApiError>;
}

/// HTTP implementation over [`ApiClient`]
#[derive(Clone)]
pub struct HttpAuthBackend {
    client: ApiClient,
}

impl HttpAuthBackend {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn identify(&self, token: &str) -> Result<User, ApiError> {
        let request = self
            .client
            .request_with_token(Method::GET, "/auth/me", token);
        self.client.execute(request).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<SignIn, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest { email, password });
        self.client.execute(request).await
    }

    async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<SignIn, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/register")
            .json(&RegisterRequest {
                email,
                username,
                password,
            });
        self.client.execute(request).await
    }
}
