//! Moderation dashboard service

use chrono::{DateTime, Utc};
use murmur_frontend_common::{ApiClient, ApiError};
use reqwest::Method;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminPostAuthor {
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminPost {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    pub user: AdminPostAuthor,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_posts: u64,
    pub total_comments: u64,
    #[serde(default)]
    pub recent_posts: Vec<AdminPost>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct AdminService {
    client: ApiClient,
}

impl AdminService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<AdminStats, ApiError> {
        let request = self.client.request(Method::GET, "/admin/stats");
        self.client.execute(request).await
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let request = self.client.request(Method::GET, "/admin/users");
        self.client.execute(request).await
    }

    /// Flip a user between active and locked
    pub async fn toggle_user_status(&self, id: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/admin/users/{id}/toggle-status"));
        self.client.execute_empty(request).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/admin/users/{id}"));
        self.client.execute_empty(request).await
    }

    pub async fn list_posts(&self) -> Result<Vec<AdminPost>, ApiError> {
        let request = self.client.request(Method::GET, "/admin/posts");
        self.client.execute(request).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/admin/posts/{id}"));
        self.client.execute_empty(request).await
    }
}
