//! Comment service

use chrono::{DateTime, Utc};
use murmur_frontend_common::{ApiClient, ApiError};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::posts::PostAuthor;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user: PostAuthor,
}

#[derive(Serialize)]
struct NewComment<'a> {
    post_id: i64,
    content: &'a str,
}

#[derive(Clone)]
pub struct CommentService {
    client: ApiClient,
}

impl CommentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        let request = self
            .client
            .request(Method::GET, &format!("/comments/post/{post_id}"));
        self.client.execute(request).await
    }

    pub async fn create(&self, post_id: i64, content: &str) -> Result<Comment, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/comments")
            .json(&NewComment {
                post_id,
                content: content.trim(),
            });
        self.client.execute(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/comments/{id}"));
        self.client.execute_empty(request).await
    }
}
