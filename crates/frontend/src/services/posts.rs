//! Post feed, detail, and authoring service

use chrono::{DateTime, Utc};
use murmur_frontend_common::{ApiClient, ApiError};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PostAuthor {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PostImage {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub images: Vec<PostImage>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    pub user: PostAuthor,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PostPage {
    pub data: Vec<Post>,
    pub pagination: PageInfo,
}

/// In-memory payload of an image picked for upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct PostService {
    client: ApiClient,
}

impl PostService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Paginated feed, optionally filtered by a search term
    pub async fn list(&self, page: u32, limit: u32, search: &str) -> Result<PostPage, ApiError> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }

        let request = self.client.request(Method::GET, "/posts").query(&query);
        self.client.execute(request).await
    }

    pub async fn get(&self, id: i64) -> Result<Post, ApiError> {
        let request = self.client.request(Method::GET, &format!("/posts/{id}"));
        self.client.execute(request).await
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        let request = self
            .client
            .request(Method::GET, &format!("/posts/user/{user_id}"));
        self.client.execute(request).await
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        images: Vec<ImageUpload>,
    ) -> Result<(), ApiError> {
        let form = Self::post_form(title, content, images)?;
        let request = self.client.request(Method::POST, "/posts").multipart(form);
        self.client.execute_empty(request).await
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        content: &str,
        new_images: Vec<ImageUpload>,
    ) -> Result<(), ApiError> {
        let form = Self::post_form(title, content, new_images)?;
        let request = self
            .client
            .request(Method::POST, &format!("/posts/{id}"))
            .multipart(form);
        self.client.execute_empty(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.client.request(Method::DELETE, &format!("/posts/{id}"));
        self.client.execute_empty(request).await
    }

    /// Remove a single image from an existing post
    pub async fn delete_image(&self, image_id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/posts/images/{image_id}"));
        self.client.execute_empty(request).await
    }

    fn post_form(title: &str, content: &str, images: Vec<ImageUpload>) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("title", title.trim().to_string())
            .text("content", content.trim().to_string());
        for image in images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part("images", part);
        }
        Ok(form)
    }
}
