//! Public profile service

use chrono::{DateTime, Utc};
use murmur_frontend_common::{ApiClient, ApiError};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;

use super::posts::ImageUpload;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, id: &str) -> Result<Profile, ApiError> {
        let request = self.client.request(Method::GET, &format!("/user/{id}"));
        self.client.execute(request).await
    }

    /// Update the signed-in user's profile; the avatar is optional
    pub async fn update_profile(
        &self,
        id: &str,
        username: &str,
        bio: &str,
        avatar: Option<ImageUpload>,
    ) -> Result<(), ApiError> {
        let mut form = Form::new()
            .text("username", username.trim().to_string())
            .text("bio", bio.trim().to_string());
        if let Some(image) = avatar {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part("avatar", part);
        }

        let request = self
            .client
            .request(Method::POST, &format!("/user/{id}"))
            .multipart(form);
        self.client.execute_empty(request).await
    }
}
