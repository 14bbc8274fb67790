//! Frontend configuration

/// Application-wide configuration values
pub struct AppConfig;

impl AppConfig {
    /// localStorage key holding the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// Maximum number of images attached to a post
    pub const MAX_POST_IMAGES: usize = 6;

    /// Maximum accepted image size in bytes
    pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

    /// Minimum accepted password length
    pub const MIN_PASSWORD_LEN: usize = 6;
}

/// Base URL for API calls, taken from the window origin.
pub fn api_base_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Relative URLs outside a browser
    String::new()
}
