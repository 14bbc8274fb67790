//! REST service wrappers over the shared API client

pub mod admin;
pub mod comments;
pub mod posts;
pub mod users;
