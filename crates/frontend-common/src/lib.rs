//! Shared frontend infrastructure for murmur
//!
//! Owns the session lifecycle (token persistence, hydration, cross-tab
//! synchronization), the route authorization policy, and the typed HTTP
//! client every view goes through.

pub mod client;
pub mod components;
pub mod config;
pub mod routing;
pub mod session;

pub use client::{ApiClient, ApiError, TokenCell};
pub use components::LoadingSpinner;
pub use config::AppConfig;
pub use routing::{evaluate_route, RouteDecision, RoutePolicy};
pub use session::{
    use_current_user, use_is_authenticated, use_session, AuthError, SessionHandle,
    SessionProvider, SessionSnapshot, SessionStore, User,
};
