//! Session lifecycle
//!
//! [`SessionStore`] is the single source of truth for "who is logged in". It
//! owns the durable credential record, the in-memory session, and the token
//! cell read by request building. [`SessionProvider`] wires it to the
//! browser: localStorage, the cross-tab storage event, and yew context.

mod backend;
mod credentials;
mod error;
mod provider;
mod state;
mod store;

pub use backend::{AuthBackend, HttpAuthBackend, SessionTokens, SignIn};
pub use credentials::{CredentialStore, LocalStorageCredentials};
pub use error::AuthError;
pub use provider::{
    use_current_user, use_is_authenticated, use_session, SessionContext, SessionHandle,
    SessionProvider,
};
pub use state::{Hydration, SessionSnapshot, User};
pub use store::{SessionStore, SubscriptionId};
