//! Session provider and hooks
//!
//! Builds the session stack once per application (token cell, API client,
//! store), hydrates on mount, and mirrors cross-tab credential changes from
//! the browser storage event into the store.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::StorageEvent;
use yew::prelude::*;

use super::backend::HttpAuthBackend;
use super::credentials::LocalStorageCredentials;
use super::error::AuthError;
use super::state::{SessionSnapshot, User};
use super::store::SessionStore;
use crate::client::{ApiClient, TokenCell};
use crate::config::{api_base_url, AppConfig};

/// Context value handed to views: a read-only snapshot plus the operations.
///
/// Views never mutate the snapshot; all writes go through the store.
#[derive(Clone)]
pub struct SessionHandle {
    snapshot: SessionSnapshot,
    store: Rc<SessionStore>,
    client: ApiClient,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        // Re-render is driven by snapshot changes; store and client are
        // stable for the provider's lifetime.
        self.snapshot == other.snapshot
    }
}

impl SessionHandle {
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    pub fn user(&self) -> Option<&User> {
        self.snapshot.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot.is_admin
    }

    pub fn loading(&self) -> bool {
        self.snapshot.loading
    }

    /// Client for the REST services; reads the session token at call time
    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.store.login(email, password).await
    }

    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        self.store.register(email, username, password).await
    }

    pub fn logout(&self) {
        self.store.logout();
    }
}

pub type SessionContext = SessionHandle;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let stack = use_memo((), |()| {
        let token_cell = TokenCell::new();
        let client = ApiClient::new(api_base_url(), token_cell.clone());
        let store = Rc::new(SessionStore::new(
            Rc::new(LocalStorageCredentials),
            Rc::new(HttpAuthBackend::new(client.clone())),
            token_cell,
        ));
        (store, client)
    });
    let (store, client) = (*stack).clone();

    let snapshot = use_state(|| store.snapshot());

    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |()| {
            let subscription = store.subscribe(Rc::new(move |current: &SessionSnapshot| {
                snapshot.set(current.clone());
            }));

            {
                let store = store.clone();
                spawn_local(async move {
                    store.hydrate().await;
                });
            }

            // Login/logout in another tab arrives as a storage event for the
            // token key; a cleared storage area arrives with no key at all.
            let storage_listener = web_sys::window().map(|window| {
                let store = store.clone();
                EventListener::new(&window, "storage", move |event| {
                    let Some(event) = event.dyn_ref::<StorageEvent>() else {
                        return;
                    };
                    if event.key().is_some_and(|key| key != AppConfig::TOKEN_KEY) {
                        return;
                    }
                    let store = store.clone();
                    let value = event.new_value();
                    spawn_local(async move {
                        store.adopt_external(value).await;
                    });
                })
            });

            move || {
                store.unsubscribe(subscription);
                drop(storage_listener);
            }
        });
    }

    let handle = SessionHandle {
        snapshot: (*snapshot).clone(),
        store,
        client,
    };

    html! {
        <ContextProvider<SessionContext> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to get the session handle
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap the app in SessionProvider")
}

/// Hook to get the current user
#[hook]
pub fn use_current_user() -> Option<User> {
    use_session().user().cloned()
}

/// Hook to check whether a user is signed in
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().user().is_some()
}
