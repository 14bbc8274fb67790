//! Session store
//!
//! All session mutation goes through the operations here; views read
//! snapshots and subscribe for changes. Overlapping in-flight operations are
//! serialized by a monotonic attempt id: every state-settling operation opens
//! a new attempt, and a response belonging to a superseded attempt is dropped
//! without touching the session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::warn;

use super::backend::{AuthBackend, SignIn};
use super::credentials::CredentialStore;
use super::error::AuthError;
use super::state::{Hydration, SessionSnapshot, SessionState, User};
use crate::client::{ApiError, TokenCell};

/// Handle returned by [`SessionStore::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&SessionSnapshot)>;

pub struct SessionStore {
    state: RefCell<SessionState>,
    credentials: Rc<dyn CredentialStore>,
    backend: Rc<dyn AuthBackend>,
    token_cell: TokenCell,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
    attempt: Cell<u64>,
}

impl SessionStore {
    pub fn new(
        credentials: Rc<dyn CredentialStore>,
        backend: Rc<dyn AuthBackend>,
        token_cell: TokenCell,
    ) -> Self {
        Self {
            state: RefCell::new(SessionState::default()),
            credentials,
            backend,
            token_cell,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            attempt: Cell::new(0),
        }
    }

    /// Current read-only snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().snapshot()
    }

    /// Subscribe to session changes. The callback fires after every
    /// externally visible mutation until [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(key, _)| *key != id.0);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn open_attempt(&self) -> u64 {
        let id = self.attempt.get() + 1;
        self.attempt.set(id);
        id
    }

    fn is_current(&self, attempt: u64) -> bool {
        self.attempt.get() == attempt
    }

    /// Reconstruct the session from the durable credential record.
    ///
    /// Never fails: any rejection of the stored token degrades to the
    /// logged-out state. No network call is made when no token is stored.
    pub async fn hydrate(&self) {
        let attempt = self.open_attempt();
        let Some(token) = self.credentials.load() else {
            self.state.borrow_mut().hydration = Hydration::Ready;
            self.notify();
            return;
        };
        self.resolve_token(token, attempt).await;
    }

    /// Mirror a credential change made by another tab.
    ///
    /// `None` means the other tab logged out; the durable record is already
    /// gone, so only the in-memory session is reset. A new token is adopted
    /// and re-resolved the same way hydrate resolves a stored one.
    pub async fn adopt_external(&self, token: Option<String>) {
        match token {
            None => {
                let _ = self.open_attempt();
                self.reset_in_memory();
            }
            Some(token) => {
                if self.state.borrow().token.as_deref() == Some(token.as_str()) {
                    return;
                }
                let attempt = self.open_attempt();
                self.resolve_token(token, attempt).await;
            }
        }
    }

    // Shared "token present" path for hydrate and cross-tab adoption: attach
    // the token, then resolve the user against the identity endpoint.
    async fn resolve_token(&self, token: String, attempt: u64) {
        self.state.borrow_mut().token = Some(token.clone());
        self.token_cell.set(Some(token.clone()));
        self.notify();

        match self.backend.identify(&token).await {
            Ok(user) if self.is_current(attempt) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.user = Some(user);
                    state.hydration = Hydration::Ready;
                }
                self.notify();
            }
            Err(err) if self.is_current(attempt) => {
                warn!("stored token rejected, dropping session: {err}");
                self.logout();
            }
            // Superseded; whoever superseded this attempt settles the state.
            _ => {}
        }
    }

    /// Sign in with credentials. On failure the session is left untouched
    /// and the server's message is surfaced for display.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let attempt = self.open_attempt();
        let result = self.backend.login(email, password).await;
        self.finish_sign_in(result, attempt)
    }

    /// Create an account. Success signs the new user in immediately, under
    /// the same contract as [`login`](Self::login).
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let attempt = self.open_attempt();
        let result = self.backend.register(email, username, password).await;
        self.finish_sign_in(result, attempt)
    }

    fn finish_sign_in(
        &self,
        result: Result<SignIn, ApiError>,
        attempt: u64,
    ) -> Result<(), AuthError> {
        match result {
            Ok(sign_in) => {
                if self.is_current(attempt) {
                    self.establish(sign_in.user, sign_in.session.access_token);
                }
                Ok(())
            }
            Err(err) => Err(AuthError::from_sign_in(&err)),
        }
    }

    fn establish(&self, user: User, token: String) {
        self.credentials.store(&token);
        self.token_cell.set(Some(token.clone()));
        {
            let mut state = self.state.borrow_mut();
            state.token = Some(token);
            state.user = Some(user);
            state.hydration = Hydration::Ready;
        }
        self.notify();
    }

    /// Drop the session. Synchronous, infallible, idempotent. Also
    /// invalidates any in-flight operation so a late response cannot
    /// resurrect the session.
    pub fn logout(&self) {
        let _ = self.open_attempt();
        self.credentials.clear();
        self.reset_in_memory();
    }

    fn reset_in_memory(&self) {
        self.token_cell.set(None);
        {
            let mut state = self.state.borrow_mut();
            state.token = None;
            state.user = None;
            state.hydration = Hydration::Ready;
        }
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::future::Future;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::pin_mut;
    use futures::task::noop_waker;

    use super::super::backend::SessionTokens;
    use super::*;

    #[derive(Default)]
    struct MemoryCredentials {
        token: RefCell<Option<String>>,
    }

    impl CredentialStore for MemoryCredentials {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn store(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct StubBackend {
        identify_results: RefCell<VecDeque<Result<User, ApiError>>>,
        sign_in_results: RefCell<VecDeque<Result<SignIn, ApiError>>>,
        identify_calls: Cell<usize>,
    }

    impl StubBackend {
        fn next_identify(&self) -> Result<User, ApiError> {
            self.identify_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected identify call")
        }

        fn next_sign_in(&self) -> Result<SignIn, ApiError> {
            self.sign_in_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected login/register call")
        }
    }

    #[async_trait(?Send)]
    impl AuthBackend for StubBackend {
        async fn identify(&self, _token: &str) -> Result<User, ApiError> {
            self.identify_calls.set(self.identify_calls.get() + 1);
            self.next_identify()
        }

        async fn login(&self, _email: &str, _password: &str) -> Result<SignIn, ApiError> {
            self.next_sign_in()
        }

        async fn register(
            &self,
            _email: &str,
            _username: &str,
            _password: &str,
        ) -> Result<SignIn, ApiError> {
            self.next_sign_in()
        }
    }

    fn user(id: &str, role: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            username: id.to_string(),
            avatar_url: None,
            role: role.to_string(),
        }
    }

    fn sign_in(user: &User, token: &str) -> SignIn {
        SignIn {
            user: user.clone(),
            session: SessionTokens {
                access_token: token.to_string(),
            },
        }
    }

    fn store_with(
        stored_token: Option<&str>,
        backend: Rc<StubBackend>,
    ) -> (SessionStore, Rc<MemoryCredentials>) {
        let credentials = Rc::new(MemoryCredentials {
            token: RefCell::new(stored_token.map(str::to_string)),
        });
        let store = SessionStore::new(credentials.clone(), backend, TokenCell::new());
        (store, credentials)
    }

    #[test]
    fn hydrate_without_stored_token_is_ready_and_offline() {
        let backend = Rc::new(StubBackend::default());
        let (store, _credentials) = store_with(None, backend.clone());

        block_on(store.hydrate());

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user, None);
        assert_eq!(snapshot.token, None);
        assert_eq!(backend.identify_calls.get(), 0);
    }

    #[test]
    fn hydrate_resolves_the_stored_token() {
        let backend = Rc::new(StubBackend::default());
        backend
            .identify_results
            .borrow_mut()
            .push_back(Ok(user("u1", "user")));
        let (store, credentials) = store_with(Some("T1"), backend);

        block_on(store.hydrate());

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.token.as_deref(), Some("T1"));
        assert_eq!(snapshot.user, Some(user("u1", "user")));
        assert_eq!(credentials.load().as_deref(), Some("T1"));
    }

    #[test]
    fn hydrate_failure_degrades_to_logged_out() {
        let backend = Rc::new(StubBackend::default());
        backend
            .identify_results
            .borrow_mut()
            .push_back(Err(ApiError::AuthenticationFailed("expired".into())));
        let (store, credentials) = store_with(Some("expired"), backend);

        block_on(store.hydrate());

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.token, None);
        assert_eq!(snapshot.user, None);
        assert_eq!(credentials.load(), None);
    }

    #[test]
    fn login_success_round_trips_token_and_user() {
        let backend = Rc::new(StubBackend::default());
        let admin = user("u2", "admin");
        backend
            .sign_in_results
            .borrow_mut()
            .push_back(Ok(sign_in(&admin, "T2")));
        let (store, credentials) = store_with(None, backend);

        block_on(store.hydrate());
        block_on(store.login("u2@example.com", "secret")).expect("login should succeed");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.token.as_deref(), Some("T2"));
        assert_eq!(snapshot.user, Some(admin));
        assert!(snapshot.is_admin);
        assert_eq!(credentials.load().as_deref(), Some("T2"));
    }

    #[test]
    fn login_failure_is_non_mutating_and_carries_the_server_message() {
        let backend = Rc::new(StubBackend::default());
        backend
            .sign_in_results
            .borrow_mut()
            .push_back(Err(ApiError::BadRequest("Invalid credentials".into())));
        let (store, credentials) = store_with(None, backend);

        block_on(store.hydrate());
        let before = store.snapshot();
        let err = block_on(store.login("u1@example.com", "wrong")).unwrap_err();

        assert_eq!(err, AuthError::Authentication("Invalid credentials".into()));
        assert_eq!(store.snapshot(), before);
        assert_eq!(credentials.load(), None);
    }

    #[test]
    fn register_establishes_a_session_immediately() {
        let backend = Rc::new(StubBackend::default());
        let fresh = user("u3", "user");
        backend
            .sign_in_results
            .borrow_mut()
            .push_back(Ok(sign_in(&fresh, "T3")));
        let (store, credentials) = store_with(None, backend);

        block_on(store.hydrate());
        block_on(store.register("u3@example.com", "u3", "secret"))
            .expect("register should succeed");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.user, Some(fresh));
        assert!(!snapshot.is_admin);
        assert_eq!(credentials.load().as_deref(), Some("T3"));
    }

    #[test]
    fn logout_is_idempotent_from_any_state() {
        let backend = Rc::new(StubBackend::default());
        backend
            .identify_results
            .borrow_mut()
            .push_back(Ok(user("u1", "admin")));
        let (store, credentials) = store_with(Some("T1"), backend);

        block_on(store.hydrate());
        for _ in 0..3 {
            store.logout();
            let snapshot = store.snapshot();
            assert_eq!(snapshot.token, None);
            assert_eq!(snapshot.user, None);
            assert!(!snapshot.is_admin);
            assert!(!snapshot.loading);
            assert_eq!(credentials.load(), None);
        }
    }

    #[test]
    fn external_token_removal_resets_without_a_network_call() {
        let backend = Rc::new(StubBackend::default());
        backend
            .identify_results
            .borrow_mut()
            .push_back(Ok(user("u1", "user")));
        let (store, _credentials) = store_with(Some("T1"), backend.clone());

        block_on(store.hydrate());
        assert_eq!(backend.identify_calls.get(), 1);

        // Another tab removed the token; its removal already cleared storage.
        block_on(store.adopt_external(None));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.token, None);
        assert_eq!(snapshot.user, None);
        assert_eq!(backend.identify_calls.get(), 1);
    }

    #[test]
    fn external_token_adoption_re_resolves_the_user() {
        let backend = Rc::new(StubBackend::default());
        backend
            .identify_results
            .borrow_mut()
            .push_back(Ok(user("u1", "user")));
        backend
            .identify_results
            .borrow_mut()
            .push_back(Ok(user("u9", "admin")));
        let (store, _credentials) = store_with(Some("T1"), backend.clone());

        block_on(store.hydrate());
        block_on(store.adopt_external(Some("T9".to_string())));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.token.as_deref(), Some("T9"));
        assert_eq!(snapshot.user, Some(user("u9", "admin")));

        // Re-announcing the token we already hold is a no-op.
        block_on(store.adopt_external(Some("T9".to_string())));
        assert_eq!(backend.identify_calls.get(), 2);
    }

    #[test]
    fn late_response_from_a_superseded_login_is_discarded() {
        struct DeferredBackend {
            rx: RefCell<Option<oneshot::Receiver<Result<SignIn, ApiError>>>>,
        }

        #[async_trait(?Send)]
        impl AuthBackend for DeferredBackend {
            async fn identify(&self, _token: &str) -> Result<User, ApiError> {
                unreachable!("identify is not exercised here")
            }

            async fn login(&self, _email: &str, _password: &str) -> Result<SignIn, ApiError> {
                let rx = self.rx.borrow_mut().take().expect("login called once");
                rx.await.expect("response sender dropped")
            }

            async fn register(
                &self,
                _email: &str,
                _username: &str,
                _password: &str,
            ) -> Result<SignIn, ApiError> {
                unreachable!("register is not exercised here")
            }
        }

        let (tx, rx) = oneshot::channel();
        let credentials = Rc::new(MemoryCredentials::default());
        let store = SessionStore::new(
            credentials.clone(),
            Rc::new(DeferredBackend {
                rx: RefCell::new(Some(rx)),
            }),
            TokenCell::new(),
        );

        let login = store.login("u1@example.com", "secret");
        pin_mut!(login);
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(matches!(login.as_mut().poll(&mut cx), Poll::Pending));

        // A newer operation supersedes the in-flight login.
        store.logout();

        tx.send(Ok(sign_in(&user("u1", "user"), "T-late")))
            .expect("receiver alive");
        block_on(login).expect("stale success still resolves");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.token, None);
        assert_eq!(snapshot.user, None);
        assert_eq!(credentials.load(), None);
    }

    #[test]
    fn subscription_reports_changes_until_unsubscribed() {
        let backend = Rc::new(StubBackend::default());
        let (store, _credentials) = store_with(None, backend);

        let seen: Rc<RefCell<Vec<SessionSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = store.subscribe(Rc::new(move |snapshot| {
            sink.borrow_mut().push(snapshot.clone());
        }));

        block_on(store.hydrate());
        assert_eq!(seen.borrow().len(), 1);
        assert!(!seen.borrow()[0].loading);

        store.unsubscribe(subscription);
        store.logout();
        assert_eq!(seen.borrow().len(), 1);
    }
}
