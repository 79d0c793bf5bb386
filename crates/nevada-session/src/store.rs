//! The session store.
//!
//! Owns the current bearer token and user profile, persists them through
//! [`SessionStorage`], and exposes the lifecycle the rest of the console
//! consumes: restore on startup, replace on login, clear on logout.

use crate::storage::SessionStorage;
use nevada_client::ApiClient;
use nevada_core::auth::{LoginResponse, User};
use nevada_core::{NevadaError, Result};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Shared session state with startup/login/logout lifecycle.
///
/// Reads are cheap snapshots; both halves of the session are replaced or
/// cleared under a single write lock, so no reader ever observes a token
/// without its user or vice versa.
pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: SessionStorage,
    loading: RwLock<bool>,
}

impl SessionStore {
    /// Creates a store over the given storage. The store reports
    /// `loading() == true` until [`restore`](Self::restore) has run.
    pub fn new(storage: SessionStorage) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            storage,
            loading: RwLock::new(true),
        }
    }

    /// Creates a store at the default Nevada config location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(SessionStorage::new()?))
    }

    /// Restores the persisted session, if any. Always clears the loading
    /// flag, found or not.
    pub fn restore(&self) {
        if let Some((token, user)) = self.storage.load() {
            tracing::debug!(user_id = %user.id, "restored persisted session");
            let mut state = self.state.write().expect("session lock poisoned");
            state.token = Some(token);
            state.user = Some(user);
        }
        *self.loading.write().expect("session lock poisoned") = false;
    }

    /// True while the startup restore has not yet completed. Protected
    /// operations should wait for this to clear before deciding the user is
    /// unauthenticated.
    pub fn loading(&self) -> bool {
        *self.loading.read().expect("session lock poisoned")
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.state.read().expect("session lock poisoned").token.clone()
    }

    /// Current user profile, if any.
    pub fn user(&self) -> Option<User> {
        self.state.read().expect("session lock poisoned").user.clone()
    }

    /// True iff both token and user are present.
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.read().expect("session lock poisoned");
        state.token.is_some() && state.user.is_some()
    }

    /// Returns the bearer token or an authentication error telling the
    /// caller to log in first. The console's stand-in for the login
    /// redirect of the original route guard.
    pub fn require_token(&self) -> Result<String> {
        self.token()
            .ok_or_else(|| NevadaError::unauthenticated("no active session, run `nevada login`"))
    }

    /// Calls the authentication endpoint and, on success, replaces token and
    /// user atomically and persists both. On failure the prior state is
    /// untouched and the error propagates to the caller.
    pub async fn login(&self, client: &ApiClient, email: &str, password: &str) -> Result<User> {
        let response = client.login(email, password).await?;
        self.apply_login(response)
    }

    /// Installs a successful login response: persist first, then swap the
    /// in-memory pair under one write lock.
    pub fn apply_login(&self, response: LoginResponse) -> Result<User> {
        self.storage.save(&response.access_token, &response.user)?;

        let mut state = self.state.write().expect("session lock poisoned");
        state.token = Some(response.access_token);
        state.user = Some(response.user.clone());
        Ok(response.user)
    }

    /// Clears token, user, and persisted storage. No remote call is made.
    pub fn logout(&self) -> Result<()> {
        {
            let mut state = self.state.write().expect("session lock poisoned");
            state.token = None;
            state.user = None;
        }
        self.storage.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn login_response() -> LoginResponse {
        LoginResponse {
            access_token: "tok-1".into(),
            token_type: Some("bearer".into()),
            user: User {
                id: "u1".into(),
                email: Some("owner@warung.id".into()),
                name: None,
                role: Some("owner".into()),
                umkm_id: Some("m1".into()),
                umkm_name: None,
            },
        }
    }

    #[test]
    fn test_starts_loading_until_restore() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(SessionStorage::with_dir(temp_dir.path()));

        assert!(store.loading());
        store.restore();
        assert!(!store.loading());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_apply_login_authenticates_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(SessionStorage::with_dir(temp_dir.path()));
        store.restore();

        store.apply_login(login_response()).unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(store.user().unwrap().id, "u1");

        // Persisted: a fresh store over the same directory sees the session.
        let fresh = SessionStore::new(SessionStorage::with_dir(temp_dir.path()));
        fresh.restore();
        assert!(fresh.is_authenticated());
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(SessionStorage::with_dir(temp_dir.path()));
        store.restore();
        store.apply_login(login_response()).unwrap();

        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.require_token().is_err());

        let fresh = SessionStore::new(SessionStorage::with_dir(temp_dir.path()));
        fresh.restore();
        assert!(!fresh.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_prior_state_untouched() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let body = r#"{"detail":"invalid credentials"}"#;
            let response = format!(
                "HTTP/1.1 401 Unauthorized\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
        });

        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(SessionStorage::with_dir(temp_dir.path()));
        store.restore();
        store.apply_login(login_response()).unwrap();

        let client = ApiClient::new(format!("http://{}", addr));
        let err = store
            .login(&client, "owner@warung.id", "wrong")
            .await
            .unwrap_err();

        assert!(err.is_auth_failure());
        assert_eq!(err.to_string(), "invalid credentials");
        // Prior session still intact.
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }
}
