//! Subcommand implementations, one module per console page.

pub mod auth;
pub mod content;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod ocr;
pub mod products;
pub mod reports;
pub mod transactions;

use nevada_client::ApiClient;
use nevada_core::auth::User;
use nevada_core::{Id, NevadaError};
use nevada_session::{ClientConfig, SessionStore};

/// Shared per-invocation context: configured API client plus the restored
/// session store.
pub struct Context {
    pub client: ApiClient,
    pub session: SessionStore,
}

impl Context {
    /// Loads configuration, builds the client, and restores any persisted
    /// session before the command runs (the CLI's equivalent of populating
    /// the auth context before first render).
    pub fn init() -> anyhow::Result<Self> {
        let config = ClientConfig::load()?;
        let client = ApiClient::new(config.api_url);
        let session = SessionStore::open_default()?;
        session.restore();
        Ok(Self { client, session })
    }

    /// Bearer token of the active session, or the login hint error.
    pub fn token(&self) -> anyhow::Result<String> {
        Ok(self.session.require_token()?)
    }

    /// User profile of the active session.
    pub fn user(&self) -> anyhow::Result<User> {
        self.session
            .user()
            .ok_or_else(|| NevadaError::unauthenticated("no active session, run `nevada login`").into())
    }

    /// Resolves the tenant to query. Admins may pass any tenant explicitly;
    /// everyone else is pinned to their own `umkm_id`.
    pub fn resolve_umkm_id(&self, requested: Option<&str>) -> anyhow::Result<Id> {
        let user = self.user()?;
        if user.is_admin() {
            if let Some(id) = requested.filter(|s| !s.is_empty()) {
                return Ok(Id::from(id));
            }
        } else if requested.is_some() {
            tracing::debug!("ignoring --umkm-id for non-admin user");
        }
        user.umkm_id
            .map(Id::from)
            .ok_or_else(|| NevadaError::config("profile carries no umkm_id; pass --umkm-id as admin").into())
    }
}
