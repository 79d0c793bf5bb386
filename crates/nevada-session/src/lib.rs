//! Session and configuration layer for the Nevada console.
//!
//! The browser original kept two local-storage keys (bearer token and
//! serialized user profile); here they become two small files under the
//! platform config directory, owned by [`SessionStore`], which is the only
//! persisted client-side state.

pub mod config;
pub mod paths;
pub mod storage;
pub mod store;

pub use config::ClientConfig;
pub use paths::NevadaPaths;
pub use storage::SessionStorage;
pub use store::SessionStore;
