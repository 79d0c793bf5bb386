//! Core domain types for the Nevada UMKM console.
//!
//! Records here are exchanged verbatim with the remote Nevada API; the only
//! client-side logic layered on top is the pair of normalization contracts
//! (content-history flattening and the transaction amount fallback chain)
//! plus optional-field defaults applied at the presentation boundary.

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod customer;
pub mod error;
pub mod product;
pub mod transaction;

// Re-export common error type
pub use error::{NevadaError, Result};

use serde::{Deserialize, Serialize};

/// A server-assigned resource identifier.
///
/// The remote API is inconsistent about whether ids are JSON strings or
/// numbers; both forms round-trip verbatim. Foreign keys (`customer_id`,
/// `product_id`) are opaque and never interpreted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Str(String),
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}
