//! HTTP client for the Nevada UMKM platform API.
//!
//! [`ApiClient`] carries one method per remote operation; every method is a
//! thin composition of the query encoder and the request executor. All
//! validation is deferred to the remote API, and errors propagate unchanged
//! to the caller.

pub mod analytics;
pub mod auth;
pub mod content_agent;
pub mod customers;
pub mod http;
pub mod ocr;
pub mod products;
pub mod query;
pub mod transactions;

pub use http::{ApiClient, RequestBody};
pub use query::{QueryPairs, QueryValue};
