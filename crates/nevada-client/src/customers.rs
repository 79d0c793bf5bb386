//! Customer CRUD endpoints.

use crate::http::{ApiClient, RequestBody};
use crate::query::QueryPairs;
use nevada_core::customer::Customer;
use nevada_core::{Id, Result};
use reqwest::Method;

/// Filters for `GET /api/v1/customers`.
#[derive(Debug, Clone, Default)]
pub struct CustomerListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub umkm_id: Option<Id>,
    pub search: Option<String>,
}

impl ApiClient {
    /// `GET /api/v1/customers`
    pub async fn list_customers(
        &self,
        token: &str,
        params: &CustomerListParams,
    ) -> Result<Vec<Customer>> {
        let query = QueryPairs::new()
            .maybe("skip", params.skip)
            .maybe("limit", params.limit)
            .maybe("umkm_id", params.umkm_id.as_ref())
            .maybe("search", params.search.as_deref())
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/customers{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `POST /api/v1/customers/` (the create route carries a trailing slash)
    pub async fn create_customer(&self, token: &str, payload: &Customer) -> Result<Customer> {
        self.send_json(
            Method::POST,
            "/api/v1/customers/",
            RequestBody::Json(serde_json::to_value(payload)?),
            Some(token),
        )
        .await
    }

    /// `PUT /api/v1/customers/{id}`
    pub async fn update_customer(
        &self,
        token: &str,
        customer_id: &Id,
        payload: &Customer,
    ) -> Result<Customer> {
        self.send_json(
            Method::PUT,
            &format!("/api/v1/customers/{}", customer_id),
            RequestBody::Json(serde_json::to_value(payload)?),
            Some(token),
        )
        .await
    }

    /// `DELETE /api/v1/customers/{id}`
    pub async fn delete_customer(&self, token: &str, customer_id: &Id) -> Result<Option<String>> {
        self.send_for_message(
            Method::DELETE,
            &format!("/api/v1/customers/{}", customer_id),
            Some(token),
        )
        .await
    }
}
