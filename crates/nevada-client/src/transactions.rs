//! Transaction CRUD endpoints.
//!
//! Records coming off the wire are run through the amount fallback chain
//! (`Transaction::normalized`) so every caller sees a consistent amount
//! regardless of which field the server populated.

use crate::http::{ApiClient, RequestBody};
use crate::query::QueryPairs;
use nevada_core::transaction::Transaction;
use nevada_core::{Id, Result};
use reqwest::Method;

/// Filters for `GET /api/v1/transactions`.
#[derive(Debug, Clone, Default)]
pub struct TransactionListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub umkm_id: Option<Id>,
    pub payment_status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ApiClient {
    /// `GET /api/v1/transactions`
    pub async fn list_transactions(
        &self,
        token: &str,
        params: &TransactionListParams,
    ) -> Result<Vec<Transaction>> {
        let query = QueryPairs::new()
            .maybe("skip", params.skip)
            .maybe("limit", params.limit)
            .maybe("umkm_id", params.umkm_id.as_ref())
            .maybe("payment_status", params.payment_status.as_deref())
            .maybe("start_date", params.start_date.as_deref())
            .maybe("end_date", params.end_date.as_deref())
            .to_query_string();
        let transactions: Vec<Transaction> = self
            .send_json(
                Method::GET,
                &format!("/api/v1/transactions{}", query),
                RequestBody::Empty,
                Some(token),
            )
            .await?;
        Ok(transactions.into_iter().map(Transaction::normalized).collect())
    }

    /// `POST /api/v1/transactions` — create accepts an optional `user_id`
    /// query parameter attributing the sale.
    pub async fn create_transaction(
        &self,
        token: &str,
        payload: &Transaction,
        user_id: Option<&Id>,
    ) -> Result<Transaction> {
        let query = QueryPairs::new().maybe("user_id", user_id).to_query_string();
        let created: Transaction = self
            .send_json(
                Method::POST,
                &format!("/api/v1/transactions{}", query),
                RequestBody::Json(serde_json::to_value(payload)?),
                Some(token),
            )
            .await?;
        Ok(created.normalized())
    }

    /// `PUT /api/v1/transactions/{id}`
    pub async fn update_transaction(
        &self,
        token: &str,
        transaction_id: &Id,
        payload: &Transaction,
    ) -> Result<Transaction> {
        let updated: Transaction = self
            .send_json(
                Method::PUT,
                &format!("/api/v1/transactions/{}", transaction_id),
                RequestBody::Json(serde_json::to_value(payload)?),
                Some(token),
            )
            .await?;
        Ok(updated.normalized())
    }

    /// `DELETE /api/v1/transactions/{id}`
    pub async fn delete_transaction(
        &self,
        token: &str,
        transaction_id: &Id,
    ) -> Result<Option<String>> {
        self.send_for_message(
            Method::DELETE,
            &format!("/api/v1/transactions/{}", transaction_id),
            Some(token),
        )
        .await
    }
}
