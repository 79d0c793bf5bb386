//! Product CRUD endpoints.

use crate::http::{ApiClient, RequestBody};
use crate::query::QueryPairs;
use nevada_core::product::Product;
use nevada_core::{Id, Result};
use reqwest::Method;

/// Filters for `GET /api/v1/products`.
#[derive(Debug, Clone, Default)]
pub struct ProductListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub umkm_id: Option<Id>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl ApiClient {
    /// `GET /api/v1/products`
    pub async fn list_products(
        &self,
        token: &str,
        params: &ProductListParams,
    ) -> Result<Vec<Product>> {
        let query = QueryPairs::new()
            .maybe("skip", params.skip)
            .maybe("limit", params.limit)
            .maybe("umkm_id", params.umkm_id.as_ref())
            .maybe("category", params.category.as_deref())
            .maybe("is_active", params.is_active)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/products{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `POST /api/v1/products/` (the create route carries a trailing slash)
    pub async fn create_product(&self, token: &str, payload: &Product) -> Result<Product> {
        self.send_json(
            Method::POST,
            "/api/v1/products/",
            RequestBody::Json(serde_json::to_value(payload)?),
            Some(token),
        )
        .await
    }

    /// `PUT /api/v1/products/{id}`
    pub async fn update_product(
        &self,
        token: &str,
        product_id: &Id,
        payload: &Product,
    ) -> Result<Product> {
        self.send_json(
            Method::PUT,
            &format!("/api/v1/products/{}", product_id),
            RequestBody::Json(serde_json::to_value(payload)?),
            Some(token),
        )
        .await
    }

    /// `DELETE /api/v1/products/{id}`
    pub async fn delete_product(&self, token: &str, product_id: &Id) -> Result<Option<String>> {
        self.send_for_message(
            Method::DELETE,
            &format!("/api/v1/products/{}", product_id),
            Some(token),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Minimal stateful stand-in for the products resource: POST stores the
    /// payload (assigning an id), GET returns everything stored so far.
    async fn products_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let store: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let store = store.clone();
                tokio::spawn(async move {
                    let mut raw = Vec::new();
                    let mut buf = [0u8; 4096];
                    loop {
                        let read = tokio::time::timeout(
                            std::time::Duration::from_millis(200),
                            stream.read(&mut buf),
                        )
                        .await;
                        match read {
                            Ok(Ok(0)) | Err(_) => break,
                            Ok(Ok(n)) => raw.extend_from_slice(&buf[..n]),
                            Ok(Err(_)) => break,
                        }
                    }
                    let request = String::from_utf8_lossy(&raw).to_string();

                    let body = if request.starts_with("POST") {
                        let payload = request
                            .split_once("\r\n\r\n")
                            .map(|(_, b)| b)
                            .unwrap_or_default();
                        let mut record: Value =
                            serde_json::from_str(payload).unwrap_or(Value::Null);
                        record["id"] = Value::from(1);
                        store.lock().unwrap().push(record.clone());
                        record.to_string()
                    } else {
                        Value::from(store.lock().unwrap().clone()).to_string()
                    };

                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.flush().await;
                });
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_create_then_list_round_trips_the_payload() {
        let base = products_server().await;
        let client = ApiClient::new(base);

        let payload = Product {
            name: "Kopi Susu".into(),
            price: Some(18000.0),
            category: Some("minuman".into()),
            stock: Some(12),
            is_active: Some(true),
            umkm_id: Some(Id::from("m1")),
            ..Default::default()
        };

        let created = client.create_product("tok", &payload).await.unwrap();
        assert!(created.id.is_some());

        let listed = client
            .list_products("tok", &ProductListParams::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        let fetched = &listed[0];
        assert_eq!(fetched.name, payload.name);
        assert_eq!(fetched.price, payload.price);
        assert_eq!(fetched.category, payload.category);
        assert_eq!(fetched.stock, payload.stock);
        assert_eq!(fetched.umkm_id, payload.umkm_id);
        assert_eq!(fetched.id, Some(Id::Num(1)));
    }
}
