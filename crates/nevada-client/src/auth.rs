//! Authentication and service health endpoints.

use crate::http::{ApiClient, RequestBody};
use nevada_core::auth::LoginResponse;
use nevada_core::Result;
use reqwest::Method;
use serde_json::json;

impl ApiClient {
    /// `POST /api/v1/login` — exchanges credentials for a bearer token and
    /// the user profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.send_json(
            Method::POST,
            "/api/v1/login",
            RequestBody::Json(json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    /// `GET /` — unauthenticated health check. Returns the server's status
    /// string when it reports one.
    pub async fn health_check(&self) -> Result<Option<String>> {
        let body = self.send(Method::GET, "/", RequestBody::Empty, None, &[]).await?;
        Ok(body
            .as_ref()
            .and_then(|b| b.get("status"))
            .and_then(|s| s.as_str())
            .map(|s| s.to_string()))
    }
}
