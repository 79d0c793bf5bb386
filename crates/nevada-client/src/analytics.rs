//! Analytics read endpoints and the dashboard/report fan-out bundles.

use crate::http::{ApiClient, RequestBody};
use crate::query::QueryPairs;
use nevada_core::analytics::{
    AiInsights, BusinessHealth, DashboardData, MonthlyReport, PaymentMethodStats, TopProduct,
};
use nevada_core::{Id, Result};
use reqwest::Method;
use serde_json::Value;

/// Everything the dashboard view renders, fetched as one all-or-nothing
/// batch.
#[derive(Debug, Clone)]
pub struct DashboardBundle {
    pub dashboard: DashboardData,
    pub top_products: Vec<TopProduct>,
    pub payment_methods: Vec<PaymentMethodStats>,
    pub ai_insights: AiInsights,
    pub business_health: BusinessHealth,
}

/// Everything the reports view renders, fetched as one all-or-nothing batch.
#[derive(Debug, Clone)]
pub struct ReportsBundle {
    pub monthly: Vec<MonthlyReport>,
    pub sales_report: Value,
    pub top_products: Vec<TopProduct>,
}

impl ApiClient {
    /// `GET /api/v1/analytics/dashboard`
    pub async fn dashboard(
        &self,
        token: &str,
        umkm_id: &Id,
        days: Option<u32>,
    ) -> Result<DashboardData> {
        let query = QueryPairs::new()
            .pair("umkm_id", umkm_id)
            .maybe("days", days)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/dashboard{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `GET /api/v1/analytics/sales-report` — the report shape varies by
    /// period, so it stays an untyped JSON value.
    pub async fn sales_report(
        &self,
        token: &str,
        umkm_id: &Id,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Value> {
        let query = QueryPairs::new()
            .pair("umkm_id", umkm_id)
            .maybe("start_date", start_date)
            .maybe("end_date", end_date)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/sales-report{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `GET /api/v1/analytics/top-products`
    pub async fn top_products(
        &self,
        token: &str,
        umkm_id: &Id,
        limit: Option<u32>,
        days: Option<u32>,
    ) -> Result<Vec<TopProduct>> {
        let query = QueryPairs::new()
            .pair("umkm_id", umkm_id)
            .maybe("limit", limit)
            .maybe("days", days)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/top-products{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `GET /api/v1/analytics/monthly-report`
    pub async fn monthly_report(
        &self,
        token: &str,
        umkm_id: &Id,
        months: Option<u32>,
    ) -> Result<Vec<MonthlyReport>> {
        let query = QueryPairs::new()
            .pair("umkm_id", umkm_id)
            .maybe("months", months)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/monthly-report{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `GET /api/v1/analytics/payment-methods`
    pub async fn payment_methods(
        &self,
        token: &str,
        umkm_id: &Id,
        days: Option<u32>,
    ) -> Result<Vec<PaymentMethodStats>> {
        let query = QueryPairs::new()
            .pair("umkm_id", umkm_id)
            .maybe("days", days)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/payment-methods{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `GET /api/v1/analytics/ai-insights`
    pub async fn ai_insights(
        &self,
        token: &str,
        umkm_id: &Id,
        days: Option<u32>,
    ) -> Result<AiInsights> {
        let query = QueryPairs::new()
            .pair("umkm_id", umkm_id)
            .maybe("days", days)
            .to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/ai-insights{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// `GET /api/v1/analytics/business-health`
    pub async fn business_health(&self, token: &str, umkm_id: &Id) -> Result<BusinessHealth> {
        let query = QueryPairs::new().pair("umkm_id", umkm_id).to_query_string();
        self.send_json(
            Method::GET,
            &format!("/api/v1/analytics/business-health{}", query),
            RequestBody::Empty,
            Some(token),
        )
        .await
    }

    /// Issues the five dashboard reads concurrently and joins them
    /// all-or-nothing: if any one fails, the whole bundle fails and nothing
    /// partial is returned.
    pub async fn dashboard_bundle(
        &self,
        token: &str,
        umkm_id: &Id,
        days: Option<u32>,
    ) -> Result<DashboardBundle> {
        let (dashboard, top_products, payment_methods, ai_insights, business_health) = tokio::try_join!(
            self.dashboard(token, umkm_id, days),
            self.top_products(token, umkm_id, Some(10), days),
            self.payment_methods(token, umkm_id, days),
            self.ai_insights(token, umkm_id, days),
            self.business_health(token, umkm_id),
        )?;
        Ok(DashboardBundle {
            dashboard,
            top_products,
            payment_methods,
            ai_insights,
            business_health,
        })
    }

    /// Issues the three report reads concurrently, all-or-nothing.
    pub async fn reports_bundle(
        &self,
        token: &str,
        umkm_id: &Id,
        months: Option<u32>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<ReportsBundle> {
        let (monthly, sales_report, top_products) = tokio::try_join!(
            self.monthly_report(token, umkm_id, months),
            self.sales_report(token, umkm_id, start_date, end_date),
            self.top_products(token, umkm_id, Some(5), None),
        )?;
        Ok(ReportsBundle {
            monthly,
            sales_report,
            top_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves connections until dropped; `ai-insights` requests fail with a
    /// 500, everything else succeeds with an empty object/array as the path
    /// shape requires.
    async fn partial_failure_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = stream.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    let first_line = request.lines().next().unwrap_or_default().to_string();

                    let (status, body) = if first_line.contains("ai-insights") {
                        ("500 Internal Server Error", r#"{"detail":"insight model unavailable"}"#)
                    } else if first_line.contains("top-products")
                        || first_line.contains("payment-methods")
                        || first_line.contains("monthly-report")
                    {
                        ("200 OK", "[]")
                    } else {
                        ("200 OK", "{}")
                    };

                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
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
    async fn test_dashboard_bundle_fails_whole_when_one_call_fails() {
        let base = partial_failure_server().await;
        let client = ApiClient::new(base);
        let umkm_id = Id::from("m1");

        let err = client
            .dashboard_bundle("tok", &umkm_id, Some(30))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "insight model unavailable");
    }

    #[tokio::test]
    async fn test_reports_bundle_succeeds_when_all_calls_succeed() {
        let base = partial_failure_server().await;
        let client = ApiClient::new(base);
        let umkm_id = Id::from("m1");

        let bundle = client
            .reports_bundle("tok", &umkm_id, Some(6), None, None)
            .await
            .unwrap();

        assert!(bundle.monthly.is_empty());
        assert!(bundle.top_products.is_empty());
    }
}
