//! Analytics read models.
//!
//! All of these are computed server-side and are read-only on the client:
//! they live for one render cycle and are refetched on every explicit
//! refresh or tenant/timeframe change. Every field is optional because the
//! aggregation endpoints omit whatever they cannot compute.

use crate::Id;
use serde::{Deserialize, Serialize};

/// Daily revenue point in the dashboard summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySales {
    pub date: String,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub transactions: Option<i64>,
}

/// Response from `GET /api/v1/analytics/dashboard`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_transactions: Option<i64>,
    #[serde(default)]
    pub total_customers: Option<i64>,
    #[serde(default)]
    pub total_products: Option<i64>,
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    #[serde(default)]
    pub revenue_growth_percentage: Option<f64>,
    #[serde(default)]
    pub pending_transactions: Option<i64>,
    #[serde(default)]
    pub top_products: Option<Vec<TopProduct>>,
    #[serde(default)]
    pub payment_methods: Option<Vec<PaymentMethodStats>>,
    #[serde(default)]
    pub daily_sales: Option<Vec<DailySales>>,
}

/// One entry from `GET /api/v1/analytics/top-products`.
///
/// The endpoint has shipped two field vocabularies (`product_name`/
/// `total_revenue` vs `name`/`revenue`); both are kept and resolved by the
/// accessor methods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopProduct {
    #[serde(default)]
    pub product_id: Option<Id>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_sold: Option<i64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity_sold: Option<i64>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

impl TopProduct {
    /// Display name regardless of which vocabulary the server used.
    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(unnamed)")
    }

    /// Revenue regardless of which vocabulary the server used.
    pub fn display_revenue(&self) -> f64 {
        self.total_revenue.or(self.revenue).unwrap_or(0.0)
    }

    /// Units sold regardless of which vocabulary the server used.
    pub fn display_sold(&self) -> i64 {
        self.total_sold.or(self.quantity_sold).unwrap_or(0)
    }
}

/// One entry from `GET /api/v1/analytics/payment-methods`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentMethodStats {
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub percentage: Option<f64>,
}

impl PaymentMethodStats {
    /// Method label regardless of which field name the server used.
    pub fn display_method(&self) -> &str {
        self.payment_method
            .as_deref()
            .or(self.method.as_deref())
            .unwrap_or("(unknown)")
    }
}

/// One entry from `GET /api/v1/analytics/monthly-report`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyReport {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub transaction_count: Option<i64>,
    #[serde(default)]
    pub profit: Option<f64>,
    #[serde(default)]
    pub top_product: Option<String>,
}

/// Revenue/transaction predictions inside the AI insight payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InsightPredictions {
    #[serde(default)]
    pub next_month_revenue_estimate: Option<f64>,
    #[serde(default)]
    pub next_month_transaction_estimate: Option<f64>,
    #[serde(default)]
    pub confidence: Option<serde_json::Value>,
}

/// Response from `GET /api/v1/analytics/ai-insights`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiInsights {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub trends: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub predictions: Option<InsightPredictions>,
}

/// Score breakdown inside the business health payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthBreakdown {
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    #[serde(default)]
    pub consistency: Option<f64>,
    #[serde(default)]
    pub diversification: Option<f64>,
    #[serde(default)]
    pub customer_base: Option<f64>,
}

/// Response from `GET /api/v1/analytics/business-health`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessHealth {
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub breakdown: Option<HealthBreakdown>,
    #[serde(default)]
    pub max_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_product_resolves_either_vocabulary() {
        let a: TopProduct = serde_json::from_str(
            r#"{"product_name":"Kopi","total_revenue":120000,"total_sold":40}"#,
        )
        .unwrap();
        assert_eq!(a.display_name(), "Kopi");
        assert_eq!(a.display_revenue(), 120000.0);
        assert_eq!(a.display_sold(), 40);

        let b: TopProduct =
            serde_json::from_str(r#"{"name":"Teh","revenue":80000,"quantity_sold":25}"#).unwrap();
        assert_eq!(b.display_name(), "Teh");
        assert_eq!(b.display_revenue(), 80000.0);
        assert_eq!(b.display_sold(), 25);
    }

    #[test]
    fn test_payment_method_label_fallback() {
        let stats = PaymentMethodStats {
            method: Some("qris".into()),
            ..Default::default()
        };
        assert_eq!(stats.display_method(), "qris");
        assert_eq!(PaymentMethodStats::default().display_method(), "(unknown)");
    }
}
