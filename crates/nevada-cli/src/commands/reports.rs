//! The reports page: monthly report, sales report, and top products,
//! fetched as one all-or-nothing batch.

use super::Context;
use crate::output::{self, format_idr};
use chrono::{Duration, Local};

/// Window for the monthly report: 1 to 12 months, anything else falls back
/// to 6.
fn clamp_months(months: u32) -> u32 {
    if (1..=12).contains(&months) {
        months
    } else {
        6
    }
}

pub async fn show(
    months: u32,
    start: Option<String>,
    end: Option<String>,
    umkm_id: Option<&str>,
) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;
    let umkm_id = ctx.resolve_umkm_id(umkm_id)?;
    let months = clamp_months(months);

    let today = Local::now().date_naive();
    let start = start.unwrap_or_else(|| (today - Duration::days(30)).format("%Y-%m-%d").to_string());
    let end = end.unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    let bundle = ctx
        .client
        .reports_bundle(&token, &umkm_id, Some(months), Some(&start), Some(&end))
        .await?;

    output::heading(&format!("Monthly report (last {} months)", months));
    if bundle.monthly.is_empty() {
        println!("no data");
    }
    for month in &bundle.monthly {
        output::row(&[
            (month.month.as_deref().unwrap_or("-"), 10),
            (&format_idr(month.revenue.unwrap_or(0.0)), 16),
            (&format!("{} tx", month.transaction_count.unwrap_or(0)), 10),
            (month.top_product.as_deref().unwrap_or("-"), 24),
        ]);
    }

    output::heading(&format!("Sales report {} .. {}", start, end));
    println!("{}", serde_json::to_string_pretty(&bundle.sales_report)?);

    output::heading("Top products");
    if bundle.top_products.is_empty() {
        println!("no data");
    }
    for (rank, product) in bundle.top_products.iter().enumerate() {
        output::row(&[
            (&format!("{}.", rank + 1), 3),
            (product.display_name(), 28),
            (&format_idr(product.display_revenue()), 16),
            (&format!("{} sold", product.display_sold()), 10),
        ]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_window_clamps_to_one_through_twelve() {
        assert_eq!(clamp_months(1), 1);
        assert_eq!(clamp_months(6), 6);
        assert_eq!(clamp_months(12), 12);
        assert_eq!(clamp_months(0), 6);
        assert_eq!(clamp_months(13), 6);
        assert_eq!(clamp_months(240), 6);
    }
}
