//! The dashboard page: five analytics reads joined all-or-nothing.

use super::Context;
use crate::output::{self, format_idr, format_percent};
use colored::Colorize;

pub async fn show(days: u32, umkm_id: Option<&str>) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;
    let umkm_id = ctx.resolve_umkm_id(umkm_id)?;

    // One failed call fails the whole batch; nothing partial is rendered.
    let bundle = ctx
        .client
        .dashboard_bundle(&token, &umkm_id, Some(days))
        .await?;

    output::heading(&format!("Overview (last {} days)", days));
    let d = &bundle.dashboard;
    println!(
        "revenue:      {}  ({} growth)",
        format_idr(d.total_revenue.unwrap_or(0.0)),
        format_percent(d.revenue_growth_percentage.or(d.revenue_growth))
    );
    println!("transactions: {}", d.total_transactions.unwrap_or(0));
    println!("customers:    {}", d.total_customers.unwrap_or(0));
    println!("products:     {}", d.total_products.unwrap_or(0));
    if let Some(pending) = d.pending_transactions {
        println!("pending:      {}", pending);
    }

    if !bundle.top_products.is_empty() {
        output::heading("Top products");
        for (rank, product) in bundle.top_products.iter().enumerate() {
            output::row(&[
                (&format!("{}.", rank + 1), 3),
                (product.display_name(), 28),
                (&format_idr(product.display_revenue()), 16),
                (&format!("{} sold", product.display_sold()), 10),
            ]);
        }
    }

    if !bundle.payment_methods.is_empty() {
        output::heading("Payment methods");
        for stats in &bundle.payment_methods {
            output::row(&[
                (stats.display_method(), 16),
                (&format_idr(stats.total_amount.unwrap_or(0.0)), 16),
                (&format!("{}x", stats.count.unwrap_or(0)), 8),
                (&format_percent(stats.percentage), 8),
            ]);
        }
    }

    let insights = &bundle.ai_insights;
    if insights.summary.is_some() || insights.recommendations.is_some() {
        output::heading("AI insights");
        if let Some(summary) = &insights.summary {
            println!("{}", summary);
        }
        for trend in insights.trends.iter().flatten() {
            println!("  {} {}", "~".cyan(), trend);
        }
        for rec in insights.recommendations.iter().flatten() {
            println!("  {} {}", "*".green(), rec);
        }
        if let Some(predictions) = &insights.predictions {
            if let Some(revenue) = predictions.next_month_revenue_estimate {
                println!("next month revenue estimate: {}", format_idr(revenue));
            }
        }
    }

    let health = &bundle.business_health;
    output::heading("Business health");
    println!(
        "score: {:.0}/{:.0} ({})",
        health.total_score.unwrap_or(0.0),
        health.max_score.unwrap_or(100.0),
        health.status.as_deref().unwrap_or("unknown")
    );
    if let Some(message) = &health.message {
        println!("{}", message);
    }

    Ok(())
}
