//! The transactions page.
//!
//! Submissions go through `Transaction::with_submitted_amount`, so both
//! `total_amount` and `final_amount` carry the entered amount; listings are
//! already normalized by the client layer.

use super::Context;
use crate::output::{self, format_idr};
use clap::Subcommand;
use nevada_client::transactions::TransactionListParams;
use nevada_core::transaction::Transaction;
use nevada_core::Id;

#[derive(Subcommand)]
pub enum TransactionAction {
    /// List transactions
    List {
        #[arg(long)]
        skip: Option<i64>,
        #[arg(long, default_value_t = 50)]
        limit: i64,
        #[arg(long)]
        payment_status: Option<String>,
        /// Filter start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// Filter end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        umkm_id: Option<String>,
    },
    /// Record a transaction
    Create {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        payment_method: Option<String>,
        #[arg(long)]
        payment_status: Option<String>,
        #[arg(long)]
        transaction_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        customer_id: Option<String>,
        #[arg(long)]
        product_id: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Attribute the sale to a user id
        #[arg(long)]
        user_id: Option<String>,
    },
    /// Update a transaction
    Update {
        id: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        payment_method: Option<String>,
        #[arg(long)]
        payment_status: Option<String>,
        #[arg(long)]
        transaction_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        customer_id: Option<String>,
        #[arg(long)]
        product_id: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete { id: String },
}

#[allow(clippy::too_many_arguments)]
fn build_payload(
    ctx: &Context,
    amount: f64,
    payment_method: Option<String>,
    payment_status: Option<String>,
    transaction_type: Option<String>,
    description: Option<String>,
    customer_id: Option<String>,
    product_id: Option<String>,
    date: Option<String>,
    notes: Option<String>,
) -> anyhow::Result<Transaction> {
    let user = ctx.user()?;
    let transaction_date =
        date.or_else(|| Some(chrono::Local::now().format("%Y-%m-%d").to_string()));
    Ok(Transaction {
        payment_method,
        payment_status,
        transaction_type,
        description,
        customer_id: customer_id.map(Id::from),
        product_id: product_id.map(Id::from),
        transaction_date,
        notes,
        umkm_id: user.umkm_id.map(Id::from),
        ..Default::default()
    }
    .with_submitted_amount(amount))
}

pub async fn run(action: TransactionAction) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;

    match action {
        TransactionAction::List {
            skip,
            limit,
            payment_status,
            start,
            end,
            umkm_id,
        } => {
            let umkm_id = ctx.resolve_umkm_id(umkm_id.as_deref())?;
            let params = TransactionListParams {
                skip,
                limit: Some(limit),
                umkm_id: Some(umkm_id),
                payment_status,
                start_date: start,
                end_date: end,
            };
            let transactions = ctx.client.list_transactions(&token, &params).await?;

            if transactions.is_empty() {
                println!("no transactions");
                return Ok(());
            }
            output::row(&[("ID", 10), ("DATE", 12), ("AMOUNT", 16), ("METHOD", 12), ("STATUS", 10)]);
            for tx in &transactions {
                let id = tx.id.as_ref().map(|i| i.to_string()).unwrap_or_default();
                output::row(&[
                    (&id, 10),
                    (tx.transaction_date.as_deref().unwrap_or("-"), 12),
                    (&format_idr(tx.display_amount()), 16),
                    (tx.payment_method.as_deref().unwrap_or("-"), 12),
                    (tx.payment_status.as_deref().unwrap_or("-"), 10),
                ]);
            }
        }
        TransactionAction::Create {
            amount,
            payment_method,
            payment_status,
            transaction_type,
            description,
            customer_id,
            product_id,
            date,
            notes,
            user_id,
        } => {
            let payload = build_payload(
                &ctx,
                amount,
                payment_method,
                payment_status,
                transaction_type,
                description,
                customer_id,
                product_id,
                date,
                notes,
            )?;
            let user_id = user_id.map(Id::from);
            let created = ctx
                .client
                .create_transaction(&token, &payload, user_id.as_ref())
                .await?;
            let id = created.id.as_ref().map(|i| i.to_string()).unwrap_or_default();
            output::success(&format!(
                "recorded transaction {} for {}",
                id,
                format_idr(created.display_amount())
            ));
        }
        TransactionAction::Update {
            id,
            amount,
            payment_method,
            payment_status,
            transaction_type,
            description,
            customer_id,
            product_id,
            date,
            notes,
        } => {
            let payload = build_payload(
                &ctx,
                amount,
                payment_method,
                payment_status,
                transaction_type,
                description,
                customer_id,
                product_id,
                date,
                notes,
            )?;
            let updated = ctx
                .client
                .update_transaction(&token, &Id::from(id.as_str()), &payload)
                .await?;
            output::success(&format!(
                "updated transaction, amount {}",
                format_idr(updated.display_amount())
            ));
        }
        TransactionAction::Delete { id } => {
            let message = ctx
                .client
                .delete_transaction(&token, &Id::from(id.as_str()))
                .await?;
            output::success(message.as_deref().unwrap_or("transaction deleted"));
        }
    }
    Ok(())
}
