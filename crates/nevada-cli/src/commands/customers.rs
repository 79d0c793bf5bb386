//! The customers page.

use super::Context;
use crate::output;
use clap::Subcommand;
use nevada_client::customers::CustomerListParams;
use nevada_core::customer::Customer;
use nevada_core::Id;

#[derive(Subcommand)]
pub enum CustomerAction {
    /// List customers
    List {
        #[arg(long)]
        skip: Option<i64>,
        #[arg(long, default_value_t = 50)]
        limit: i64,
        /// Filter by name/contact
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        umkm_id: Option<String>,
    },
    /// Create a customer
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a customer
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a customer
    Delete { id: String },
}

pub async fn run(action: CustomerAction) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;

    match action {
        CustomerAction::List {
            skip,
            limit,
            search,
            umkm_id,
        } => {
            let umkm_id = ctx.resolve_umkm_id(umkm_id.as_deref())?;
            let params = CustomerListParams {
                skip,
                limit: Some(limit),
                umkm_id: Some(umkm_id),
                search,
            };
            let customers = ctx.client.list_customers(&token, &params).await?;

            if customers.is_empty() {
                println!("no customers");
                return Ok(());
            }
            output::row(&[("ID", 10), ("NAME", 26), ("EMAIL", 26), ("PHONE", 16)]);
            for customer in &customers {
                let id = customer.id.as_ref().map(|i| i.to_string()).unwrap_or_default();
                output::row(&[
                    (&id, 10),
                    (&customer.name, 26),
                    (customer.email.as_deref().unwrap_or("-"), 26),
                    (customer.phone.as_deref().unwrap_or("-"), 16),
                ]);
            }
        }
        CustomerAction::Create {
            name,
            email,
            phone,
            address,
            notes,
        } => {
            let user = ctx.user()?;
            let payload = Customer {
                name,
                email,
                phone,
                address,
                notes,
                umkm_id: user.umkm_id.map(Id::from),
                ..Default::default()
            };
            let created = ctx.client.create_customer(&token, &payload).await?;
            let id = created.id.map(|i| i.to_string()).unwrap_or_default();
            output::success(&format!("created customer {} ({})", created.name, id));
        }
        CustomerAction::Update {
            id,
            name,
            email,
            phone,
            address,
            notes,
        } => {
            let payload = Customer {
                name,
                email,
                phone,
                address,
                notes,
                ..Default::default()
            };
            let updated = ctx
                .client
                .update_customer(&token, &Id::from(id.as_str()), &payload)
                .await?;
            output::success(&format!("updated customer {}", updated.name));
        }
        CustomerAction::Delete { id } => {
            let message = ctx
                .client
                .delete_customer(&token, &Id::from(id.as_str()))
                .await?;
            output::success(message.as_deref().unwrap_or("customer deleted"));
        }
    }
    Ok(())
}
