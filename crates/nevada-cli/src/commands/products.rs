//! The products page: catalogue CRUD.

use super::Context;
use crate::output::{self, format_idr};
use clap::Subcommand;
use nevada_client::products::ProductListParams;
use nevada_core::product::Product;
use nevada_core::Id;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List products
    List {
        #[arg(long)]
        skip: Option<i64>,
        #[arg(long, default_value_t = 50)]
        limit: i64,
        #[arg(long)]
        category: Option<String>,
        /// Only active products
        #[arg(long)]
        active: bool,
        #[arg(long)]
        umkm_id: Option<String>,
    },
    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        stock: Option<i64>,
        #[arg(long)]
        sku: Option<String>,
        /// Create as inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Update a product
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        stock: Option<i64>,
        #[arg(long)]
        sku: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
    /// Delete a product
    Delete { id: String },
}

pub async fn run(action: ProductAction) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;

    match action {
        ProductAction::List {
            skip,
            limit,
            category,
            active,
            umkm_id,
        } => {
            let umkm_id = ctx.resolve_umkm_id(umkm_id.as_deref())?;
            let params = ProductListParams {
                skip,
                limit: Some(limit),
                umkm_id: Some(umkm_id),
                category,
                is_active: active.then_some(true),
            };
            let products = ctx.client.list_products(&token, &params).await?;

            if products.is_empty() {
                println!("no products");
                return Ok(());
            }
            output::row(&[("ID", 10), ("NAME", 28), ("PRICE", 14), ("STOCK", 7), ("CATEGORY", 14), ("ACTIVE", 6)]);
            for product in &products {
                let id = product.id.as_ref().map(|i| i.to_string()).unwrap_or_default();
                output::row(&[
                    (&id, 10),
                    (&product.name, 28),
                    (&format_idr(product.price.unwrap_or(0.0)), 14),
                    (&product.stock.unwrap_or(0).to_string(), 7),
                    (product.category.as_deref().unwrap_or("-"), 14),
                    (if product.is_active.unwrap_or(true) { "yes" } else { "no" }, 6),
                ]);
            }
        }
        ProductAction::Create {
            name,
            price,
            category,
            description,
            stock,
            sku,
            inactive,
        } => {
            let user = ctx.user()?;
            let payload = Product {
                name,
                price,
                category,
                description,
                stock,
                sku,
                is_active: Some(!inactive),
                umkm_id: user.umkm_id.map(Id::from),
                ..Default::default()
            };
            let created = ctx.client.create_product(&token, &payload).await?;
            let id = created.id.map(|i| i.to_string()).unwrap_or_default();
            output::success(&format!("created product {} ({})", created.name, id));
        }
        ProductAction::Update {
            id,
            name,
            price,
            category,
            description,
            stock,
            sku,
            inactive,
        } => {
            let payload = Product {
                name,
                price,
                category,
                description,
                stock,
                sku,
                is_active: Some(!inactive),
                ..Default::default()
            };
            let updated = ctx
                .client
                .update_product(&token, &Id::from(id.as_str()), &payload)
                .await?;
            output::success(&format!("updated product {}", updated.name));
        }
        ProductAction::Delete { id } => {
            let message = ctx
                .client
                .delete_product(&token, &Id::from(id.as_str()))
                .await?;
            output::success(message.as_deref().unwrap_or("product deleted"));
        }
    }
    Ok(())
}
