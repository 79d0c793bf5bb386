//! `nevada` - terminal console for the Nevada UMKM management platform.
//!
//! Each subcommand is the terminal counterpart of one page of the web
//! console: it reads the shared session, calls the remote API, and renders
//! the response. All business logic stays on the server.

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "nevada")]
#[command(about = "Console for the Nevada UMKM management platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Business overview: metrics, top products, payment mix, AI insights
    Dashboard {
        /// Analysis window in days
        #[arg(long, default_value_t = 30)]
        days: u32,
        /// Tenant to inspect (admin only; others are pinned to their own)
        #[arg(long)]
        umkm_id: Option<String>,
    },
    /// Manage the product catalogue
    Products {
        #[command(subcommand)]
        action: commands::products::ProductAction,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: commands::customers::CustomerAction,
    },
    /// Manage transactions
    Transactions {
        #[command(subcommand)]
        action: commands::transactions::TransactionAction,
    },
    /// Monthly and sales reports
    Reports {
        /// Number of months in the monthly report
        #[arg(long, default_value_t = 6)]
        months: u32,
        /// Sales report start date (YYYY-MM-DD), defaults to 30 days ago
        #[arg(long)]
        start: Option<String>,
        /// Sales report end date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        umkm_id: Option<String>,
    },
    /// Talk to the content-generation agent
    Content {
        #[command(subcommand)]
        action: commands::content::ContentAction,
    },
    /// Upload a receipt image for OCR
    Ocr {
        /// Path to the receipt image
        file: std::path::PathBuf,
        /// Extra form fields as key=value
        #[arg(long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },
    /// Check whether the remote API is reachable
    Health,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        // The console analogue of a toast: one transient notice, the
        // process stays usable for the next invocation.
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),
        Commands::Dashboard { days, umkm_id } => {
            commands::dashboard::show(days, umkm_id.as_deref()).await
        }
        Commands::Products { action } => commands::products::run(action).await,
        Commands::Customers { action } => commands::customers::run(action).await,
        Commands::Transactions { action } => commands::transactions::run(action).await,
        Commands::Reports {
            months,
            start,
            end,
            umkm_id,
        } => commands::reports::show(months, start, end, umkm_id.as_deref()).await,
        Commands::Content { action } => commands::content::run(action).await,
        Commands::Ocr { file, fields } => commands::ocr::upload(&file, &fields).await,
        Commands::Health => commands::health::check().await,
    }
}
