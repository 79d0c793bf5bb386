//! The content-agent page: chat, history, and thread management.

use super::Context;
use crate::output;
use clap::Subcommand;
use colored::Colorize;
use nevada_core::chat::ChatRole;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ContentAction {
    /// Send a message to the content agent
    Chat {
        message: String,
        /// Attach an image (sent as multipart)
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Show the conversation history
    History {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Clear the conversation history
    Clear,
    /// Delete the agent thread
    DeleteThread,
}

pub async fn run(action: ContentAction) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;

    match action {
        ContentAction::Chat { message, image } => {
            // Echo the outgoing message before the call, like the page's
            // optimistic append; it stays on screen even if the call fails.
            println!("{} {}", "you:".bold(), message);

            let image = match image {
                Some(path) => {
                    let bytes = std::fs::read(&path)?;
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "image".to_string());
                    Some((file_name, bytes))
                }
                None => None,
            };

            let reply = ctx
                .client
                .send_content_message(&token, &message, image)
                .await?;
            println!("{} {}", "agent:".cyan().bold(), reply.reply);
        }
        ContentAction::History { limit } => {
            let conversation = ctx.client.content_conversation(&token, limit).await?;
            if conversation.is_empty() {
                println!("no history");
                return Ok(());
            }
            for message in &conversation {
                let label = match message.role {
                    ChatRole::User => "you:".bold(),
                    ChatRole::Assistant => "agent:".cyan().bold(),
                };
                println!("{} {}", label, message.message);
            }
        }
        ContentAction::Clear => {
            let message = ctx.client.clear_content_history(&token).await?;
            output::success(message.as_deref().unwrap_or("history cleared"));
        }
        ContentAction::DeleteThread => {
            let message = ctx.client.delete_content_thread(&token).await?;
            output::success(message.as_deref().unwrap_or("thread deleted"));
        }
    }
    Ok(())
}
