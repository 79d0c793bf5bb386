//! API reachability check.

use super::Context;
use crate::output;

pub async fn check() -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let status = ctx.client.health_check().await?;
    match status {
        Some(status) => output::success(&format!("{} is up ({})", ctx.client.base_url(), status)),
        None => output::success(&format!("{} is up", ctx.client.base_url())),
    }
    Ok(())
}
