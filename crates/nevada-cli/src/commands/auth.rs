//! Login, logout, and session inspection.

use super::Context;
use crate::output;
use colored::Colorize;

pub async fn login(email: &str, password: &str) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let user = ctx.session.login(&ctx.client, email, password).await?;

    let name = user.name.or(user.email).unwrap_or(user.id);
    let tenant = user.umkm_name.or(user.umkm_id).unwrap_or_default();
    if tenant.is_empty() {
        output::success(&format!("logged in as {}", name));
    } else {
        output::success(&format!("logged in as {} ({})", name, tenant));
    }
    Ok(())
}

pub fn logout() -> anyhow::Result<()> {
    let ctx = Context::init()?;
    ctx.session.logout()?;
    output::success("logged out, session cleared");
    Ok(())
}

pub fn whoami() -> anyhow::Result<()> {
    let ctx = Context::init()?;
    if !ctx.session.is_authenticated() {
        println!("{}", "not logged in".yellow());
        return Ok(());
    }

    let user = ctx.user()?;
    println!("id:     {}", user.id);
    if let Some(email) = &user.email {
        println!("email:  {}", email);
    }
    if let Some(name) = &user.name {
        println!("name:   {}", name);
    }
    if let Some(role) = &user.role {
        println!("role:   {}", role);
    }
    if let Some(umkm_id) = &user.umkm_id {
        println!("tenant: {}", umkm_id);
    }
    if let Some(umkm_name) = &user.umkm_name {
        println!("umkm:   {}", umkm_name);
    }
    Ok(())
}
