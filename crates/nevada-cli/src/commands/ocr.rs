//! Receipt OCR upload.

use super::Context;
use crate::output;
use nevada_core::NevadaError;
use std::path::Path;

pub async fn upload(file: &Path, fields: &[String]) -> anyhow::Result<()> {
    let ctx = Context::init()?;
    let token = ctx.token()?;

    let extra = fields
        .iter()
        .map(|field| {
            field
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| NevadaError::config(format!("invalid --field '{}', expected key=value", field)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let bytes = std::fs::read(file)?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "receipt".to_string());

    let result = ctx
        .client
        .upload_receipt(&token, &file_name, bytes, &extra)
        .await?;

    output::success("receipt processed");
    println!("{}", result.text);
    if let Some(metadata) = &result.metadata {
        println!("{}", serde_json::to_string_pretty(metadata)?);
    }
    Ok(())
}
