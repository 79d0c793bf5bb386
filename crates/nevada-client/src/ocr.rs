//! Receipt OCR upload endpoint.
//!
//! OCR itself is performed entirely by the remote API; the client only
//! ships the image bytes as a multipart upload.

use crate::http::{ApiClient, RequestBody};
use nevada_core::Result;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response from `POST /api/v1/ocr/upload`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrResult {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl ApiClient {
    /// `POST /api/v1/ocr/upload` — multipart upload of one receipt image
    /// plus arbitrary extra string fields.
    pub async fn upload_receipt(
        &self,
        token: &str,
        file_name: &str,
        bytes: Vec<u8>,
        extra: &[(String, String)],
    ) -> Result<OcrResult> {
        let mut form = Form::new().part(
            "file",
            Part::bytes(bytes).file_name(file_name.to_string()),
        );
        for (key, value) in extra {
            form = form.text(key.clone(), value.clone());
        }
        self.send_json(
            Method::POST,
            "/api/v1/ocr/upload",
            RequestBody::Multipart(form),
            Some(token),
        )
        .await
    }
}
