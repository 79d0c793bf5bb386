//! Content-generation agent endpoints.

use crate::http::{ApiClient, RequestBody};
use crate::query::QueryPairs;
use nevada_core::chat::{flatten_history, ChatMessage, ChatReply, ChatResponse, HistoryRecord};
use nevada_core::Result;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::{json, Value};

impl ApiClient {
    /// `POST /api/v1/content-agent/chat` — JSON when text-only, multipart
    /// when an image rides along. The reply field name is normalized
    /// (`reply` wins over `response`).
    pub async fn send_content_message(
        &self,
        token: &str,
        message: &str,
        image: Option<(String, Vec<u8>)>,
    ) -> Result<ChatReply> {
        let raw: ChatResponse = match image {
            Some((file_name, bytes)) => {
                let form = Form::new()
                    .text("message", message.to_string())
                    .part("image", Part::bytes(bytes).file_name(file_name));
                self.send_json(
                    Method::POST,
                    "/api/v1/content-agent/chat",
                    RequestBody::Multipart(form),
                    Some(token),
                )
                .await?
            }
            None => {
                self.send_json(
                    Method::POST,
                    "/api/v1/content-agent/chat",
                    RequestBody::Json(json!({ "message": message })),
                    Some(token),
                )
                .await?
            }
        };
        Ok(raw.into())
    }

    /// `GET /api/v1/content-agent/history` — raw records as the server
    /// returns them. The record list has shipped bare and wrapped in a
    /// `history` or `conversations` envelope; all three shapes are accepted.
    pub async fn content_history(&self, token: &str, limit: u32) -> Result<Vec<HistoryRecord>> {
        let query = QueryPairs::new().pair("limit", limit).to_query_string();
        let raw: Value = self
            .send_json(
                Method::GET,
                &format!("/api/v1/content-agent/history{}", query),
                RequestBody::Empty,
                Some(token),
            )
            .await?;
        let records = match raw {
            Value::Array(_) => raw,
            Value::Object(mut envelope) => envelope
                .remove("history")
                .or_else(|| envelope.remove("conversations"))
                .unwrap_or(Value::Array(Vec::new())),
            _ => Value::Array(Vec::new()),
        };
        Ok(serde_json::from_value(records)?)
    }

    /// Fetches the history and flattens it into an ordered conversation.
    pub async fn content_conversation(&self, token: &str, limit: u32) -> Result<Vec<ChatMessage>> {
        let records = self.content_history(token, limit).await?;
        Ok(flatten_history(&records))
    }

    /// `DELETE /api/v1/content-agent/history`
    pub async fn clear_content_history(&self, token: &str) -> Result<Option<String>> {
        self.send_for_message(Method::DELETE, "/api/v1/content-agent/history", Some(token))
            .await
    }

    /// `DELETE /api/v1/content-agent/thread`
    pub async fn delete_content_thread(&self, token: &str) -> Result<Option<String>> {
        self.send_for_message(Method::DELETE, "/api/v1/content-agent/thread", Some(token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nevada_core::chat::ChatRole;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one connection with a canned JSON body.
    async fn one_shot_server(body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.flush().await;
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_history_accepts_bare_array() {
        let base = one_shot_server(r#"[{"user_input":"a","assistant_output":"b"}]"#).await;
        let client = ApiClient::new(base);
        let conversation = client.content_conversation("tok", 50).await.unwrap();
        assert_eq!(conversation.len(), 2);
    }

    #[tokio::test]
    async fn test_history_accepts_history_envelope() {
        let base =
            one_shot_server(r#"{"history":[{"role":"user","message":"c","created_at":"t2"}]}"#)
                .await;
        let client = ApiClient::new(base);
        let conversation = client.content_conversation("tok", 50).await.unwrap();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation[0].role, ChatRole::User);
        assert_eq!(conversation[0].message, "c");
    }

    #[tokio::test]
    async fn test_history_accepts_conversations_envelope() {
        let base = one_shot_server(
            r#"{"conversations":[{"user_input":"q","assistant_output":"a","created_at":"t1"}]}"#,
        )
        .await;
        let client = ApiClient::new(base);
        let conversation = client.content_conversation("tok", 50).await.unwrap();
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation[1].role, ChatRole::Assistant);
    }

    #[tokio::test]
    async fn test_history_envelope_without_known_key_is_empty() {
        let base = one_shot_server(r#"{"status":"ok"}"#).await;
        let client = ApiClient::new(base);
        let records = client.content_history("tok", 50).await.unwrap();
        assert!(records.is_empty());
    }
}
