//! Content-agent conversation types and history flattening.
//!
//! The history endpoint has returned two record shapes over time: paired
//! turns (`user_input` + `assistant_output` sharing one timestamp) and
//! role-tagged single messages (`role` + `message`). The client reconstructs
//! one flat, ordered conversation from whichever mix arrives. Classification
//! is an explicit sum type so the precedence between the shapes is a tested
//! contract rather than ad hoc field probing.

use serde::{Deserialize, Serialize};

/// Who authored a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in the reconstructed conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub message: String,
    /// Timestamp as reported by the server (ISO 8601 string), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Raw record as returned by `GET /api/v1/content-agent/history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default)]
    pub assistant_output: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Older records carry the time under `timestamp` instead.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The recognized shapes of a history record.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryShape {
    /// A paired turn: user input and/or assistant output with one timestamp.
    Paired {
        user_input: Option<String>,
        assistant_output: Option<String>,
        created_at: Option<String>,
    },
    /// A single role-tagged message.
    Tagged {
        role: String,
        message: String,
        created_at: Option<String>,
    },
    /// Neither shape; the record contributes nothing to the conversation.
    Unrecognized,
}

impl HistoryRecord {
    /// Classifies the record. Paired fields win over role tagging when both
    /// are present, matching the order the original probes them in.
    pub fn shape(&self) -> HistoryShape {
        let created_at = self.created_at.clone().or_else(|| self.timestamp.clone());
        if self.user_input.is_some() || self.assistant_output.is_some() {
            return HistoryShape::Paired {
                user_input: self.user_input.clone(),
                assistant_output: self.assistant_output.clone(),
                created_at,
            };
        }
        if let (Some(role), Some(message)) = (&self.role, &self.message) {
            return HistoryShape::Tagged {
                role: role.clone(),
                message: message.clone(),
                created_at,
            };
        }
        HistoryShape::Unrecognized
    }
}

/// Flattens heterogeneous history records into an ordered conversation.
///
/// Paired records emit up to two messages (user first, then assistant), both
/// carrying the record's timestamp. Tagged records emit one message; any
/// role other than `user` is treated as assistant. Unrecognized records are
/// dropped from the output (a warning is logged so the condition is
/// observable, but the output contract is unchanged).
pub fn flatten_history(records: &[HistoryRecord]) -> Vec<ChatMessage> {
    let mut flattened = Vec::with_capacity(records.len() * 2);

    for (index, record) in records.iter().enumerate() {
        match record.shape() {
            HistoryShape::Paired {
                user_input,
                assistant_output,
                created_at,
            } => {
                if let Some(input) = user_input {
                    flattened.push(ChatMessage {
                        role: ChatRole::User,
                        message: input,
                        created_at: created_at.clone(),
                    });
                }
                if let Some(output) = assistant_output {
                    flattened.push(ChatMessage {
                        role: ChatRole::Assistant,
                        message: output,
                        created_at,
                    });
                }
            }
            HistoryShape::Tagged {
                role,
                message,
                created_at,
            } => {
                let role = if role == "user" {
                    ChatRole::User
                } else {
                    ChatRole::Assistant
                };
                flattened.push(ChatMessage {
                    role,
                    message,
                    created_at,
                });
            }
            HistoryShape::Unrecognized => {
                tracing::warn!(index, "dropping history record with unrecognized shape");
            }
        }
    }

    flattened
}

/// Raw response from `POST /api/v1/content-agent/chat`.
///
/// The reply text has shipped under both `reply` and `response`; the first
/// present wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// The agent's reply after field-name normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
    pub thread_id: Option<String>,
}

impl From<ChatResponse> for ChatReply {
    fn from(raw: ChatResponse) -> Self {
        ChatReply {
            reply: raw.reply.or(raw.response).unwrap_or_default(),
            thread_id: raw.thread_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paired(user: &str, assistant: &str, at: &str) -> HistoryRecord {
        HistoryRecord {
            user_input: Some(user.to_string()),
            assistant_output: Some(assistant.to_string()),
            created_at: Some(at.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_mixed_shapes_preserves_order() {
        let records = vec![
            paired("a", "b", "t1"),
            HistoryRecord {
                role: Some("user".into()),
                message: Some("c".into()),
                created_at: Some("t2".into()),
                ..Default::default()
            },
        ];

        let flat = flatten_history(&records);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].role, ChatRole::User);
        assert_eq!(flat[0].message, "a");
        assert_eq!(flat[1].role, ChatRole::Assistant);
        assert_eq!(flat[1].message, "b");
        assert_eq!(flat[2].role, ChatRole::User);
        assert_eq!(flat[2].message, "c");
    }

    #[test]
    fn test_paired_messages_share_the_record_timestamp() {
        let flat = flatten_history(&[paired("q", "a", "2024-01-01T00:00:00Z")]);
        assert_eq!(flat[0].created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(flat[1].created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_timestamp_field_backfills_missing_created_at() {
        let record = HistoryRecord {
            role: Some("user".into()),
            message: Some("m".into()),
            timestamp: Some("2024-02-01T00:00:00Z".into()),
            ..Default::default()
        };
        let flat = flatten_history(&[record]);
        assert_eq!(flat[0].created_at.as_deref(), Some("2024-02-01T00:00:00Z"));

        // created_at wins when both are present
        let record = HistoryRecord {
            user_input: Some("q".into()),
            created_at: Some("t-new".into()),
            timestamp: Some("t-old".into()),
            ..Default::default()
        };
        let flat = flatten_history(&[record]);
        assert_eq!(flat[0].created_at.as_deref(), Some("t-new"));
    }

    #[test]
    fn test_paired_with_only_assistant_output() {
        let record = HistoryRecord {
            assistant_output: Some("hello".into()),
            ..Default::default()
        };
        let flat = flatten_history(&[record]);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].role, ChatRole::Assistant);
    }

    #[test]
    fn test_unknown_role_defaults_to_assistant() {
        let record = HistoryRecord {
            role: Some("system".into()),
            message: Some("m".into()),
            ..Default::default()
        };
        let flat = flatten_history(&[record]);
        assert_eq!(flat[0].role, ChatRole::Assistant);
    }

    #[test]
    fn test_unrecognized_records_are_dropped() {
        let records = vec![
            HistoryRecord::default(),
            HistoryRecord {
                // message without role matches neither shape
                message: Some("orphan".into()),
                ..Default::default()
            },
            paired("a", "b", "t1"),
        ];
        let flat = flatten_history(&records);
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn test_reply_prefers_reply_over_response() {
        let raw = ChatResponse {
            reply: Some("r1".into()),
            response: Some("r2".into()),
            thread_id: Some("th".into()),
        };
        let reply: ChatReply = raw.into();
        assert_eq!(reply.reply, "r1");
        assert_eq!(reply.thread_id.as_deref(), Some("th"));

        let raw = ChatResponse {
            response: Some("r2".into()),
            ..Default::default()
        };
        assert_eq!(ChatReply::from(raw).reply, "r2");

        assert_eq!(ChatReply::from(ChatResponse::default()).reply, "");
    }
}
