//! Product catalogue records.

use crate::Id;
use serde::{Deserialize, Serialize};

/// A product belonging to one UMKM.
///
/// `id` is absent until the server assigns one on create. No invariants are
/// enforced client-side; validation happens at the remote API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umkm_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_numeric_and_string_ids() {
        let p: Product =
            serde_json::from_str(r#"{"id": 7, "name": "Kopi Susu", "umkm_id": "m1"}"#).unwrap();
        assert_eq!(p.id, Some(Id::Num(7)));
        assert_eq!(p.umkm_id, Some(Id::Str("m1".into())));
    }

    #[test]
    fn test_serializes_without_absent_fields() {
        let p = Product {
            name: "Teh Manis".into(),
            price: Some(5000.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("sku").is_none());
        assert_eq!(json["price"], 5000.0);
    }
}
