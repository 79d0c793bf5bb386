//! Transaction records and the amount fallback chain.
//!
//! The remote API reports a transaction's monetary value under up to three
//! names (`final_amount`, `total_amount`, `amount`) depending on how the
//! record was produced. The displayed/editable amount is always the first
//! defined of those, in that order, defaulting to 0. The same chain applies
//! on fetch, on edit-load, and on submit; submitting writes the entered
//! amount into both `total_amount` and `final_amount`.

use crate::Id;
use serde::{Deserialize, Serialize};

/// One line item inside a transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A sales transaction belonging to one UMKM.
///
/// Foreign keys (`customer_id`, `product_id`) are opaque and passed through;
/// no referential integrity is enforced client-side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TransactionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umkm_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// The displayed/editable amount: first defined of `final_amount`,
    /// `total_amount`, `amount`, defaulting to 0.
    pub fn display_amount(&self) -> f64 {
        self.final_amount
            .or(self.total_amount)
            .or(self.amount)
            .unwrap_or(0.0)
    }

    /// Applies the fallback chain to the record itself, filling all three
    /// amount fields from the resolved value. Used on fetch and edit-load so
    /// later reads see a consistent record regardless of which field the
    /// server populated.
    pub fn normalized(mut self) -> Self {
        let resolved = self.display_amount();
        self.amount = Some(resolved);
        if self.final_amount.is_none() {
            self.final_amount = Some(resolved);
        }
        if self.total_amount.is_none() {
            self.total_amount = Some(resolved);
        }
        self
    }

    /// Prepares the record for submission with the user-entered amount:
    /// both `total_amount` and `final_amount` are set equal to it.
    pub fn with_submitted_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self.total_amount = Some(amount);
        self.final_amount = Some(amount);
        self
    }
}
