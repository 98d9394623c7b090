use serde::{Deserialize, Serialize};

use super::Amount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, gifts, refunds)
    #[default]
    Income,
    /// Money going out (rent, food, bills)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded income or expense event.
/// Transactions are never edited once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Amount in the currency unit (positive once validated)
    pub amount: Amount,
    /// Free-form label used for grouping (e.g., "Salary", "Food")
    pub category: String,
    /// Optional note; empty when the user left it blank
    pub description: String,
}

impl Transaction {
    /// Build a transaction as-is. Callers validate amount and category first.
    pub fn new(
        kind: TransactionKind,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
