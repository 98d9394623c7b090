use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Summary, Transaction, TransactionKind, format_money};

/// Figures shown on the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub balance: Amount,
    pub transaction_count: usize,
}

impl Dashboard {
    pub fn from_summary(summary: Summary, transaction_count: usize) -> Self {
        Self {
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            balance: summary.balance(),
            transaction_count,
        }
    }

    /// Dashboard lines, one label per figure.
    pub fn lines(&self, currency_symbol: &str) -> Vec<String> {
        vec![
            format!(
                "Total Income: {}",
                format_money(currency_symbol, self.total_income)
            ),
            format!(
                "Total Expenses: {}",
                format_money(currency_symbol, self.total_expenses)
            ),
            format!("Balance: {}", format_money(currency_symbol, self.balance)),
        ]
    }
}

/// One row of the transaction history screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: usize,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

impl HistoryEntry {
    pub fn from_transaction(position: usize, transaction: &Transaction) -> Self {
        Self {
            position,
            kind: transaction.kind,
            amount: transaction.amount,
            category: transaction.category.clone(),
            description: transaction.description.clone(),
        }
    }

    /// Example: "Expense: $40.00 - Food"
    pub fn line(&self, currency_symbol: &str) -> String {
        format!(
            "{}: {} - {}",
            self.kind,
            format_money(currency_symbol, self.amount),
            self.category
        )
    }
}
