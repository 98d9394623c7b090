use serde::{Deserialize, Serialize};

use super::{Amount, Transaction, TransactionKind};

/// Totals over every transaction in a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Amount,
    pub total_expenses: Amount,
}

impl Summary {
    /// Balance = total income - total expenses. Always derived, never stored.
    pub fn balance(&self) -> Amount {
        self.total_income - self.total_expenses
    }
}

impl From<Summary> for (Amount, Amount) {
    fn from(summary: Summary) -> Self {
        (summary.total_income, summary.total_expenses)
    }
}

/// Sum income and expense amounts over a list of transactions.
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    transactions
        .iter()
        .fold(Summary::default(), |mut summary, txn| {
            match txn.kind {
                TransactionKind::Income => summary.total_income += txn.amount,
                TransactionKind::Expense => summary.total_expenses += txn.amount,
            }
            summary
        })
}

/// In-memory, append-only list of transactions for one session.
///
/// The ledger does not validate what it stores: amounts and categories are
/// checked with [`validate`](super::validate) before calling [`Ledger::add`].
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Insertion order is preserved.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> &Transaction {
        self.transactions
            .push(Transaction::new(kind, amount, category, description));
        &self.transactions[self.transactions.len() - 1]
    }

    /// All transactions in the order they were added.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn summarize(&self) -> Summary {
        compute_summary(&self.transactions)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
