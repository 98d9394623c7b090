use crate::domain::{Ledger, Transaction, TransactionKind, validate};

use super::{AppError, Dashboard, HistoryEntry};

/// Application service owning the session ledger.
/// This is the single controller any front end (terminal session, tests) talks to.
#[derive(Debug, Default)]
pub struct BudgetService {
    ledger: Ledger,
}

impl BudgetService {
    /// Create a service with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service around an existing ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Validate raw input and, if it passes, record a new transaction.
    /// A rejected input leaves the ledger untouched.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> Result<Transaction, AppError> {
        let amount = validate(amount_text, category).inspect_err(|err| {
            tracing::debug!(%kind, amount = amount_text, category, "rejected input: {err}");
        })?;

        let transaction = self.ledger.add(kind, amount, category, description).clone();
        tracing::info!(
            %kind,
            amount,
            category,
            count = self.ledger.len(),
            "recorded transaction"
        );

        Ok(transaction)
    }

    /// Same as [`record`](Self::record) but with the type given as text (e.g. "expense").
    pub fn record_typed(
        &mut self,
        kind_text: &str,
        amount_text: &str,
        category: &str,
        description: &str,
    ) -> Result<Transaction, AppError> {
        let kind = TransactionKind::from_str(kind_text)
            .ok_or_else(|| AppError::UnknownKind(kind_text.to_string()))?;
        self.record(kind, amount_text, category, description)
    }

    /// All recorded transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.list()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_summary(self.ledger.summarize(), self.ledger.len())
    }

    /// History rows, numbered from 1.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.ledger
            .list()
            .iter()
            .enumerate()
            .map(|(i, txn)| HistoryEntry::from_transaction(i + 1, txn))
            .collect()
    }
}
