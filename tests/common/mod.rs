// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use anyhow::Result;
use budgetbuddy::application::BudgetService;
use budgetbuddy::cli::{OutputFormat, Session, Settings};
use budgetbuddy::domain::{Ledger, TransactionKind};

/// Helper to build a ledger from (kind, amount, category) triples
pub fn ledger_with(entries: &[(TransactionKind, f64, &str)]) -> Ledger {
    let mut ledger = Ledger::new();
    for (kind, amount, category) in entries {
        ledger.add(*kind, *amount, *category, "");
    }
    ledger
}

/// Test fixture: a typical month of activity
pub struct SampleMonth;

impl SampleMonth {
    /// Salary and a side job in, rent, food and coffee out.
    /// Income 3200.00, expenses 1542.75, balance 1657.25
    pub fn record(service: &mut BudgetService) -> Result<()> {
        service.record(TransactionKind::Income, "3000", "Salary", "March pay")?;
        service.record(TransactionKind::Income, "200", "Freelance", "")?;
        service.record(TransactionKind::Expense, "1200", "Rent", "")?;
        service.record(TransactionKind::Expense, "337.50", "Food", "Groceries")?;
        service.record(TransactionKind::Expense, "5.25", "Coffee", "")?;
        Ok(())
    }
}

/// Run a scripted session, returning the service and everything written to the screen
pub fn run_script(script: &str, format: OutputFormat) -> Result<(BudgetService, String)> {
    let settings = Settings {
        format,
        ..Settings::default()
    };
    let mut output = Vec::new();
    let service = Session::new(
        BudgetService::new(),
        settings,
        Cursor::new(script.as_bytes()),
        &mut output,
    )
    .run()?;
    Ok((service, String::from_utf8(output)?))
}
