//! Interactive terminal session.
//!
//! The session is a small screen state machine: each screen renders, reads
//! what it needs from the input, and returns the next screen. All state lives
//! in the [`BudgetService`] the session owns; the ledger lives as long as the
//! session does.

use std::io::{self, BufRead, Write};

use crate::application::{AppError, BudgetService};
use crate::domain::TransactionKind;

use super::{OutputFormat, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    AddTransaction,
    History,
    ConfirmExit,
    Closed,
}

pub struct Session<R, W> {
    service: BudgetService,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(service: BudgetService, settings: Settings, input: R, output: W) -> Self {
        Self {
            service,
            settings,
            input,
            output,
        }
    }

    /// Drive the session until the user exits or input runs out.
    /// Returns the service so callers can inspect what was recorded.
    pub fn run(mut self) -> io::Result<BudgetService> {
        let mut screen = Screen::Dashboard;

        while screen != Screen::Closed {
            screen = match screen {
                Screen::Dashboard => self.dashboard()?,
                Screen::AddTransaction => self.add_transaction()?,
                Screen::History => self.history()?,
                Screen::ConfirmExit => self.confirm_exit()?,
                Screen::Closed => Screen::Closed,
            };
        }

        self.output.flush()?;
        Ok(self.service)
    }

    fn dashboard(&mut self) -> io::Result<Screen> {
        let dashboard = self.service.dashboard();

        writeln!(self.output)?;
        match self.settings.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.output, &dashboard)?;
                writeln!(self.output)?;
            }
            OutputFormat::Text => {
                writeln!(self.output, "BudgetBuddy")?;
                for line in dashboard.lines(&self.settings.currency_symbol) {
                    writeln!(self.output, "{}", line)?;
                }
            }
        }
        writeln!(self.output)?;
        writeln!(self.output, "  1) Add Transaction")?;
        writeln!(self.output, "  2) View Transactions")?;
        writeln!(self.output, "  3) Exit")?;

        let Some(choice) = self.prompt("Select an option: ")? else {
            return Ok(Screen::Closed);
        };

        let next = match choice.trim().to_lowercase().as_str() {
            "1" | "a" | "add" => Screen::AddTransaction,
            "2" | "v" | "view" => Screen::History,
            "3" | "q" | "quit" | "exit" => Screen::ConfirmExit,
            other => {
                writeln!(self.output, "Unknown option: {}", other)?;
                Screen::Dashboard
            }
        };
        Ok(next)
    }

    fn add_transaction(&mut self) -> io::Result<Screen> {
        writeln!(self.output)?;
        writeln!(self.output, "Add Transaction")?;

        let Some(kind_text) =
            self.prompt("Type [Income/Expense] (Enter for Income, 'back' to return): ")?
        else {
            return Ok(Screen::Closed);
        };

        let kind_text = kind_text.trim();
        if kind_text.eq_ignore_ascii_case("back") {
            return Ok(Screen::Dashboard);
        }
        let kind = if kind_text.is_empty() {
            TransactionKind::default()
        } else {
            match TransactionKind::from_str(kind_text) {
                Some(kind) => kind,
                None => {
                    let err = AppError::UnknownKind(kind_text.to_string());
                    writeln!(self.output, "Input Error: {}", err)?;
                    return Ok(Screen::AddTransaction);
                }
            }
        };

        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(Screen::Closed);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(Screen::Closed);
        };
        let Some(description) = self.prompt("Description (Optional): ")? else {
            return Ok(Screen::Closed);
        };

        match self.service.record(kind, &amount, &category, &description) {
            Ok(_) => {
                writeln!(self.output, "Transaction saved!")?;
                Ok(Screen::Dashboard)
            }
            Err(err) => {
                writeln!(self.output, "Input Error: {}", err)?;
                Ok(Screen::AddTransaction)
            }
        }
    }

    fn history(&mut self) -> io::Result<Screen> {
        let entries = self.service.history();

        writeln!(self.output)?;
        match self.settings.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.output, &entries)?;
                writeln!(self.output)?;
            }
            OutputFormat::Text => {
                writeln!(self.output, "Transaction History")?;
                if entries.is_empty() {
                    writeln!(self.output, "No transactions yet.")?;
                }
                for entry in &entries {
                    writeln!(self.output, "{}", entry.line(&self.settings.currency_symbol))?;
                }
            }
        }

        Ok(Screen::Dashboard)
    }

    fn confirm_exit(&mut self) -> io::Result<Screen> {
        let Some(answer) = self.prompt("Do you want to exit Budget Buddy? [y/N]: ")? else {
            return Ok(Screen::Closed);
        };

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => {
                writeln!(self.output, "Goodbye!")?;
                Ok(Screen::Closed)
            }
            _ => Ok(Screen::Dashboard),
        }
    }

    /// Print a prompt and read one line. `None` means the input is exhausted.
    /// Only the line terminator is stripped; the rest is returned as typed.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
