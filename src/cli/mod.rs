use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::application::BudgetService;
use crate::domain::{format_money, validate};

pub mod logging;
mod session;

pub use session::Session;

/// BudgetBuddy - Income and Expense Tracker
#[derive(Parser)]
#[command(name = "budgetbuddy")]
#[command(about = "Record income and expenses and keep an eye on your balance")]
#[command(version)]
pub struct Cli {
    /// Symbol printed in front of amounts
    #[arg(long, default_value = "$")]
    pub currency_symbol: String,

    /// How the dashboard and history are rendered
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session (default)
    Session,

    /// Check an amount and category without recording anything
    Check {
        /// Amount as typed (e.g., "25.50")
        amount: String,

        /// Category label (e.g., "Rent")
        category: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Display settings shared by every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub currency_symbol: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            currency_symbol: self.currency_symbol.clone(),
            format: self.format,
        }
    }

    pub fn run(self) -> Result<()> {
        logging::init(self.verbose);
        let settings = self.settings();

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => {
                let stdin = io::stdin();
                let stdout = io::stdout();
                let session =
                    Session::new(BudgetService::new(), settings, stdin.lock(), stdout.lock());
                let service = session.run().context("Session ended with an I/O error")?;
                tracing::debug!(
                    count = service.transactions().len(),
                    "session closed, discarding ledger"
                );
            }
            Commands::Check { amount, category } => {
                run_check_command(&settings, &amount, &category)?;
            }
        }

        Ok(())
    }
}

fn run_check_command(settings: &Settings, amount_text: &str, category: &str) -> Result<()> {
    let amount = validate(amount_text, category)?;

    match settings.format {
        OutputFormat::Json => {
            let doc = serde_json::json!({ "amount": amount, "category": category });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            println!(
                "Valid: {} - {}",
                format_money(&settings.currency_symbol, amount),
                category
            );
        }
    }

    Ok(())
}
