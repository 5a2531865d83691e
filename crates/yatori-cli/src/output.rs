//! Rendering for command results.
//!
//! Everything meant for scripts goes to stdout; notices go to stderr.

use serde::Serialize;
use tabled::{Table, Tabled};

use yatori_core::result::AppResult;
use yatori_core::types::{ActivationStatus, PaymentLinkRecord, TokenType};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Serialize a value as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

/// Print generated rows as a table or a JSON array.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(rows)?,
    }
    Ok(())
}

/// Severity of a one-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Done,
    Warning,
    Failure,
}

impl Notice {
    fn marker(self) -> char {
        match self {
            Self::Done => '✓',
            Self::Warning => '⚠',
            Self::Failure => '✗',
        }
    }
}

/// Print a notice. Only `Done` goes to stdout.
pub fn notify(notice: Notice, msg: &str) {
    match notice {
        Notice::Done => println!("{} {}", notice.marker(), msg),
        _ => eprintln!("{} {}", notice.marker(), msg),
    }
}

/// Aligned `label: value` block describing a single result.
#[derive(Debug, Default)]
pub struct Details {
    rows: Vec<(&'static str, String)>,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.rows.push((label, value.into()));
        self
    }

    /// Labels are padded to the longest one in the block.
    pub fn render(&self) -> String {
        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
        self.rows
            .iter()
            .map(|(label, value)| format!("  {:<width$} {}\n", format!("{label}:"), value))
            .collect()
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Details block for a tracked payment link.
pub fn record_details(record: &PaymentLinkRecord) -> Details {
    Details::new()
        .row("URL", record.url.as_str())
        .row("YID", record.yid.as_str())
        .row("Recipient", record.recipient.as_str())
        .row("Amount", format!("${} USDC", yatori_link::format_amount(record.amount)))
        .row("Token", record.token.as_str())
        .row("Timestamp", record.timestamp.as_str())
}

/// Details block for an activation lookup.
pub fn activation_details(address: &str, network: &str, status: &ActivationStatus) -> Details {
    let mut details = Details::new()
        .row("Address", address)
        .row("Network", network)
        .row("Activated", status.is_activated.to_string())
        .row("Link token", TokenType::for_activation(status.is_activated).as_str());
    if let Some(label) = &status.status {
        details = details.row("Status", label.as_str());
    }
    details
}
