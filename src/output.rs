//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{NewsRecord, RecordStatus};
use crate::core::services::Stats;
use crate::core::services::stats::BUCKET_UPPER_BOUNDS;
use crate::notice::{Notice, NoticeKind};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct RecordListResult {
    /// Records, newest first
    pub records: Vec<NewsRecord>,
    /// Status filter that was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
}

/// Result of an operation on a single record
#[derive(Debug, Serialize)]
pub struct RecordResult {
    /// Outcome banner, absent for plain lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    /// The record after the operation
    pub record: NewsRecord,
    /// Decoded content, when requested and decodable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed: Option<String>,
}

/// Result of an availability probe
#[derive(Debug, Serialize)]
pub struct AvailabilityResult {
    /// Whether the contract answered
    pub available: bool,
    /// Backend name
    pub backend: String,
    /// Connected account
    pub account: Option<String>,
    /// Encryption scheme in use
    pub cipher: String,
    /// Whether the encryption step is only simulated
    pub simulated_encryption: bool,
}

/// Colour a status for terminal output
fn paint_status(status: RecordStatus) -> colored::ColoredString {
    match status {
        RecordStatus::Pending => status.as_str().yellow(),
        RecordStatus::Verified => status.as_str().green(),
        RecordStatus::Disputed => status.as_str().red(),
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_record(record: &NewsRecord) {
    let date = record
        .submitted_at()
        .map_or_else(|| record.timestamp.to_string(), |t| t.format("%Y-%m-%d").to_string());
    let category = if record.category.is_empty() { "-" } else { record.category.as_str() };
    println!("  [{}] {}", paint_status(record.status), record.id);
    println!("          {} | {} | {}", record.source, category, date);
    println!("          credibility {}%", record.credibility_score);
}

impl RecordListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.records.is_empty() {
            println!("No news records found.");
            return;
        }

        println!("News records ({}):\n", self.records.len());
        for record in &self.records {
            print_record(record);
            println!();
        }
    }
}

impl RecordResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if let Some(notice) = &self.notice {
                    notice.render(mode);
                }
                print_record(&self.record);
                if let Some(content) = &self.revealed {
                    println!("          content {content}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl AvailabilityResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Contract available: {}", self.available);
                println!("Backend: {}", self.backend);
                println!("Account: {}", self.account.as_deref().unwrap_or("(not connected)"));
                if self.simulated_encryption {
                    println!("Encryption: {} (simulated, not real encryption)", self.cipher);
                } else {
                    println!("Encryption: {}", self.cipher);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl Stats {
    /// Render the statistics based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("News statistics:");
        println!("  Total:     {}", self.total);
        println!("  Verified:  {}", self.verified);
        println!("  Pending:   {}", self.pending);
        println!("  Disputed:  {}", self.disputed);
        println!("  Avg score: {}", self.average_display());
        println!("\nCredibility distribution:");

        let mut lower = 0u8;
        for (count, upper) in self.distribution.iter().zip(BUCKET_UPPER_BOUNDS) {
            println!("  {lower:>3}-{upper:<3} {count}");
            lower = upper.saturating_add(1);
        }
    }
}

impl Notice {
    /// Render the notice based on output mode
    ///
    /// Human mode writes errors to stderr.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match self.kind {
                NoticeKind::Pending => println!("{}", self.message.dimmed()),
                NoticeKind::Success => println!("{}", self.message.green()),
                NoticeKind::Error => eprintln!("{}", self.message.red()),
            },
            OutputMode::Json => render_json(self),
        }
    }
}
