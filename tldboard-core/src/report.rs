// Report generation from a rendered board

use crate::presenter::Board;
use askama::Template;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
    Html,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "html" => Some(ReportFormat::Html),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTML template failed: {0}")]
    Template(#[from] askama::Error),
}

pub fn generate_report(board: &Board, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(board)),
        ReportFormat::Json => Ok(generate_json_report(board)?),
        ReportFormat::Markdown => Ok(generate_markdown_report(board)),
        ReportFormat::Html => Ok(generate_html_report(board)?),
    }
}

pub fn generate_text_report(board: &Board) -> String {
    let mut report = String::new();
    report.push_str(DIVIDER);
    report.push_str("\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Columns: {}\n", board.columns.len()));
    report.push_str(&format!("  Cards: {}\n", board.total_cards()));
    for notice in &board.notices {
        report.push_str(&format!("  {} {}\n", "⚠".yellow().bold(), notice));
    }
    report.push('\n');
    report.push_str(DIVIDER);
    report.push_str("\n\n");

    for column in &board.columns {
        report.push_str(&format!("## {}\n", column.title.bright_cyan().bold()));
        report.push_str(&format!("  {} cards\n\n", column.cards.len()));

        for card in &column.cards {
            for line in card.lines() {
                report.push_str(&format!("  │ {}\n", line));
            }
            report.push('\n');
        }
    }

    report
}

pub fn generate_json_report(board: &Board) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "tldboard",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": {
                "total_columns": board.columns.len(),
                "total_cards": board.total_cards()
            },
            "notices": board.notices,
            "columns": board.columns
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_markdown_report(board: &Board) -> String {
    let mut report = String::new();
    report.push_str("# Users by TLD\n\n");
    report.push_str(&format!(
        "{} columns, {} cards\n\n",
        board.columns.len(),
        board.total_cards()
    ));

    for notice in &board.notices {
        report.push_str(&format!("> {}\n\n", notice));
    }

    for column in &board.columns {
        report.push_str(&format!("## {}\n\n", column.title));
        for card in &column.cards {
            let [name, username, website] = card.lines();
            report.push_str(&format!("- {}  \n  {}  \n  {}\n", name, username, website));
        }
        report.push('\n');
    }

    report
}

/// Standalone HTML page with one `.column` per TLD and one `.card` per user.
#[derive(Template)]
#[template(path = "board.html")]
pub struct HtmlBoard<'a> {
    pub board: &'a Board,
}

pub fn generate_html_report(board: &Board) -> Result<String, askama::Error> {
    HtmlBoard { board }.render()
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
