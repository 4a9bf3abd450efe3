//! Candidate / suppression list ingestion.
//!
//! Parses pre-read string content into ordered record sequences. Which
//! parser runs is an explicit format tag chosen at the edge (see
//! `mailscrub-io`), never guessed here.

use crate::error::ScrubError;
use crate::model::EmailRecord;

/// Column a tabular list must carry, by this literal name.
pub const EMAIL_COLUMN: &str = "email";

/// Closed set of supported input shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One raw string per line; lines are trimmed, blank lines skipped.
    Lines,
    /// CSV with a header row containing an `email` column.
    Table,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lines => write!(f, "lines"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Parse one uploaded list into an ordered sequence of raw records.
///
/// `input` names the list ("emails", "suppression") for error messages.
/// Ingestion errors short-circuit here, before any matching runs.
pub fn parse(
    input: &str,
    content: &str,
    format: InputFormat,
) -> Result<Vec<EmailRecord>, ScrubError> {
    match format {
        InputFormat::Lines => Ok(parse_lines(content)),
        InputFormat::Table => parse_table(input, content),
    }
}

fn parse_lines(content: &str) -> Vec<EmailRecord> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_table(input: &str, content: &str) -> Result<Vec<EmailRecord>, ScrubError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(|e| ScrubError::Csv {
        input: input.into(),
        message: e.to_string(),
    })?;

    let email_idx = headers
        .iter()
        .position(|h| h == EMAIL_COLUMN)
        .ok_or_else(|| ScrubError::MissingColumn {
            input: input.into(),
            column: EMAIL_COLUMN.into(),
        })?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ScrubError::Csv {
            input: input.into(),
            message: e.to_string(),
        })?;

        // Rows with a missing or blank email value are dropped, not errors
        let value = record.get(email_idx).unwrap_or("");
        if value.trim().is_empty() {
            continue;
        }
        records.push(value.to_string());
    }

    Ok(records)
}
