use std::fmt;

/// Errors surfaced to the caller. All recoverable; each renders as a single
/// human-readable line. The matcher itself raises none of these — they come
/// from ingestion, file IO, and result lookup.
#[derive(Debug)]
pub enum ScrubError {
    /// A required input list is absent.
    MissingInput(String),
    /// Tabular input lacks the required email column.
    MissingColumn { input: String, column: String },
    /// CSV parse failure in tabular input.
    Csv { input: String, message: String },
    /// File read/write/decode failure.
    Io(String),
    /// Result lookup miss: unknown selector, unknown job, or a download
    /// requested before any match has been computed.
    NotFound { what: String },
}

impl fmt::Display for ScrubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(input) => write!(f, "input '{input}' is required"),
            Self::MissingColumn { input, column } => {
                write!(f, "input '{input}': missing column '{column}'")
            }
            Self::Csv { input, message } => write!(f, "input '{input}': {message}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::NotFound { what } => write!(f, "not found: {what}"),
        }
    }
}

impl std::error::Error for ScrubError {}
