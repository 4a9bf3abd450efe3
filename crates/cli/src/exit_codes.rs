//! CLI Exit Code Registry
//!
//! Single source of truth for `mscrub` exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Code | Description                                  |
//! |------|----------------------------------------------|
//! | 0    | Success                                      |
//! | 1    | General error (unspecified)                  |
//! | 2    | Usage error (bad args, missing input list)   |
//! | 3    | Ingestion error (missing column, bad CSV)    |
//! | 4    | IO error (unreadable input, unwritable output) |

use mailscrub_core::ScrubError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required input.
pub const EXIT_USAGE: u8 = 2;

/// Ingestion error - tabular input without an `email` column, or CSV that
/// fails to parse.
pub const EXIT_INGEST: u8 = 3;

/// IO error - file read/write/decode failure.
pub const EXIT_IO: u8 = 4;

/// Map an error to its exit code.
pub fn exit_code_for(err: &ScrubError) -> u8 {
    match err {
        ScrubError::MissingInput(_) => EXIT_USAGE,
        ScrubError::MissingColumn { .. } | ScrubError::Csv { .. } => EXIT_INGEST,
        ScrubError::Io(_) => EXIT_IO,
        ScrubError::NotFound { .. } => EXIT_ERROR,
    }
}
