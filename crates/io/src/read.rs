// List file reading and format detection

use std::io::Read;
use std::path::Path;

use mailscrub_core::error::ScrubError;
use mailscrub_core::ingest;
use mailscrub_core::model::EmailRecord;
use mailscrub_core::InputFormat;

/// Map a file extension to an explicit format tag, once, at the edge.
/// `.csv` is tabular; everything else is treated as line-delimited.
pub fn detect_format(path: &Path) -> InputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Table,
        _ => InputFormat::Lines,
    }
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252 exports
/// from Excel, a common source of suppression lists).
pub fn read_file_as_utf8(path: &Path) -> Result<String, ScrubError> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| ScrubError::Io(format!("{}: {e}", path.display())))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ScrubError::Io(format!("{}: {e}", path.display())))?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Read and parse one list in a single step.
///
/// `input` names the list for error messages; `format` of `None` means
/// detect from the extension.
pub fn load_list(
    input: &str,
    path: &Path,
    format: Option<InputFormat>,
) -> Result<Vec<EmailRecord>, ScrubError> {
    let format = format.unwrap_or_else(|| detect_format(path));
    let content = read_file_as_utf8(path)?;
    ingest::parse(input, &content, format)
}
