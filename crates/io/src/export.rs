// Flat-file and JSON result export

use std::io::Write;
use std::path::Path;

use mailscrub_core::error::ScrubError;
use mailscrub_core::model::{EmailRecord, MatchMeta, MatchResult, MatchSummary};
use mailscrub_core::Selector;

/// Write a newline-delimited list: one raw email per line, no header.
pub fn write_list(path: &Path, emails: &[EmailRecord]) -> Result<(), ScrubError> {
    let file = std::fs::File::create(path)
        .map_err(|e| ScrubError::Io(format!("{}: {e}", path.display())))?;
    let mut writer = std::io::BufWriter::new(file);
    for email in emails {
        writeln!(writer, "{email}")
            .map_err(|e| ScrubError::Io(format!("{}: {e}", path.display())))?;
    }
    writer
        .flush()
        .map_err(|e| ScrubError::Io(format!("{}: {e}", path.display())))
}

/// Write both subsets into `dir` under the selector file names
/// (`clean_emails.txt`, `suppressed_emails.txt`). Creates `dir` if needed.
pub fn write_result(dir: &Path, result: &MatchResult) -> Result<(), ScrubError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ScrubError::Io(format!("{}: {e}", dir.display())))?;
    write_list(&dir.join(Selector::Clean.file_name()), &result.clean)?;
    write_list(&dir.join(Selector::Suppressed.file_name()), &result.suppressed)
}

#[derive(serde::Serialize)]
struct SummaryView<'a> {
    meta: &'a MatchMeta,
    summary: &'a MatchSummary,
}

/// Counts + sample as pretty JSON, for scripting. Subset contents are left
/// to the flat files.
pub fn summary_json(result: &MatchResult) -> Result<String, ScrubError> {
    serde_json::to_string_pretty(&SummaryView {
        meta: &result.meta,
        summary: &result.summary,
    })
    .map_err(|e| ScrubError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailscrub_core::{engine, MatchOptions};

    fn sample_result() -> MatchResult {
        engine::run(
            &[
                "a@x.com".to_string(),
                "b@x.com ".to_string(),
                "c@x.com".to_string(),
            ],
            &["c@x.com".to_string()],
            &MatchOptions::default(),
        )
    }

    #[test]
    fn list_is_newline_delimited_no_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.txt");
        write_list(
            &path,
            &["a@x.com".to_string(), "b@x.com ".to_string()],
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Raw emails, trailing whitespace intact
        assert_eq!(content, "a@x.com\nb@x.com \n");
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.txt");
        write_list(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn result_writes_both_selector_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        write_result(&out, &sample_result()).unwrap();

        let clean = std::fs::read_to_string(out.join("clean_emails.txt")).unwrap();
        let suppressed =
            std::fs::read_to_string(out.join("suppressed_emails.txt")).unwrap();
        assert_eq!(clean, "a@x.com\nb@x.com \n");
        assert_eq!(suppressed, "c@x.com\n");
    }

    #[test]
    fn summary_json_has_counts_and_sample() {
        let json = summary_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["clean_count"], 2);
        assert_eq!(value["summary"]["suppressed_count"], 1);
        assert_eq!(value["summary"]["sample"][0], "a@x.com");
        assert!(value["meta"]["engine_version"].is_string());
    }
}
