use crate::matcher::partition;
use crate::model::{EmailRecord, MatchMeta, MatchOptions, MatchResult, MatchSummary};
use crate::suppression::SuppressionSet;

/// Build the suppression set from raw entries, partition the candidates,
/// and summarize.
///
/// Candidates are expected to be pre-filtered of blank entries by
/// ingestion; this function itself has no failure modes — malformed input
/// is an ingestion-layer error and must be surfaced before calling.
pub fn run(
    candidates: &[EmailRecord],
    suppression_entries: &[String],
    options: &MatchOptions,
) -> MatchResult {
    let suppression = SuppressionSet::from_entries(suppression_entries);
    let output = partition(candidates, &suppression);

    let summary = MatchSummary {
        clean_count: output.clean.len(),
        suppressed_count: output.suppressed.len(),
        sample: output
            .clean
            .iter()
            .take(options.sample_size)
            .cloned()
            .collect(),
    };

    MatchResult {
        meta: MatchMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        clean: output.clean,
        suppressed: output.suppressed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Fingerprint;

    fn records(emails: &[&str]) -> Vec<EmailRecord> {
        emails.iter().map(|e| (*e).to_string()).collect()
    }

    #[test]
    fn counts_and_sample() {
        let candidates = records(&[
            "a@x.com", "b@x.com", "c@x.com", "d@x.com", "e@x.com", "f@x.com", "g@x.com",
        ]);
        let suppression = vec!["c@x.com".to_string()];

        let result = run(&candidates, &suppression, &MatchOptions::default());
        assert_eq!(result.summary.clean_count, 6);
        assert_eq!(result.summary.suppressed_count, 1);
        // Sample is capped at 5 and preserves original order
        assert_eq!(
            result.summary.sample,
            records(&["a@x.com", "b@x.com", "d@x.com", "e@x.com", "f@x.com"])
        );
    }

    #[test]
    fn empty_candidate_list() {
        let result = run(&[], &["a@x.com".to_string()], &MatchOptions::default());
        assert!(result.clean.is_empty());
        assert!(result.suppressed.is_empty());
        assert_eq!(result.summary.clean_count, 0);
        assert_eq!(result.summary.suppressed_count, 0);
        assert!(result.summary.sample.is_empty());
    }

    #[test]
    fn mixed_suppression_input() {
        let candidates = records(&["A@x.com", "b@x.com ", "c@x.com"]);
        let suppression = vec![
            "a@x.com".to_string(),
            Fingerprint::of("c@x.com").to_string(),
        ];

        let result = run(&candidates, &suppression, &MatchOptions::default());
        assert_eq!(result.suppressed, records(&["A@x.com", "c@x.com"]));
        assert_eq!(result.clean, records(&["b@x.com "]));
        assert_eq!(result.summary.clean_count, 1);
        assert_eq!(result.summary.suppressed_count, 2);
    }

    #[test]
    fn custom_sample_size() {
        let candidates = records(&["a@x.com", "b@x.com", "c@x.com"]);
        let options = MatchOptions { sample_size: 2 };

        let result = run(&candidates, &[], &options);
        assert_eq!(result.summary.sample, records(&["a@x.com", "b@x.com"]));
    }

    #[test]
    fn meta_carries_version() {
        let result = run(&[], &[], &MatchOptions::default());
        assert_eq!(result.meta.engine_version, env!("CARGO_PKG_VERSION"));
    }
}
