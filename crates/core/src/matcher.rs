use crate::fingerprint::Fingerprint;
use crate::model::EmailRecord;
use crate::suppression::SuppressionSet;

/// Raw partition of a candidate list, before summarization.
#[derive(Debug, Clone)]
pub struct PartitionOutput {
    pub clean: Vec<EmailRecord>,
    pub suppressed: Vec<EmailRecord>,
}

/// Partition candidates by fingerprint membership in the suppression set.
///
/// Single pass, original order. Each candidate lands in exactly one subset,
/// carrying its original (unnormalized) string; duplicates are partitioned
/// independently. Pure — deterministic for identical inputs, no shared
/// state, safe to call concurrently on request-local data.
pub fn partition(candidates: &[EmailRecord], suppression: &SuppressionSet) -> PartitionOutput {
    let mut clean = Vec::new();
    let mut suppressed = Vec::new();

    for candidate in candidates {
        if suppression.contains(&Fingerprint::of(candidate)) {
            suppressed.push(candidate.clone());
        } else {
            clean.push(candidate.clone());
        }
    }

    PartitionOutput { clean, suppressed }
}
