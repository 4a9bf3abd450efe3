use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A raw email address exactly as supplied by the caller.
///
/// Never validated against RFC 5321, never mutated; normalization happens
/// only inside fingerprinting. Records are request-scoped and discarded once
/// the result is consumed.
pub type EmailRecord = String;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Number of clean emails included in the preview sample by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Knobs for a single match run.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// How many clean emails (in original order) to surface as a preview.
    pub sample_size: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Counts plus the bounded clean-email preview.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub clean_count: usize,
    pub suppressed_count: usize,
    /// First `sample_size` clean emails, original order.
    pub sample: Vec<EmailRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchMeta {
    pub engine_version: String,
    pub run_at: String,
}

/// The full partition of one candidate list.
///
/// `clean` and `suppressed` are disjoint, each preserves the candidates'
/// original relative order, and together they cover every input record
/// exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub meta: MatchMeta,
    pub summary: MatchSummary,
    pub clean: Vec<EmailRecord>,
    pub suppressed: Vec<EmailRecord>,
}
