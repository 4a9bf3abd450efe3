//! Request-scoped result storage.
//!
//! Each completed match run is parked under a fresh `JobId`; download
//! requests address a stored run by id plus a two-valued `Selector`.
//! Results never collide across concurrent callers because every run owns
//! its own id — there are no fixed-name scratch files.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::error::ScrubError;
use crate::model::{EmailRecord, MatchResult};

/// Opaque handle for one completed match run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which output subset a download request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Clean,
    Suppressed,
}

impl Selector {
    /// Flat-file name for this subset.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Clean => "clean_emails.txt",
            Self::Suppressed => "suppressed_emails.txt",
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Suppressed => write!(f, "suppressed"),
        }
    }
}

impl FromStr for Selector {
    type Err = ScrubError;

    /// Anything other than the two literal selector values is a not-found
    /// condition, same as requesting a result that was never computed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clean" => Ok(Self::Clean),
            "suppressed" => Ok(Self::Suppressed),
            other => Err(ScrubError::NotFound {
                what: format!("selector '{other}'"),
            }),
        }
    }
}

/// In-memory arena of completed runs, keyed by job id.
#[derive(Debug, Default)]
pub struct ResultStore {
    jobs: HashMap<JobId, MatchResult>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a result and hand back its id.
    pub fn insert(&mut self, result: MatchResult) -> JobId {
        let id = JobId::new();
        self.jobs.insert(id, result);
        id
    }

    pub fn get(&self, id: JobId) -> Option<&MatchResult> {
        self.jobs.get(&id)
    }

    /// The subset a download selector addresses, or `NotFound` if the job
    /// does not exist (e.g. nothing has been computed yet).
    pub fn list(&self, id: JobId, selector: Selector) -> Result<&[EmailRecord], ScrubError> {
        let result = self.jobs.get(&id).ok_or_else(|| ScrubError::NotFound {
            what: format!("job {id}"),
        })?;
        Ok(match selector {
            Selector::Clean => &result.clean,
            Selector::Suppressed => &result.suppressed,
        })
    }

    /// Results are ephemeral; callers drop them when done.
    pub fn remove(&mut self, id: JobId) -> Option<MatchResult> {
        self.jobs.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
