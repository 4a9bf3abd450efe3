//! `mailscrub-core` — Email suppression matching engine.
//!
//! Pure engine crate: receives pre-loaded records, returns the
//! clean/suppressed partition. No file or terminal IO.

pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod ingest;
pub mod matcher;
pub mod model;
pub mod store;
pub mod suppression;

pub use engine::run;
pub use error::ScrubError;
pub use fingerprint::Fingerprint;
pub use ingest::InputFormat;
pub use model::{MatchOptions, MatchResult, MatchSummary};
pub use store::{JobId, ResultStore, Selector};
pub use suppression::SuppressionSet;
