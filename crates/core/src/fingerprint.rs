use md5::{Digest, Md5};
use serde::Serialize;

/// Canonical identity hash for a normalized email address.
///
/// Always exactly 32 lowercase hex characters — MD5 of the trimmed,
/// lowercased address. Fingerprint equality is identity equality; MD5
/// collision risk is accepted, not mitigated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Hash a raw email: trim leading/trailing whitespace, lowercase,
    /// MD5 over the normalized UTF-8 bytes. Total — any string input is
    /// acceptable, including the empty string.
    pub fn of(email: &str) -> Self {
        let normalized = email.trim().to_lowercase();
        let mut hasher = Md5::new();
        hasher.update(normalized.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Accept an entry that is already syntactically a fingerprint
    /// (exactly 32 hex chars, case-insensitive) verbatim, lowercased.
    ///
    /// Used only for suppression entries, so lists can mix raw emails with
    /// pre-hashed identifiers. A 32-hex-char plaintext local part would be
    /// misclassified as pre-hashed; that ambiguity is part of the format.
    pub fn from_prehashed(entry: &str) -> Option<Self> {
        if entry.len() == 32 && entry.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(entry.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Resolve one raw suppression entry: pre-hashed if it looks like a
    /// fingerprint, otherwise hashed as a plaintext email.
    pub fn from_entry(entry: &str) -> Self {
        Self::from_prehashed(entry).unwrap_or_else(|| Self::of(entry))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
