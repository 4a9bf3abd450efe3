use std::collections::HashSet;

use crate::fingerprint::Fingerprint;

/// Set of identities that must be excluded from a candidate list.
///
/// Built once per run from the raw suppression input, then immutable for
/// the duration of the match. Only membership matters; iteration order is
/// never observed.
#[derive(Debug, Clone, Default)]
pub struct SuppressionSet {
    hashes: HashSet<Fingerprint>,
}

impl SuppressionSet {
    /// Build from raw suppression entries. An entry that already looks like
    /// a fingerprint (32 hex chars) is taken verbatim, lowercased; anything
    /// else is hashed as a plaintext email. Duplicates collapse.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hashes = entries
            .into_iter()
            .map(|entry| Fingerprint::from_entry(entry.as_ref()))
            .collect();
        Self { hashes }
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.hashes.contains(fingerprint)
    }

    /// Distinct identities in the set.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_plaintext_and_prehashed_entries() {
        let prehashed = Fingerprint::of("b@x.com");
        let set =
            SuppressionSet::from_entries(["a@x.com".to_string(), prehashed.to_string()]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Fingerprint::of("a@x.com")));
        assert!(set.contains(&Fingerprint::of("b@x.com")));
        assert!(!set.contains(&Fingerprint::of("c@x.com")));
    }

    #[test]
    fn duplicates_collapse() {
        // Same identity three ways: plaintext, cased, pre-hashed
        let fp = Fingerprint::of("a@x.com");
        let set = SuppressionSet::from_entries([
            "a@x.com".to_string(),
            "A@X.COM".to_string(),
            fp.to_string(),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_input_builds_empty_set() {
        let set = SuppressionSet::from_entries(Vec::<String>::new());
        assert!(set.is_empty());
        assert!(!set.contains(&Fingerprint::of("a@x.com")));
    }
}
