use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::Analysis;

/// Hex SHA-256 of an upload.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Results of earlier uploads keyed by [`content_hash`].
///
/// Entries are only valid for the pipeline configuration they were computed
/// with; [`OpenApnea`](crate::OpenApnea) clears its cache whenever the
/// configuration changes.
#[derive(Debug, Default)]
pub struct SummaryCache {
    entries: HashMap<String, Analysis>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Analysis> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, analysis: Analysis) {
        self.entries.insert(key, analysis);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_hex() {
        assert_eq!(
            content_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(content_hash(b"a"), content_hash(b"b"));
    }
}
