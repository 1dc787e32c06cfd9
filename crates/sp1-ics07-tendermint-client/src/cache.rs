//! The per-transaction membership cache.
//!
//! A key-value map scoped to a single host-chain transaction, cleared
//! between transactions but not cleared by an internal revert within one.
//! This crate never threads a real transient-storage handle through. A host
//! binding owns one [`TransientCache`] per transaction and clears it at
//! transaction boundaries the way the host's own transient storage would be
//! cleared automatically.
//!
//! Correctness never depends on this cache's contents, only on the absence
//! of false positives: an entry's presence must imply the same value was
//! already verified at the same height against a trusted root earlier in
//! this transaction.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::{error::Error, messages::KVPair};

/// A per-transaction key-value pair cache, keyed by `(height, path, value)`.
#[derive(Debug, Default)]
pub struct TransientCache {
    entries: HashMap<[u8; 32], u64>,
}

impl TransientCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(revision_height: u64, kv_pair: &KVPair) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(revision_height.to_be_bytes());
        hasher.update((kv_pair.path.len() as u64).to_be_bytes());
        for segment in &kv_pair.path {
            hasher.update((segment.len() as u64).to_be_bytes());
            hasher.update(segment);
        }
        hasher.update((kv_pair.value.len() as u64).to_be_bytes());
        hasher.update(&kv_pair.value);
        hasher.finalize().into()
    }

    /// Populates the cache with `kv_pairs`, all at `timestamp`.
    ///
    /// Called only after all validation and the verifier call for the
    /// proof that produced `kv_pairs` have already succeeded.
    pub fn cache_kv_pairs(&mut self, revision_height: u64, kv_pairs: &[KVPair], timestamp: u64) {
        debug_assert_ne!(timestamp, 0, "zero timestamp is the cache's absence sentinel");
        for kv_pair in kv_pairs {
            self.entries.insert(Self::key(revision_height, kv_pair), timestamp);
        }
    }

    /// Looks up a previously cached pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyValuePairNotInCache`] if `kv_pair` was not
    /// populated at `revision_height` earlier in this transaction.
    pub fn get_cached_kv_pair(&self, revision_height: u64, kv_pair: &KVPair) -> Result<u64, Error> {
        match self.entries.get(&Self::key(revision_height, kv_pair)) {
            Some(&timestamp) if timestamp != 0 => Ok(timestamp),
            _ => Err(Error::KeyValuePairNotInCache),
        }
    }
}
