//! Persistent state: the current client state and trusted consensus-state
//! hashes.

use std::collections::BTreeMap;

use crate::{
    client_state::ClientState,
    consensus_state::ABSENT_HASH,
    error::Error,
    height::Height,
};

/// Owns the client's persistent state.
///
/// `consensus_state_hashes` is append-only in practice: the update and
/// combined handlers only ever overwrite an entry when the new hash
/// matches (a [`crate::outputs::UpdateResult::NoOp`]) or when doing so is
/// itself the misbehaviour being flagged.
#[derive(Debug)]
pub struct LightClientStore {
    client_state: ClientState,
    consensus_state_hashes: BTreeMap<u64, [u8; 32]>,
}

impl LightClientStore {
    /// Creates a store seeded with `client_state` and a single trusted
    /// consensus state hash at `client_state.latest_height`.
    #[must_use]
    pub fn new(client_state: ClientState, initial_consensus_state_hash: [u8; 32]) -> Self {
        let mut consensus_state_hashes = BTreeMap::new();
        consensus_state_hashes.insert(
            client_state.latest_height.revision_height,
            initial_consensus_state_hash,
        );
        Self {
            client_state,
            consensus_state_hashes,
        }
    }

    /// The current client state.
    #[must_use]
    pub const fn client_state(&self) -> &ClientState {
        &self.client_state
    }

    /// Whether the client is frozen.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.client_state.is_frozen
    }

    /// Looks up the trusted consensus-state hash at `revision_height`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConsensusStateNotFound`] if no consensus state is
    /// trusted at that height (the stored hash is the absent sentinel).
    pub fn consensus_state_hash(&self, revision_height: u64) -> Result<[u8; 32], Error> {
        match self.consensus_state_hashes.get(&revision_height) {
            Some(hash) if *hash != ABSENT_HASH => Ok(*hash),
            _ => Err(Error::ConsensusStateNotFound { revision_height }),
        }
    }

    /// Looks up the raw stored hash at `revision_height`, returning the
    /// absent sentinel rather than an error when nothing is trusted there.
    ///
    /// Used by [`crate::handlers::update_client::check_update_result`],
    /// which must distinguish "absent" from "present but different" as two
    /// separate outcomes rather than treating both as one error.
    pub(crate) fn raw_consensus_state_hash(&self, revision_height: u64) -> [u8; 32] {
        self.consensus_state_hashes
            .get(&revision_height)
            .copied()
            .unwrap_or(ABSENT_HASH)
    }

    pub(crate) fn set_consensus_state_hash(&mut self, revision_height: u64, hash: [u8; 32]) {
        self.consensus_state_hashes.insert(revision_height, hash);
    }

    /// Advances `latest_height` to `height` if `height` is strictly greater
    /// by revision height; otherwise leaves it unchanged. `latest_height`
    /// never decreases.
    pub(crate) fn advance_latest_height(&mut self, height: Height) {
        if height.revision_height > self.client_state.latest_height.revision_height {
            self.client_state.latest_height = height;
        }
    }

    /// Freezes the client. Irreversible: no method clears this flag.
    pub(crate) fn freeze(&mut self) {
        self.client_state.is_frozen = true;
    }
}
