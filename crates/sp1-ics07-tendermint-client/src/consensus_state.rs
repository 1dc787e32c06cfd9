//! Consensus-state snapshots and their canonical hash.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};

/// The canonical hash reserved to mean "no consensus state is trusted at
/// this height". The hash function is assumed, as a cryptographic
/// assumption, to never produce this value for a real consensus state.
pub const ABSENT_HASH: [u8; 32] = [0u8; 32];

/// A snapshot of the counterparty chain at a given height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ConsensusState {
    /// The block timestamp, in Unix seconds.
    pub timestamp: u64,
    /// The commitment root (app hash) of the counterparty's state.
    pub root: [u8; 32],
    /// The hash of the counterparty's next validator set.
    pub next_validators_hash: [u8; 32],
}

impl ConsensusState {
    /// The canonical hash used to identify this consensus state inside the
    /// consensus-state-hash map and inside proof public values.
    ///
    /// This serialization order is an external contract with the off-chain
    /// prover: any disagreement here is a silent soundness failure, so it
    /// is deliberately fixed in this single function rather than derived
    /// from the struct's field order.
    #[must_use]
    pub fn canonical_hash(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.timestamp.to_be_bytes());
        hasher.update(self.root);
        hasher.update(self.next_validators_hash);
        hasher.finalize().into()
    }
}
