//! Tendermint revision height.

use borsh::{BorshDeserialize, BorshSerialize};

/// A Tendermint height: a `(revision_number, revision_height)` pair.
///
/// Comparison is lexicographic on the pair, but only `revision_height` is
/// ever used as a key into the consensus-state-hash map. Revision numbers
/// only change across a chain upgrade, which this client does not support.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct Height {
    /// The counterparty chain's revision number.
    pub revision_number: u64,
    /// The height within that revision.
    pub revision_height: u64,
}

impl Height {
    /// Creates a new height.
    #[must_use]
    pub const fn new(revision_number: u64, revision_height: u64) -> Self {
        Self {
            revision_number,
            revision_height,
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}
