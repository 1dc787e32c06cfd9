//! Wire messages and the types nested inside them.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{consensus_state::ConsensusState, height::Height};

/// A single path/value pair inside a (non-)membership proof.
///
/// Path equality is element-wise byte equality with matching length.
/// Non-membership is encoded as a pair whose `value` is empty.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct KVPair {
    /// The storage path, as a sequence of raw path segments.
    pub path: Vec<Vec<u8>>,
    /// The value at `path`, or empty for a non-membership proof.
    pub value: Vec<u8>,
}

impl KVPair {
    /// Creates a new key-value pair.
    #[must_use]
    pub const fn new(path: Vec<Vec<u8>>, value: Vec<u8>) -> Self {
        Self { path, value }
    }

    /// Whether this pair encodes a non-membership proof.
    #[must_use]
    pub fn is_non_membership(&self) -> bool {
        self.value.is_empty()
    }
}

/// An opaque succinct proof tagged with the program that produced it.
///
/// Everything but `vkey` is opaque to this client: `public_values` decodes
/// into one of the typed outputs depending on which handler receives it,
/// and `proof` is only ever handed to the external verifier.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct Sp1Proof {
    /// The 32-byte identifier of the SP1 program that produced this proof.
    pub vkey: [u8; 32],
    /// The program's declared public values.
    pub public_values: Vec<u8>,
    /// The opaque proof bytes.
    pub proof: Vec<u8>,
}

/// `updateClient` message.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct MsgUpdateClient {
    /// The update-client proof.
    pub sp1_proof: Sp1Proof,
}

/// `misbehaviour` message.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct MsgSubmitMisbehaviour {
    /// The misbehaviour proof.
    pub sp1_proof: Sp1Proof,
}

/// `membership` message.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct MsgMembership {
    /// The height the caller claims `path` maps to `value` at.
    pub proof_height: Height,
    /// The requested path.
    pub path: Vec<Vec<u8>>,
    /// The requested value (empty for a non-membership request).
    pub value: Vec<u8>,
    /// An encoded [`MembershipProof`], or empty to serve from the
    /// per-transaction cache populated by an earlier batched proof.
    pub proof: Vec<u8>,
}

/// The proof-type tag a [`MsgMembership`]'s non-empty `proof` is dispatched
/// on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MembershipProofType {
    /// A single-height SP1 membership proof.
    Sp1Membership = 0,
    /// A combined SP1 update-client-and-membership proof.
    Sp1MembershipAndUpdateClient = 1,
}

/// The tagged envelope a [`MsgMembership`]'s `proof` field decodes into.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct MembershipProof {
    /// The proof-type tag; see [`MembershipProofType`].
    pub proof_type: u8,
    /// The inner, type-specific proof bytes.
    pub proof: Vec<u8>,
}

/// The inner proof carried by a [`MembershipProof`] tagged
/// [`MembershipProofType::Sp1Membership`].
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct Sp1MembershipProof {
    /// The membership proof.
    pub sp1_proof: Sp1Proof,
    /// The consensus state the caller claims is trusted at `proofHeight`.
    pub trusted_consensus_state: ConsensusState,
}

/// The inner proof carried by a [`MembershipProof`] tagged
/// [`MembershipProofType::Sp1MembershipAndUpdateClient`].
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct Sp1MembershipAndUpdateClientProof {
    /// The combined update-client-and-membership proof.
    pub sp1_proof: Sp1Proof,
}
