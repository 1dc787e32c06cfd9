//! The typed outputs a proof's public values decode into.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{client_state::ClientState, consensus_state::ConsensusState, height::Height, messages::KVPair};

/// Public values of an update-client proof.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct UpdateClientOutput {
    /// The height the proof was verified against.
    pub trusted_height: Height,
    /// The consensus state the proof claims was trusted at `trusted_height`.
    pub trusted_consensus_state: ConsensusState,
    /// The height the new header was at.
    pub new_height: Height,
    /// The consensus state derived from the new header.
    pub new_consensus_state: ConsensusState,
    /// The prover's view of the client's configuration.
    ///
    /// Only `chain_id`, `trust_level`, `trusting_period`, and
    /// `unbonding_period` are ever compared against stored state.
    /// `latest_height` and `is_frozen` are intentionally ignored, since the
    /// prover's view of those is allowed to lag the on-chain view.
    pub client_state: ClientState,
    /// The prover's declared wall-clock time, in Unix seconds.
    pub time: u64,
}

/// Public values of a membership proof.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct MembershipOutput {
    /// The commitment root the batch was proven against.
    pub commitment_root: [u8; 32],
    /// The verified key-value pairs, `1..=256` of them.
    pub kv_pairs: Vec<KVPair>,
}

/// Public values of a combined update-client-and-membership proof.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct UcAndMembershipOutput {
    /// The update-client portion of the proof.
    pub update_client_output: UpdateClientOutput,
    /// The verified key-value pairs, `1..=256` of them, proven against
    /// `update_client_output.new_consensus_state.root`.
    pub kv_pairs: Vec<KVPair>,
}

/// Public values of a misbehaviour proof.
#[derive(Clone, Debug, BorshSerialize, BorshDeserialize)]
pub struct MisbehaviourOutput {
    /// The prover's view of the client's configuration.
    pub client_state: ClientState,
    /// The first conflicting header's trusted height.
    pub trusted_height_1: Height,
    /// The consensus state trusted at `trusted_height_1`.
    pub trusted_consensus_state_1: ConsensusState,
    /// The second conflicting header's trusted height.
    pub trusted_height_2: Height,
    /// The consensus state trusted at `trusted_height_2`.
    pub trusted_consensus_state_2: ConsensusState,
    /// The prover's declared wall-clock time, in Unix seconds.
    pub time: u64,
}

/// The outcome of an `updateClient` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum UpdateResult {
    /// A new consensus state was trusted and `latestHeight` may have
    /// advanced.
    Update,
    /// A conflicting consensus state was detected at an already-trusted
    /// height; the client is now frozen.
    Misbehaviour,
    /// The proof restates an already-trusted consensus state; no storage
    /// was written and the verifier was not called.
    NoOp,
}
