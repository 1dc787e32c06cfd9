//! Shared fixtures for the scenario and property test suites.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use sp1_ics07_tendermint_client::{
    ClientConfig, ClientState, ConsensusState, Fraction, Height, ProofVerifier, VerifierError, VerifyingKeys,
};

pub const UPDATE_CLIENT_VKEY: [u8; 32] = [1u8; 32];
pub const MEMBERSHIP_VKEY: [u8; 32] = [2u8; 32];
pub const UC_AND_MEMBERSHIP_VKEY: [u8; 32] = [3u8; 32];
pub const MISBEHAVIOUR_VKEY: [u8; 32] = [4u8; 32];

/// Decodes a hex-encoded 32-byte vkey fixture, as the fixtures checked in
/// alongside real SP1 programs are recorded.
#[must_use]
pub fn vkey_from_hex(hex_str: &str) -> [u8; 32] {
    let bytes = hex::decode(hex_str).expect("fixture vkey must be valid hex");
    bytes.try_into().expect("fixture vkey must be exactly 32 bytes")
}

pub const CHAIN_ID: &str = "test-chain-1";
pub const TRUSTING_PERIOD: u64 = 100_000;
pub const UNBONDING_PERIOD: u64 = 200_000;

/// A [`ProofVerifier`] that accepts every proof and counts how many times
/// it was called, or rejects every proof if configured to fail.
///
/// The call counter is shared through an [`Arc`] so a test can keep a
/// handle to it after moving the verifier itself into a [`LightClient`](
/// sp1_ics07_tendermint_client::LightClient).
pub struct MockVerifier {
    calls: Arc<AtomicU64>,
    reject: bool,
}

impl MockVerifier {
    #[must_use]
    pub fn accepting() -> Self {
        Self {
            calls: Arc::new(AtomicU64::new(0)),
            reject: false,
        }
    }

    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            calls: Arc::new(AtomicU64::new(0)),
            reject: true,
        }
    }

    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.calls)
    }
}

impl ProofVerifier for MockVerifier {
    fn verify(&self, _vkey: [u8; 32], _public_values: &[u8], _proof: &[u8]) -> Result<(), VerifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            Err(VerifierError::from(anyhow::anyhow!("mock verifier configured to reject")))
        } else {
            Ok(())
        }
    }
}

#[must_use]
pub fn verifying_keys() -> VerifyingKeys {
    VerifyingKeys {
        update_client: UPDATE_CLIENT_VKEY,
        membership: MEMBERSHIP_VKEY,
        update_client_and_membership: UC_AND_MEMBERSHIP_VKEY,
        misbehaviour: MISBEHAVIOUR_VKEY,
    }
}

#[must_use]
pub fn trust_level() -> Fraction {
    Fraction::new(1, 3)
}

#[must_use]
pub fn consensus_state_at(timestamp: u64, root: u8) -> ConsensusState {
    ConsensusState {
        timestamp,
        root: [root; 32],
        next_validators_hash: [0xab; 32],
    }
}

#[must_use]
pub fn client_state_at(height: u64) -> ClientState {
    ClientState::new(
        CHAIN_ID.to_string(),
        trust_level(),
        Height::new(1, height),
        TRUSTING_PERIOD,
        UNBONDING_PERIOD,
    )
    .expect("trusting period does not exceed unbonding period")
}

#[must_use]
pub fn config_at(height: u64, initial_consensus_state: &ConsensusState) -> ClientConfig {
    ClientConfig {
        verifying_keys: verifying_keys(),
        initial_client_state: client_state_at(height),
        initial_consensus_state_hash: initial_consensus_state.canonical_hash(),
    }
}
