//! The `submitMisbehaviour` handler.

use tracing::warn;

use super::hex_of;
use crate::{
    client::VerifyingKeys,
    encoding,
    error::Error,
    messages::MsgSubmitMisbehaviour,
    outputs::MisbehaviourOutput,
    store::LightClientStore,
    validation::validate_client_state_and_time,
    verifier::ProofVerifier,
};

/// Freezes the client upon proof of two conflicting, independently trusted
/// consensus states.
///
/// # Errors
///
/// Returns an error if the client is already frozen, the verification key
/// does not match, either trusted consensus state fails to match stored
/// state, or the verifier rejects the proof.
pub fn submit_misbehaviour<V: ProofVerifier>(
    store: &mut LightClientStore,
    vkeys: &VerifyingKeys,
    verifier: &V,
    msg: &MsgSubmitMisbehaviour,
    now: u64,
) -> Result<(), Error> {
    if store.is_frozen() {
        return Err(Error::FrozenClientState);
    }

    if msg.sp1_proof.vkey != vkeys.misbehaviour {
        return Err(Error::VerificationKeyMismatch {
            expected: hex_of(vkeys.misbehaviour),
            got: hex_of(msg.sp1_proof.vkey),
        });
    }

    let output: MisbehaviourOutput = encoding::decode(&msg.sp1_proof.public_values)?;

    validate_client_state_and_time(store.client_state(), &output.client_state, output.time, now)?;

    let hash_1 = store.consensus_state_hash(output.trusted_height_1.revision_height)?;
    if output.trusted_consensus_state_1.canonical_hash() != hash_1 {
        return Err(Error::ConsensusStateHashMismatch {
            height: output.trusted_height_1.revision_height,
        });
    }

    let hash_2 = store.consensus_state_hash(output.trusted_height_2.revision_height)?;
    if output.trusted_consensus_state_2.canonical_hash() != hash_2 {
        return Err(Error::ConsensusStateHashMismatch {
            height: output.trusted_height_2.revision_height,
        });
    }

    verifier.verify(msg.sp1_proof.vkey, &msg.sp1_proof.public_values, &msg.sp1_proof.proof)?;

    store.freeze();
    warn!("submit_misbehaviour: client frozen");
    Ok(())
}
