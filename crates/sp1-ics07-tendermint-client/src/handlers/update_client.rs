//! The `updateClient` handler.

use tracing::{info, warn};

use super::hex_of;
use crate::{
    client::VerifyingKeys,
    consensus_state::ABSENT_HASH,
    encoding,
    error::Error,
    messages::MsgUpdateClient,
    outputs::{UpdateClientOutput, UpdateResult},
    store::LightClientStore,
    validation::validate_client_state_and_time,
    verifier::ProofVerifier,
};

/// Applies or rejects a new consensus state, detecting self-misbehaviour
/// along the way.
///
/// # Errors
///
/// Returns an error if the client is frozen, the verification key does not
/// match, the public inputs fail validation against stored state, or the
/// verifier rejects the proof.
pub fn update_client<V: ProofVerifier>(
    store: &mut LightClientStore,
    vkeys: &VerifyingKeys,
    verifier: &V,
    msg: &MsgUpdateClient,
    now: u64,
) -> Result<UpdateResult, Error> {
    if store.is_frozen() {
        return Err(Error::FrozenClientState);
    }

    if msg.sp1_proof.vkey != vkeys.update_client {
        warn!("update_client: verification key mismatch");
        return Err(Error::VerificationKeyMismatch {
            expected: hex_of(vkeys.update_client),
            got: hex_of(msg.sp1_proof.vkey),
        });
    }

    let output: UpdateClientOutput = encoding::decode(&msg.sp1_proof.public_values)?;

    validate_client_state_and_time(store.client_state(), &output.client_state, output.time, now)?;

    let trusted_hash = store.consensus_state_hash(output.trusted_height.revision_height)?;
    if output.trusted_consensus_state.canonical_hash() != trusted_hash {
        return Err(Error::ConsensusStateHashMismatch {
            height: output.trusted_height.revision_height,
        });
    }

    let result = check_update_result(store, &output);

    match result {
        UpdateResult::Update => {
            store.advance_latest_height(output.new_height);
            store.set_consensus_state_hash(
                output.new_height.revision_height,
                output.new_consensus_state.canonical_hash(),
            );
        }
        UpdateResult::Misbehaviour => {
            store.freeze();
        }
        UpdateResult::NoOp => {
            info!("update_client: NoOp, skipping verifier call");
            return Ok(UpdateResult::NoOp);
        }
    }

    verifier.verify(msg.sp1_proof.vkey, &msg.sp1_proof.public_values, &msg.sp1_proof.proof)?;

    info!(?result, new_height = %output.new_height, "update_client: applied");
    Ok(result)
}

/// Pure-view decision of what an update proof means, given only on-chain
/// state; never calls the verifier.
pub(crate) fn check_update_result(store: &LightClientStore, output: &UpdateClientOutput) -> UpdateResult {
    let stored = store.raw_consensus_state_hash(output.new_height.revision_height);
    if stored == ABSENT_HASH {
        UpdateResult::Update
    } else if stored != output.new_consensus_state.canonical_hash()
        || output.trusted_consensus_state.timestamp >= output.new_consensus_state.timestamp
    {
        UpdateResult::Misbehaviour
    } else {
        UpdateResult::NoOp
    }
}
