//! The combined update-client-and-membership handler.

use tracing::info;

use super::{check_kv_pairs_len, find_and_check_kv_pair, hex_of};
use crate::{
    cache::TransientCache,
    client::VerifyingKeys,
    encoding,
    error::Error,
    handlers::update_client::check_update_result,
    messages::{MsgMembership, Sp1MembershipAndUpdateClientProof},
    outputs::{UcAndMembershipOutput, UpdateResult},
    store::LightClientStore,
    validation::{validate_client_state_and_time, validate_membership_output},
    verifier::ProofVerifier,
};

/// Applies an update-client proof and serves a membership request against
/// the resulting consensus state in one call.
///
/// # Errors
///
/// Returns [`Error::ProofHeightMismatch`] if the caller's requested height
/// does not match the update's new height, [`Error::CannotHandleMisbehavior`]
/// if the update turns out to be self-misbehaviour (the client is frozen
/// regardless), or any error [`crate::handlers::update_client::update_client`]
/// or [`crate::handlers::membership::membership`] can raise.
pub(crate) fn uc_and_membership<V: ProofVerifier>(
    store: &mut LightClientStore,
    vkeys: &VerifyingKeys,
    verifier: &V,
    cache: &mut TransientCache,
    msg: &MsgMembership,
    inner: &[u8],
    now: u64,
) -> Result<u64, Error> {
    let proof: Sp1MembershipAndUpdateClientProof = encoding::decode(inner)?;

    if proof.sp1_proof.vkey != vkeys.update_client_and_membership {
        return Err(Error::VerificationKeyMismatch {
            expected: hex_of(vkeys.update_client_and_membership),
            got: hex_of(proof.sp1_proof.vkey),
        });
    }

    let output: UcAndMembershipOutput = encoding::decode(&proof.sp1_proof.public_values)?;
    check_kv_pairs_len(output.kv_pairs.len())?;

    let uc = &output.update_client_output;
    if msg.proof_height != uc.new_height {
        return Err(Error::ProofHeightMismatch);
    }

    validate_client_state_and_time(store.client_state(), &uc.client_state, uc.time, now)?;

    let trusted_hash = store.consensus_state_hash(uc.trusted_height.revision_height)?;
    if uc.trusted_consensus_state.canonical_hash() != trusted_hash {
        return Err(Error::ConsensusStateHashMismatch {
            height: uc.trusted_height.revision_height,
        });
    }

    verifier.verify(
        proof.sp1_proof.vkey,
        &proof.sp1_proof.public_values,
        &proof.sp1_proof.proof,
    )?;

    let result = check_update_result(store, uc);
    match result {
        UpdateResult::Update => {
            store.advance_latest_height(uc.new_height);
            store.set_consensus_state_hash(uc.new_height.revision_height, uc.new_consensus_state.canonical_hash());
        }
        UpdateResult::Misbehaviour => {
            store.freeze();
            return Err(Error::CannotHandleMisbehavior);
        }
        UpdateResult::NoOp => {}
    }

    find_and_check_kv_pair(&output.kv_pairs, &msg.path, &msg.value)?;

    validate_membership_output(
        uc.new_consensus_state.root,
        uc.new_height.revision_height,
        &uc.new_consensus_state,
        store,
    )?;

    if output.kv_pairs.len() > 1 {
        cache.cache_kv_pairs(uc.new_height.revision_height, &output.kv_pairs, uc.new_consensus_state.timestamp);
    }

    info!(?result, new_height = %uc.new_height, "uc_and_membership: applied");
    Ok(uc.new_consensus_state.timestamp)
}
