//! The `membership` handler: dispatches to the cache, a single-height
//! proof, or the combined update-and-membership proof.

use tracing::info;

use super::{check_kv_pairs_len, find_and_check_kv_pair, hex_of, uc_and_membership::uc_and_membership};
use crate::{
    cache::TransientCache,
    client::VerifyingKeys,
    encoding,
    error::Error,
    messages::{KVPair, MembershipProof, MsgMembership, Sp1MembershipProof},
    outputs::MembershipOutput,
    store::LightClientStore,
    validation::validate_membership_output,
    verifier::ProofVerifier,
};

/// Serves a (non-)membership query, either from a fresh proof or from the
/// per-transaction cache.
///
/// # Errors
///
/// Returns an error if the client is frozen, the proof fails any public-input
/// check, the verifier rejects the proof, or a cache lookup misses.
pub fn membership<V: ProofVerifier>(
    store: &mut LightClientStore,
    vkeys: &VerifyingKeys,
    verifier: &V,
    cache: &mut TransientCache,
    msg: &MsgMembership,
    now: u64,
) -> Result<u64, Error> {
    if store.is_frozen() {
        return Err(Error::FrozenClientState);
    }

    if msg.proof.is_empty() {
        let kv_pair = KVPair::new(msg.path.clone(), msg.value.clone());
        return cache.get_cached_kv_pair(msg.proof_height.revision_height, &kv_pair);
    }

    let envelope: MembershipProof = encoding::decode(&msg.proof)?;
    match envelope.proof_type {
        0 => single_height_membership(store, vkeys, verifier, cache, msg, &envelope.proof),
        1 => uc_and_membership(store, vkeys, verifier, cache, msg, &envelope.proof, now),
        tag => Err(Error::UnknownMembershipProofType { tag }),
    }
}

fn single_height_membership<V: ProofVerifier>(
    store: &mut LightClientStore,
    vkeys: &VerifyingKeys,
    verifier: &V,
    cache: &mut TransientCache,
    msg: &MsgMembership,
    inner: &[u8],
) -> Result<u64, Error> {
    let proof: Sp1MembershipProof = encoding::decode(inner)?;

    if proof.sp1_proof.vkey != vkeys.membership {
        return Err(Error::VerificationKeyMismatch {
            expected: hex_of(vkeys.membership),
            got: hex_of(proof.sp1_proof.vkey),
        });
    }

    let output: MembershipOutput = encoding::decode(&proof.sp1_proof.public_values)?;
    check_kv_pairs_len(output.kv_pairs.len())?;

    find_and_check_kv_pair(&output.kv_pairs, &msg.path, &msg.value)?;

    validate_membership_output(
        output.commitment_root,
        msg.proof_height.revision_height,
        &proof.trusted_consensus_state,
        store,
    )?;

    verifier.verify(
        proof.sp1_proof.vkey,
        &proof.sp1_proof.public_values,
        &proof.sp1_proof.proof,
    )?;

    if output.kv_pairs.len() > 1 {
        cache.cache_kv_pairs(
            msg.proof_height.revision_height,
            &output.kv_pairs,
            proof.trusted_consensus_state.timestamp,
        );
    }

    info!(height = msg.proof_height.revision_height, "membership: verified");
    Ok(proof.trusted_consensus_state.timestamp)
}
