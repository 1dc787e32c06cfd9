//! Shared public-input validators used by multiple handlers.
//!
//! These bind a proof's declared public inputs to the light client's
//! locally trusted state. A loophole in either function lets an otherwise
//! valid proof apply against the wrong trusted state.

use crate::{
    client_state::ClientState, consensus_state::ConsensusState, constants::ALLOWED_CLOCK_DRIFT_SECONDS,
    error::Error, store::LightClientStore,
};

/// Checks a proof's declared client-state fields and clock reading against
/// locally stored state.
///
/// `latest_height` and `is_frozen` on `public` are intentionally never
/// compared: the prover's view of those is allowed to lag the on-chain
/// view.
///
/// # Errors
///
/// Returns [`Error::ProofIsInTheFuture`] or [`Error::ProofIsTooOld`] if
/// `time` falls outside `[now - ALLOWED_CLOCK_DRIFT_SECONDS, now]`, or one
/// of [`Error::ChainIdMismatch`], [`Error::TrustThresholdMismatch`],
/// [`Error::TrustingPeriodMismatch`], [`Error::UnbondingPeriodMismatch`] if
/// the corresponding field differs from stored state.
pub fn validate_client_state_and_time(
    stored: &ClientState,
    public: &ClientState,
    time: u64,
    now: u64,
) -> Result<(), Error> {
    if time > now {
        return Err(Error::ProofIsInTheFuture { proof_time: time, now });
    }
    if now - time > ALLOWED_CLOCK_DRIFT_SECONDS {
        return Err(Error::ProofIsTooOld {
            proof_time: time,
            now,
            allowed_drift: ALLOWED_CLOCK_DRIFT_SECONDS,
        });
    }
    if stored.chain_id != public.chain_id {
        return Err(Error::ChainIdMismatch {
            expected: stored.chain_id.clone(),
            got: public.chain_id.clone(),
        });
    }
    if stored.trust_level != public.trust_level {
        return Err(Error::TrustThresholdMismatch);
    }
    if stored.trusting_period != public.trusting_period {
        return Err(Error::TrustingPeriodMismatch);
    }
    if stored.unbonding_period != public.unbonding_period {
        return Err(Error::UnbondingPeriodMismatch);
    }
    Ok(())
}

/// Checks a membership proof's declared root against a trusted consensus
/// state stored at `proof_height`.
///
/// # Errors
///
/// Returns [`Error::ConsensusStateNotFound`] or
/// [`Error::ConsensusStateHashMismatch`] if `trusted_consensus_state` is
/// not the one trusted at `proof_height`, or
/// [`Error::ConsensusStateRootMismatch`] if `output_root` differs from
/// `trusted_consensus_state.root`.
pub fn validate_membership_output(
    output_root: [u8; 32],
    proof_height: u64,
    trusted_consensus_state: &ConsensusState,
    store: &LightClientStore,
) -> Result<(), Error> {
    let stored_hash = store.consensus_state_hash(proof_height)?;
    if trusted_consensus_state.canonical_hash() != stored_hash {
        return Err(Error::ConsensusStateHashMismatch { height: proof_height });
    }
    if output_root != trusted_consensus_state.root {
        return Err(Error::ConsensusStateRootMismatch);
    }
    Ok(())
}
