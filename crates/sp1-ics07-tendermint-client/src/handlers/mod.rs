//! Message handlers: the light client's public surface.

pub mod membership;
pub mod misbehaviour;
pub mod uc_and_membership;
pub mod update_client;

use crate::{
    constants::{MAX_KV_PAIRS_PER_PROOF, MIN_KV_PAIRS_PER_PROOF},
    error::Error,
    messages::KVPair,
};

/// Finds the first pair in `kv_pairs` whose path matches `path`, and
/// compares its value to `value` byte-for-byte.
///
/// The scan stops at the first match; duplicate paths in a batch are
/// tolerated and never cause divergence, since only the first occurrence
/// is ever consulted regardless of the batch's order.
pub(crate) fn find_and_check_kv_pair(
    kv_pairs: &[KVPair],
    path: &[Vec<u8>],
    value: &[u8],
) -> Result<(), Error> {
    match kv_pairs.iter().find(|kv| kv.path == path) {
        None => Err(Error::MembershipProofKeyNotFound),
        Some(kv) if kv.value == value => Ok(()),
        Some(_) => Err(Error::MembershipProofValueMismatch),
    }
}

/// Checks that a batch's length falls within `[MIN_KV_PAIRS_PER_PROOF,
/// MAX_KV_PAIRS_PER_PROOF]`.
pub(crate) fn check_kv_pairs_len(len: usize) -> Result<(), Error> {
    if (MIN_KV_PAIRS_PER_PROOF..=MAX_KV_PAIRS_PER_PROOF).contains(&len) {
        Ok(())
    } else {
        Err(Error::LengthIsOutOfRange {
            actual: len,
            min: MIN_KV_PAIRS_PER_PROOF,
            max: MAX_KV_PAIRS_PER_PROOF,
        })
    }
}

pub(crate) fn hex_of(bytes: [u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in bytes {
        s.push_str(&format!("{b:02x}"));
    }
    s
}
