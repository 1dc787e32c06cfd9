//! Canonical binary encoding for values crossing the proof boundary.
//!
//! Every structured value a proof's public values decode into, plus every
//! message this client accepts, uses Borsh. The exact scheme is an external
//! contract with the off-chain prover; this module is the single place
//! that contract is fixed.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::Error;

/// Decodes a canonically-encoded value.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `bytes` is not a valid encoding of `T`.
pub fn decode<T: BorshDeserialize>(bytes: &[u8]) -> Result<T, Error> {
    T::try_from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Canonically encodes a value.
///
/// # Panics
///
/// Panics if `T`'s `BorshSerialize` implementation fails, which does not
/// happen for any type in this crate (none perform fallible I/O).
#[must_use]
pub fn encode<T: BorshSerialize>(value: &T) -> Vec<u8> {
    borsh::to_vec(value).expect("canonical encoding of an in-memory value never fails")
}
