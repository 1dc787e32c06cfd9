//! Tendermint trust threshold.

use borsh::{BorshDeserialize, BorshSerialize};

/// A trust threshold expressed as a fraction, e.g. `1/3`.
///
/// Compared field-wise against the value embedded in a proof's public
/// values; the client never reduces or cross-multiplies the fraction, since
/// the off-chain prover and the on-chain store must agree on the exact
/// representation, not merely an equivalent one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Fraction {
    /// Numerator of the fraction.
    pub numerator: u64,
    /// Denominator of the fraction.
    pub denominator: u64,
}

impl Fraction {
    /// Creates a new fraction.
    #[must_use]
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}
