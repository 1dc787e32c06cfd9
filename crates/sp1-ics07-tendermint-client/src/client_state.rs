//! Client-state configuration.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{error::Error, fraction::Fraction, height::Height};

/// Configuration describing the counterparty chain and trust parameters.
///
/// `latest_height` is monotonically non-decreasing and `is_frozen` is
/// monotonic `false -> true`; both are enforced by the handlers, not by
/// this type, since mutation always goes through
/// [`crate::store::LightClientStore`].
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ClientState {
    /// The counterparty chain's chain ID.
    pub chain_id: String,
    /// Tendermint trust threshold, e.g. `1/3`.
    pub trust_level: Fraction,
    /// The highest height this client has ever trusted.
    pub latest_height: Height,
    /// How long a consensus state remains trusted, in seconds.
    pub trusting_period: u64,
    /// The counterparty's staking unbonding period, in seconds.
    pub unbonding_period: u64,
    /// Whether the client has been frozen by misbehaviour evidence.
    pub is_frozen: bool,
}

impl ClientState {
    /// Constructs a new, unfrozen client state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrustingPeriodTooLong`] if `trusting_period` exceeds
    /// `unbonding_period`.
    pub fn new(
        chain_id: String,
        trust_level: Fraction,
        latest_height: Height,
        trusting_period: u64,
        unbonding_period: u64,
    ) -> Result<Self, Error> {
        if trusting_period > unbonding_period {
            return Err(Error::TrustingPeriodTooLong {
                trusting_period,
                unbonding_period,
            });
        }
        Ok(Self {
            chain_id,
            trust_level,
            latest_height,
            trusting_period,
            unbonding_period,
            is_frozen: false,
        })
    }
}
