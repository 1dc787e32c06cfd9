//! The light client's public façade: configuration and the stateful
//! [`LightClient`] that wraps a store, a verifier, and a transient cache.

use tracing::instrument;

use crate::{
    cache::TransientCache,
    client_state::ClientState,
    error::Error,
    handlers,
    messages::{MsgMembership, MsgSubmitMisbehaviour, MsgUpdateClient},
    outputs::UpdateResult,
    store::LightClientStore,
    verifier::ProofVerifier,
};

/// The four SP1 program identifiers this client accepts proofs for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyingKeys {
    /// The `updateClient` program's verification key.
    pub update_client: [u8; 32],
    /// The `membership` program's verification key.
    pub membership: [u8; 32],
    /// The combined update-client-and-membership program's verification key.
    pub update_client_and_membership: [u8; 32],
    /// The `misbehaviour` program's verification key.
    pub misbehaviour: [u8; 32],
}

/// The data needed to initialize a [`LightClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// The verification keys this client will accept proofs for.
    pub verifying_keys: VerifyingKeys,
    /// The client state to initialize with.
    pub initial_client_state: ClientState,
    /// The canonical hash of the consensus state trusted at
    /// `initial_client_state.latest_height`.
    pub initial_consensus_state_hash: [u8; 32],
}

/// A chain-agnostic ICS-07 Tendermint light client driven by SP1 proofs.
///
/// Generic over a [`ProofVerifier`] so a host binding can plug in whatever
/// concrete succinct-proof verifier it has access to, without this crate
/// depending on any single chain's verifier implementation.
#[derive(Debug)]
pub struct LightClient<V> {
    store: LightClientStore,
    verifying_keys: VerifyingKeys,
    verifier: V,
    cache: TransientCache,
}

impl<V: ProofVerifier> LightClient<V> {
    /// Initializes a light client from `config`.
    #[must_use]
    pub fn new(config: ClientConfig, verifier: V) -> Self {
        Self {
            store: LightClientStore::new(config.initial_client_state, config.initial_consensus_state_hash),
            verifying_keys: config.verifying_keys,
            verifier,
            cache: TransientCache::new(),
        }
    }

    /// Clears the per-transaction membership cache.
    ///
    /// A host binding does not call this in production: its own transient
    /// storage is cleared automatically between transactions. This exists
    /// for test harnesses driving multiple simulated transactions against
    /// one in-memory [`LightClient`].
    pub fn begin_transaction(&mut self) {
        self.cache = TransientCache::new();
    }

    /// The current client state.
    #[must_use]
    pub const fn client_state(&self) -> &ClientState {
        self.store.client_state()
    }

    /// Looks up the trusted consensus-state hash at `revision_height`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConsensusStateNotFound`] if no consensus state is
    /// trusted at that height.
    pub fn consensus_state_hash(&self, revision_height: u64) -> Result<[u8; 32], Error> {
        self.store.consensus_state_hash(revision_height)
    }

    /// Applies or rejects a new consensus state.
    ///
    /// # Errors
    ///
    /// See [`handlers::update_client::update_client`].
    #[instrument(skip_all)]
    pub fn update_client(&mut self, msg: &MsgUpdateClient, now: u64) -> Result<UpdateResult, Error> {
        handlers::update_client::update_client(&mut self.store, &self.verifying_keys, &self.verifier, msg, now)
    }

    /// Serves a (non-)membership query.
    ///
    /// # Errors
    ///
    /// See [`handlers::membership::membership`].
    #[instrument(skip_all)]
    pub fn membership(&mut self, msg: &MsgMembership, now: u64) -> Result<u64, Error> {
        handlers::membership::membership(
            &mut self.store,
            &self.verifying_keys,
            &self.verifier,
            &mut self.cache,
            msg,
            now,
        )
    }

    /// Freezes the client upon proof of two conflicting, independently
    /// trusted consensus states.
    ///
    /// # Errors
    ///
    /// See [`handlers::misbehaviour::submit_misbehaviour`].
    #[instrument(skip_all)]
    pub fn submit_misbehaviour(&mut self, msg: &MsgSubmitMisbehaviour, now: u64) -> Result<(), Error> {
        handlers::misbehaviour::submit_misbehaviour(&mut self.store, &self.verifying_keys, &self.verifier, msg, now)
    }

    /// Client upgrades are not implemented.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::FeatureNotSupported`].
    pub fn upgrade_client(&mut self, _upgrade_data: &[u8]) -> Result<(), Error> {
        Err(Error::FeatureNotSupported)
    }
}
