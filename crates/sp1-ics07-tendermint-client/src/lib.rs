//! A chain-agnostic ICS-07 Tendermint light client whose header
//! verification is delegated to an external SP1 succinct-proof verifier.
//!
//! Each handler's job is narrow: decode a proof's public values, bind them
//! to locally trusted state, and let the verifier settle proof validity.
//! Tendermint header and signature verification, the off-chain prover
//! pipeline, and client upgrades are all out of scope for this crate.

#![deny(missing_docs, clippy::nursery, clippy::pedantic, warnings, unused_crate_dependencies)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
use hex as _;
#[cfg(test)]
use rstest as _;

pub mod cache;
pub mod client;
pub mod client_state;
pub mod consensus_state;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod fraction;
pub mod handlers;
pub mod height;
pub mod messages;
pub mod outputs;
pub mod store;
pub mod validation;
pub mod verifier;

pub use client::{ClientConfig, LightClient, VerifyingKeys};
pub use client_state::ClientState;
pub use consensus_state::ConsensusState;
pub use error::{Error, VerifierError};
pub use fraction::Fraction;
pub use height::Height;
pub use messages::{
    KVPair, MembershipProof, MembershipProofType, MsgMembership, MsgSubmitMisbehaviour, MsgUpdateClient, Sp1Proof,
};
pub use outputs::{MembershipOutput, MisbehaviourOutput, UcAndMembershipOutput, UpdateClientOutput, UpdateResult};
pub use verifier::ProofVerifier;
