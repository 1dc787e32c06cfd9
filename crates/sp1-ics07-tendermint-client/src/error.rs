//! The error taxonomy for the light client's public handlers.
//!
//! Every variant here is fatal to the handler invocation it was raised
//! from; none are recovered from internally. A host binding is expected to
//! unwind any persistent storage writes it made before propagating the
//! error further (e.g. by reverting the enclosing transaction).

use thiserror::Error;

/// An external succinct-proof verifier rejected a proof, or otherwise
/// failed in a way the core does not itself enumerate.
///
/// The verifier is an external collaborator; this wraps whatever failure
/// it reports without trying to interpret it.
#[derive(Debug, Error)]
#[error("proof verifier rejected the proof: {0}")]
pub struct VerifierError(pub anyhow::Error);

impl From<anyhow::Error> for VerifierError {
    fn from(inner: anyhow::Error) -> Self {
        Self(inner)
    }
}

/// Errors returned by the light client's public handlers.
#[derive(Debug, Error)]
pub enum Error {
    /// A write-capable handler was invoked while the client is frozen.
    #[error("client is frozen")]
    FrozenClientState,

    /// A proof was tagged with a verification key other than the one this
    /// client was configured to accept for that program.
    #[error("verification key mismatch: expected {expected}, got {got}")]
    VerificationKeyMismatch {
        /// The vkey this client expects for the program in question.
        expected: String,
        /// The vkey the proof actually carried.
        got: String,
    },

    /// The claimed trusted consensus state's canonical hash does not match
    /// what is stored at the claimed height.
    #[error("consensus state hash mismatch at height {height}")]
    ConsensusStateHashMismatch {
        /// The revision height the mismatch occurred at.
        height: u64,
    },

    /// A proof's declared commitment root does not match the trusted
    /// consensus state's root.
    #[error("consensus state root mismatch")]
    ConsensusStateRootMismatch,

    /// No consensus state is trusted at the requested height.
    #[error("no trusted consensus state at height {revision_height}")]
    ConsensusStateNotFound {
        /// The height that was queried.
        revision_height: u64,
    },

    /// A proof's public client state names a different chain ID than the
    /// one this client is configured with.
    #[error("chain id mismatch: expected {expected:?}, got {got:?}")]
    ChainIdMismatch {
        /// The chain ID this client is configured with.
        expected: String,
        /// The chain ID the proof's public values declared.
        got: String,
    },

    /// A proof's public trust threshold does not match the configured one.
    #[error("trust threshold mismatch")]
    TrustThresholdMismatch,

    /// A proof's public trusting period does not match the configured one.
    #[error("trusting period mismatch")]
    TrustingPeriodMismatch,

    /// A proof's public unbonding period does not match the configured one.
    #[error("unbonding period mismatch")]
    UnbondingPeriodMismatch,

    /// A proof declared a time later than the host chain's current time.
    #[error("proof time {proof_time} is after the current time {now}")]
    ProofIsInTheFuture {
        /// The time the proof declared, in Unix seconds.
        proof_time: u64,
        /// The host chain's current time, in Unix seconds.
        now: u64,
    },

    /// A proof declared a time further in the past than the allowed clock
    /// drift.
    #[error(
        "proof time {proof_time} is more than {allowed_drift}s behind current time {now}"
    )]
    ProofIsTooOld {
        /// The time the proof declared, in Unix seconds.
        proof_time: u64,
        /// The host chain's current time, in Unix seconds.
        now: u64,
        /// The maximum allowed drift, in seconds.
        allowed_drift: u64,
    },

    /// No pair in a membership proof's batch matches the requested path.
    #[error("no key-value pair in the batch matches the requested path")]
    MembershipProofKeyNotFound,

    /// A batch contained the requested path, but with a different value.
    #[error("membership proof value does not match the requested value")]
    MembershipProofValueMismatch,

    /// A length fell outside its allowed inclusive range.
    #[error("length {actual} is out of range [{min}, {max}]")]
    LengthIsOutOfRange {
        /// The length actually observed.
        actual: usize,
        /// The minimum allowed length, inclusive.
        min: usize,
        /// The maximum allowed length, inclusive.
        max: usize,
    },

    /// A membership message carried a proof-type tag this client does not
    /// recognize.
    #[error("unknown membership proof type tag {tag}")]
    UnknownMembershipProofType {
        /// The unrecognized tag.
        tag: u8,
    },

    /// `membership` was called with an empty proof, but no prior call in
    /// this transaction populated the requested pair in the cache.
    #[error("requested key-value pair was not populated in the transient cache")]
    KeyValuePairNotInCache,

    /// The combined update-and-membership proof's height did not match the
    /// height the caller requested membership at.
    #[error("proof height does not match the update client output's new height")]
    ProofHeightMismatch,

    /// The combined handler detected misbehaviour; the client is now
    /// frozen and this call cannot also serve the membership request.
    #[error(
        "misbehaviour detected in combined proof; client is now frozen and membership was not served"
    )]
    CannotHandleMisbehavior,

    /// Constructor-time configuration error: trusting period exceeds
    /// unbonding period.
    #[error(
        "trusting period ({trusting_period}s) must not exceed unbonding period ({unbonding_period}s)"
    )]
    TrustingPeriodTooLong {
        /// The configured trusting period, in seconds.
        trusting_period: u64,
        /// The configured unbonding period, in seconds.
        unbonding_period: u64,
    },

    /// An operation this client does not implement (currently only client
    /// upgrades).
    #[error("feature not supported")]
    FeatureNotSupported,

    /// A canonically-encoded value failed to decode.
    #[error("decoding failed: {0}")]
    Decode(String),

    /// The external proof verifier rejected the proof.
    #[error(transparent)]
    VerificationFailed(#[from] VerifierError),
}
