//! The external succinct-proof verifier contract.

use crate::error::VerifierError;

/// A black-box succinct-proof verifier.
///
/// The light client never re-executes Tendermint consensus validation
/// itself. It only checks that a proof's declared public inputs are
/// consistent with its own trusted state, then delegates proof validity to
/// this trait.
///
/// Implementations must treat a normal return as the only success signal.
/// Encoding a success flag inside `public_values` instead would let a
/// malformed proof smuggle a fabricated success bit past the real verifier.
pub trait ProofVerifier {
    /// Verifies `proof` against `public_values` under the program
    /// identified by `vkey`.
    ///
    /// # Errors
    ///
    /// Returns a [`VerifierError`] if the proof does not verify.
    fn verify(&self, vkey: [u8; 32], public_values: &[u8], proof: &[u8]) -> Result<(), VerifierError>;
}
