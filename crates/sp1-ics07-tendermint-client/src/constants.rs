//! Protocol constants for the SP1 ICS-07 Tendermint light client.

/// How far a proof's declared clock reading may lag behind the host
/// chain's current time before it is rejected as stale. Bounds replay of
/// old proofs in later blocks.
pub const ALLOWED_CLOCK_DRIFT_SECONDS: u64 = 1800;

/// Minimum number of key-value pairs a batched membership proof may carry.
pub const MIN_KV_PAIRS_PER_PROOF: usize = 1;

/// Maximum number of key-value pairs a batched membership proof may carry.
pub const MAX_KV_PAIRS_PER_PROOF: usize = 256;
