//! Signature Verifier port

use chrono::{DateTime, Utc};
use platform::eth::{self, Address};

/// Outcome of a successful SIWE verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Recovered signer, equal to the message address
    pub address: Address,
    pub domain: String,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
    pub expiration_time: Option<DateTime<Utc>>,
}

impl VerifiedIdentity {
    /// EIP-55 form of the recovered address
    pub fn checksum_address(&self) -> String {
        eth::checksum(&self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("Malformed SIWE message: {0}")]
    MalformedMessage(String),

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Message expired")]
    Expired,

    #[error("Message is not yet valid")]
    NotYetValid,

    #[error("Domain mismatch: expected {expected}, got {actual}")]
    DomainMismatch { expected: String, actual: String },

    #[error("Signature does not match message address")]
    AddressMismatch,
}

/// Recovers the wallet that signed a SIWE message
///
/// No partial success: either the full message checks out and one address
/// is returned, or verification fails.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, message: &str, signature: &str)
    -> Result<VerifiedIdentity, VerificationError>;
}
