//! SIWE Signature Verifier
//!
//! EIP-4361 message parsing, validity window, then EIP-191 signer recovery.

use chrono::{DateTime, Utc};
use platform::eth;
use platform::siwe::{SiweError, SiweMessage};

use crate::domain::verifier::{SignatureVerifier, VerificationError, VerifiedIdentity};

#[derive(Debug, Clone, Default)]
pub struct SiweVerifier {
    /// When set, the message domain must equal this value
    expected_domain: Option<String>,
}

impl SiweVerifier {
    pub fn new(expected_domain: Option<String>) -> Self {
        Self { expected_domain }
    }

    /// Verify against an explicit clock
    pub fn verify_at(
        &self,
        message: &str,
        signature: &str,
        now: DateTime<Utc>,
    ) -> Result<VerifiedIdentity, VerificationError> {
        let parsed: SiweMessage = message.parse().map_err(malformed)?;

        if let Some(expected) = &self.expected_domain {
            if !parsed.domain.eq_ignore_ascii_case(expected) {
                return Err(VerificationError::DomainMismatch {
                    expected: expected.clone(),
                    actual: parsed.domain,
                });
            }
        }

        parsed.validate_time(now).map_err(|e| match e {
            SiweError::Expired(_) => VerificationError::Expired,
            SiweError::NotYetValid(_) => VerificationError::NotYetValid,
            other => malformed(other),
        })?;

        let signature = eth::decode_signature(signature)
            .map_err(|e| VerificationError::MalformedSignature(e.to_string()))?;
        let signer = eth::recover_personal_signer(message.as_bytes(), &signature)
            .map_err(|e| VerificationError::MalformedSignature(e.to_string()))?;

        if signer != parsed.address {
            return Err(VerificationError::AddressMismatch);
        }

        Ok(VerifiedIdentity {
            address: signer,
            domain: parsed.domain,
            chain_id: parsed.chain_id,
            nonce: parsed.nonce,
            issued_at: parsed.issued_at,
            expiration_time: parsed.expiration_time,
        })
    }
}

fn malformed(err: SiweError) -> VerificationError {
    VerificationError::MalformedMessage(err.to_string())
}

impl SignatureVerifier for SiweVerifier {
    fn verify(&self, message: &str, signature: &str) -> Result<VerifiedIdentity, VerificationError> {
        self.verify_at(message, signature, Utc::now())
    }
}
