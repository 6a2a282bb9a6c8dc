//! Ethereum Utilities
//!
//! Address parsing/checksumming and personal-sign (EIP-191) signer recovery.

use alloy_core::hex;
use alloy_core::primitives::Signature;

pub use alloy_core::primitives::Address;

/// Length of an `r || s || v` signature in bytes
pub const SIGNATURE_LENGTH: usize = 65;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EthError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("address is not EIP-55 checksummed: {0}")]
    InvalidChecksum(String),

    #[error("signature is not valid hex")]
    SignatureEncoding,

    #[error("signature must be {SIGNATURE_LENGTH} bytes, got {0}")]
    SignatureLength(usize),

    #[error("signature recovery failed: {0}")]
    Recovery(String),
}

/// Parse a `0x`-prefixed address in any letter case
pub fn parse_address(input: &str) -> Result<Address, EthError> {
    let trimmed = input.trim();
    let hex_part = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress(input.to_string()))?;

    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(input.to_string()));
    }

    let bytes = hex::decode(hex_part).map_err(|_| EthError::InvalidAddress(input.to_string()))?;
    Ok(Address::from_slice(&bytes))
}

/// Parse an address that must carry a valid EIP-55 checksum
pub fn parse_checksummed_address(input: &str) -> Result<Address, EthError> {
    let address = parse_address(input)?;
    if checksum(&address) != input.trim() {
        return Err(EthError::InvalidChecksum(input.to_string()));
    }
    Ok(address)
}

/// EIP-55 mixed-case representation
pub fn checksum(address: &Address) -> String {
    address.to_checksum(None)
}

/// Decode a hex `r || s || v` signature (`0x` prefix optional)
pub fn decode_signature(input: &str) -> Result<Signature, EthError> {
    let bytes = hex::decode(input.trim()).map_err(|_| EthError::SignatureEncoding)?;
    if bytes.len() != SIGNATURE_LENGTH {
        return Err(EthError::SignatureLength(bytes.len()));
    }
    Signature::from_raw(&bytes).map_err(|e| EthError::Recovery(e.to_string()))
}

/// Recover the signer of a `personal_sign` message
pub fn recover_personal_signer(message: &[u8], signature: &Signature) -> Result<Address, EthError> {
    signature
        .recover_address_from_msg(message)
        .map_err(|e| EthError::Recovery(e.to_string()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use alloy_core::primitives::{Address, eip191_hash_message};
    use k256::ecdsa::SigningKey;

    /// Deterministic wallet for a given seed byte
    pub fn wallet(seed: u8) -> (Address, SigningKey) {
        let signing_key = SigningKey::from_slice(&[seed; 32]).unwrap();
        let address = Address::from_private_key(&signing_key);
        (address, signing_key)
    }

    /// Sign a message using EIP-191 personal_sign format
    pub fn sign_message(signing_key: &SigningKey, message: &str) -> String {
        let message_hash = eip191_hash_message(message.as_bytes());
        let (sig, recovery_id) = signing_key
            .sign_prehash_recoverable(&message_hash.0)
            .unwrap();

        let mut sig_bytes = [0u8; 65];
        sig_bytes[..64].copy_from_slice(&sig.to_bytes());
        sig_bytes[64] = 27 + recovery_id.to_byte();

        format!("0x{}", hex::encode(sig_bytes))
    }
}
