//! Wallet Address Value Object
//!
//! Always held in EIP-55 checksummed form, so one wallet maps to exactly one
//! stored string regardless of how the caller cased it.

use std::fmt;

use platform::eth::{self, Address, EthError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletAddress(Address);

impl WalletAddress {
    /// Accepts any letter case; mixed-case input must carry a valid checksum
    pub fn parse(input: &str) -> Result<Self, EthError> {
        let trimmed = input.trim();
        let address = eth::parse_address(trimmed)?;

        let hex = &trimmed[2..];
        let single_case = hex == hex.to_ascii_lowercase() || hex == hex.to_ascii_uppercase();
        if !single_case && eth::checksum(&address) != trimmed {
            return Err(EthError::InvalidChecksum(input.to_string()));
        }

        Ok(Self(address))
    }

    pub fn from_address(address: Address) -> Self {
        Self(address)
    }

    pub fn address(&self) -> Address {
        self.0
    }

    pub fn to_checksum(&self) -> String {
        eth::checksum(&self.0)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    #[test]
    fn test_parse_normalizes_to_checksum() {
        let lower = WalletAddress::parse(&CHECKSUMMED.to_lowercase()).unwrap();
        let mixed = WalletAddress::parse(CHECKSUMMED).unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower.to_string(), CHECKSUMMED);
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        let broken = CHECKSUMMED.replace("fB69", "Fb69");
        assert!(matches!(
            WalletAddress::parse(&broken),
            Err(EthError::InvalidChecksum(_))
        ));
        assert!(WalletAddress::parse("0xabc").is_err());
    }
}
