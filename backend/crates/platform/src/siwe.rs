//! Sign-In with Ethereum (EIP-4361) message codec
//!
//! ```text
//! ${scheme}://${domain} wants you to sign in with your Ethereum account:
//! ${address}
//!
//! ${statement}
//!
//! URI: ${uri}
//! Version: ${version}
//! Chain ID: ${chain-id}
//! Nonce: ${nonce}
//! Issued At: ${issued-at}
//! Expiration Time: ${expiration-time}
//! Not Before: ${not-before}
//! Request ID: ${request-id}
//! Resources:
//! - ${resources[0]}
//! ```
//!
//! Scheme, statement and everything after `Issued At` are optional. Fields
//! appear in the order above, each at most once, with no blank lines between.
//! Parsing never touches the signature; see [`crate::eth`] for recovery.

use std::fmt;
use std::iter::Peekable;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::eth::{self, Address};

const HEADER_SUFFIX: &str = " wants you to sign in with your Ethereum account:";
const SUPPORTED_VERSION: &str = "1";
const NONCE_MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiweError {
    #[error("missing or malformed header line")]
    Header,

    #[error("invalid address line: {0}")]
    Address(String),

    #[error("unexpected line: {0}")]
    UnexpectedLine(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("unsupported version: {0}")]
    UnsupportedVersion(String),

    #[error("message expired at {0}")]
    Expired(DateTime<Utc>),

    #[error("message not valid before {0}")]
    NotYetValid(DateTime<Utc>),
}

/// Parsed EIP-4361 message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiweMessage {
    pub scheme: Option<String>,
    pub domain: String,
    pub address: Address,
    pub statement: Option<String>,
    pub uri: String,
    pub version: String,
    pub chain_id: u64,
    pub nonce: String,
    pub issued_at: DateTime<Utc>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub not_before: Option<DateTime<Utc>>,
    pub request_id: Option<String>,
    pub resources: Vec<String>,
}

impl SiweMessage {
    /// Checks the validity window against `now`
    pub fn validate_time(&self, now: DateTime<Utc>) -> Result<(), SiweError> {
        if let Some(expiration) = self.expiration_time {
            if now >= expiration {
                return Err(SiweError::Expired(expiration));
            }
        }
        if let Some(not_before) = self.not_before {
            if now < not_before {
                return Err(SiweError::NotYetValid(not_before));
            }
        }
        Ok(())
    }

    fn parse_header(line: &str) -> Result<(Option<String>, String), SiweError> {
        let authority = line.strip_suffix(HEADER_SUFFIX).ok_or(SiweError::Header)?;
        let (scheme, domain) = match authority.split_once("://") {
            Some((scheme, domain)) => (Some(scheme.to_string()), domain),
            None => (None, authority),
        };
        if domain.is_empty() || domain.contains(char::is_whitespace) {
            return Err(SiweError::Header);
        }
        Ok((scheme, domain.to_string()))
    }
}

fn parse_time(field: &'static str, value: &str) -> Result<DateTime<Utc>, SiweError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| SiweError::InvalidField {
            field,
            reason: e.to_string(),
        })
}

impl FromStr for SiweMessage {
    type Err = SiweError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lines = input.lines().peekable();

        let (scheme, domain) = Self::parse_header(lines.next().ok_or(SiweError::Header)?)?;

        let address_line = lines.next().ok_or(SiweError::Address(String::new()))?;
        let address = eth::parse_checksummed_address(address_line)
            .map_err(|e| SiweError::Address(e.to_string()))?;

        match lines.next() {
            Some("") => {}
            Some(other) => return Err(SiweError::UnexpectedLine(other.to_string())),
            None => return Err(SiweError::MissingField("URI")),
        }

        // Either "statement" + blank, or a single blank when the statement is omitted.
        let statement = match lines.peek().copied() {
            Some("") => {
                lines.next();
                None
            }
            Some(line) if line.starts_with("URI: ") => None,
            Some(line) => {
                let statement = line.to_string();
                lines.next();
                match lines.next() {
                    Some("") => Some(statement),
                    Some(other) => return Err(SiweError::UnexpectedLine(other.to_string())),
                    None => return Err(SiweError::MissingField("URI")),
                }
            }
            None => return Err(SiweError::MissingField("URI")),
        };

        // Fields follow in this exact order, each at most once.
        let uri = required_field(&mut lines, "URI")?.to_string();

        let version = required_field(&mut lines, "Version")?.to_string();
        if version != SUPPORTED_VERSION {
            return Err(SiweError::UnsupportedVersion(version));
        }

        let chain_id = parse_chain_id(required_field(&mut lines, "Chain ID")?)?;

        let nonce = required_field(&mut lines, "Nonce")?.to_string();
        if nonce.len() < NONCE_MIN_LENGTH || !nonce.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SiweError::InvalidField {
                field: "Nonce",
                reason: format!("expected at least {NONCE_MIN_LENGTH} alphanumeric characters"),
            });
        }

        let issued_at = parse_time("Issued At", required_field(&mut lines, "Issued At")?)?;
        let expiration_time = optional_field(&mut lines, "Expiration Time")
            .map(|v| parse_time("Expiration Time", v))
            .transpose()?;
        let not_before = optional_field(&mut lines, "Not Before")
            .map(|v| parse_time("Not Before", v))
            .transpose()?;
        let request_id = optional_field(&mut lines, "Request ID").map(str::to_string);

        let mut resources = Vec::new();
        if lines.next_if_eq(&"Resources:").is_some() {
            while let Some(resource) = lines.peek().copied().and_then(|l| l.strip_prefix("- ")) {
                resources.push(resource.to_string());
                lines.next();
            }
            if resources.is_empty() {
                return Err(SiweError::InvalidField {
                    field: "Resources",
                    reason: "expected at least one item".to_string(),
                });
            }
        }

        if let Some(line) = lines.next() {
            return Err(SiweError::UnexpectedLine(line.to_string()));
        }

        Ok(Self {
            scheme,
            domain,
            address,
            statement,
            uri,
            version,
            chain_id,
            nonce,
            issued_at,
            expiration_time,
            not_before,
            request_id,
            resources,
        })
    }
}

type Lines<'a> = Peekable<std::str::Lines<'a>>;

/// Consume the next line as `{key}: value`
fn required_field<'a>(lines: &mut Lines<'a>, key: &'static str) -> Result<&'a str, SiweError> {
    optional_field(lines, key).ok_or(SiweError::MissingField(key))
}

/// Consume the next line only when it is `{key}: value`
fn optional_field<'a>(lines: &mut Lines<'a>, key: &str) -> Option<&'a str> {
    let value = lines
        .peek()
        .copied()
        .and_then(|line| line.strip_prefix(key))
        .and_then(|rest| rest.strip_prefix(": "))?;
    lines.next();
    Some(value)
}

fn parse_chain_id(value: &str) -> Result<u64, SiweError> {
    let invalid = |reason: String| SiweError::InvalidField {
        field: "Chain ID",
        reason,
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("expected decimal digits, got {value:?}")));
    }
    value.parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))
}

impl fmt::Display for SiweMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = |t: &DateTime<Utc>| t.to_rfc3339_opts(SecondsFormat::Millis, true);

        match &self.scheme {
            Some(scheme) => writeln!(f, "{scheme}://{}{HEADER_SUFFIX}", self.domain)?,
            None => writeln!(f, "{}{HEADER_SUFFIX}", self.domain)?,
        }
        writeln!(f, "{}", eth::checksum(&self.address))?;
        writeln!(f)?;
        if let Some(statement) = &self.statement {
            writeln!(f, "{statement}")?;
        }
        writeln!(f)?;
        writeln!(f, "URI: {}", self.uri)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Chain ID: {}", self.chain_id)?;
        writeln!(f, "Nonce: {}", self.nonce)?;
        write!(f, "Issued At: {}", time(&self.issued_at))?;
        if let Some(expiration) = &self.expiration_time {
            write!(f, "\nExpiration Time: {}", time(expiration))?;
        }
        if let Some(not_before) = &self.not_before {
            write!(f, "\nNot Before: {}", time(not_before))?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, "\nRequest ID: {request_id}")?;
        }
        if !self.resources.is_empty() {
            write!(f, "\nResources:")?;
            for resource in &self.resources {
                write!(f, "\n- {resource}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const ADDRESS: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    fn sample() -> String {
        format!(
            "example.com wants you to sign in with your Ethereum account:\n\
             {ADDRESS}\n\
             \n\
             Sign in to access your account.\n\
             \n\
             URI: https://example.com\n\
             Version: 1\n\
             Chain ID: 1\n\
             Nonce: aBcDeF12345\n\
             Issued At: 2026-01-01T00:00:00Z\n\
             Expiration Time: 2026-01-01T01:00:00Z"
        )
    }

    #[test]
    fn test_parse_full_message() {
        let msg: SiweMessage = sample().parse().unwrap();
        assert_eq!(msg.scheme, None);
        assert_eq!(msg.domain, "example.com");
        assert_eq!(eth::checksum(&msg.address), ADDRESS);
        assert_eq!(msg.statement.as_deref(), Some("Sign in to access your account."));
        assert_eq!(msg.uri, "https://example.com");
        assert_eq!(msg.chain_id, 1);
        assert_eq!(msg.nonce, "aBcDeF12345");
        assert_eq!(
            msg.issued_at,
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            msg.expiration_time,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 1, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_without_statement_and_with_resources() {
        let text = format!(
            "https://example.com wants you to sign in with your Ethereum account:\n\
             {ADDRESS}\n\
             \n\
             \n\
             URI: https://example.com/login\n\
             Version: 1\n\
             Chain ID: 137\n\
             Nonce: 0123456789\n\
             Issued At: 2026-01-01T00:00:00.000Z\n\
             Request ID: req-1\n\
             Resources:\n\
             - ipfs://bafybeiemxf5abjwjbikoz4mc3a3dla6ual3jsgpdr4cjr3oz3evfyavhwq\n\
             - https://example.com/terms"
        );
        let msg: SiweMessage = text.parse().unwrap();
        assert_eq!(msg.scheme.as_deref(), Some("https"));
        assert_eq!(msg.statement, None);
        assert_eq!(msg.chain_id, 137);
        assert_eq!(msg.request_id.as_deref(), Some("req-1"));
        assert_eq!(msg.resources.len(), 2);
    }

    #[test]
    fn test_display_parses_back() {
        let msg: SiweMessage = sample().parse().unwrap();
        let again: SiweMessage = msg.to_string().parse().unwrap();
        assert_eq!(msg, again);
    }

    #[test]
    fn test_rejects_malformed_messages() {
        assert_eq!("mockMessage".parse::<SiweMessage>().unwrap_err(), SiweError::Header);

        let lowercase = sample().replace(ADDRESS, &ADDRESS.to_lowercase());
        assert!(matches!(
            lowercase.parse::<SiweMessage>(),
            Err(SiweError::Address(_))
        ));

        let v2 = sample().replace("Version: 1", "Version: 2");
        assert_eq!(
            v2.parse::<SiweMessage>().unwrap_err(),
            SiweError::UnsupportedVersion("2".to_string())
        );

        let short_nonce = sample().replace("aBcDeF12345", "abc");
        assert!(matches!(
            short_nonce.parse::<SiweMessage>(),
            Err(SiweError::InvalidField { field: "Nonce", .. })
        ));

        let no_uri = sample().replace("URI: https://example.com\n", "");
        assert_eq!(
            no_uri.parse::<SiweMessage>().unwrap_err(),
            SiweError::MissingField("URI")
        );

        let extra = format!("{}\nFoo: bar", sample());
        assert!(matches!(
            extra.parse::<SiweMessage>(),
            Err(SiweError::UnexpectedLine(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_expiration() {
        // Wallets render the first value; a second one must not override it
        let text = sample().replace(
            "Expiration Time: 2026-01-01T01:00:00Z",
            "Expiration Time: 2020-01-01T00:00:00Z\nExpiration Time: 2099-01-01T00:00:00Z",
        );
        assert_eq!(
            text.parse::<SiweMessage>().unwrap_err(),
            SiweError::UnexpectedLine("Expiration Time: 2099-01-01T00:00:00Z".to_string())
        );
    }

    #[test]
    fn test_rejects_reordered_fields() {
        let swapped = sample().replace(
            "Version: 1\nChain ID: 1",
            "Chain ID: 1\nVersion: 1",
        );
        assert_eq!(
            swapped.parse::<SiweMessage>().unwrap_err(),
            SiweError::MissingField("Version")
        );

        let nonce_first = format!(
            "example.com wants you to sign in with your Ethereum account:\n\
             {ADDRESS}\n\
             \n\
             \n\
             Nonce: aBcDeF12345\n\
             URI: https://example.com\n\
             Version: 1\n\
             Chain ID: 1\n\
             Issued At: 2026-01-01T00:00:00Z"
        );
        assert_eq!(
            nonce_first.parse::<SiweMessage>().unwrap_err(),
            SiweError::MissingField("URI")
        );
    }

    #[test]
    fn test_rejects_stray_blank_lines() {
        let blank = sample().replace("Chain ID: 1\n", "Chain ID: 1\n\n");
        assert_eq!(
            blank.parse::<SiweMessage>().unwrap_err(),
            SiweError::MissingField("Nonce")
        );

        let trailing = format!("{}\n\nRequest ID: x", sample());
        assert_eq!(
            trailing.parse::<SiweMessage>().unwrap_err(),
            SiweError::UnexpectedLine(String::new())
        );
    }

    #[test]
    fn test_chain_id_digits_only() {
        for bad in ["+1", "-1", " 1", "0x1", ""] {
            let text = sample().replace("Chain ID: 1\n", &format!("Chain ID: {bad}\n"));
            assert!(
                matches!(
                    text.parse::<SiweMessage>(),
                    Err(SiweError::InvalidField { field: "Chain ID", .. })
                ),
                "accepted chain id {bad:?}"
            );
        }
    }

    #[test]
    fn test_resources_need_an_item() {
        let empty = format!("{}\nResources:", sample());
        assert!(matches!(
            empty.parse::<SiweMessage>(),
            Err(SiweError::InvalidField { field: "Resources", .. })
        ));

        let listed = format!("{}\nResources:\n- https://example.com/terms", sample());
        let msg: SiweMessage = listed.parse().unwrap();
        assert_eq!(msg.resources, ["https://example.com/terms"]);
    }

    #[test]
    fn test_validate_time_window() {
        let mut msg: SiweMessage = sample().parse().unwrap();
        let issued = msg.issued_at;

        assert!(msg.validate_time(issued + Duration::minutes(30)).is_ok());
        assert!(matches!(
            msg.validate_time(issued + Duration::hours(2)),
            Err(SiweError::Expired(_))
        ));

        msg.not_before = Some(issued + Duration::minutes(10));
        assert!(matches!(
            msg.validate_time(issued),
            Err(SiweError::NotYetValid(_))
        ));
    }
}
