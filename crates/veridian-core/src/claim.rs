//! The claim triple emitted into tokens
//!
//! A claim is a single asserted fact about a subject or client. Tokens
//! carry ordered lists of claims; ordering is contractual, so claims are
//! always collected into `Vec<Claim>`, never sets.

use serde::{Deserialize, Serialize};

/// How a claim value should be rendered when the token is serialized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimValueKind {
    /// Plain string value
    #[default]
    String,

    /// Integer value (e.g. epoch seconds)
    Integer,

    /// Boolean value
    Boolean,

    /// Structured JSON value (e.g. the `address` claim)
    Json,
}

/// A single (type, value, value-kind) claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The claim type (e.g. "sub", "email")
    pub claim_type: String,

    /// The claim value, stored as a string regardless of kind
    pub value: String,

    /// How the value should be rendered downstream
    #[serde(default)]
    pub value_kind: ClaimValueKind,
}

impl Claim {
    /// Create a string-valued claim
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_kind: ClaimValueKind::String,
        }
    }

    /// Create a claim with an explicit value kind
    pub fn with_kind(
        claim_type: impl Into<String>,
        value: impl Into<String>,
        value_kind: ClaimValueKind,
    ) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_kind,
        }
    }

    /// Create an integer-valued claim
    pub fn integer(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_kind(claim_type, value, ClaimValueKind::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_defaults_to_string() {
        let claim = Claim::new("email", "alice@example.com");
        assert_eq!(claim.value_kind, ClaimValueKind::String);
    }

    #[test]
    fn test_integer_claim() {
        let claim = Claim::integer("auth_time", "1700000000");
        assert_eq!(claim.value_kind, ClaimValueKind::Integer);
        assert_eq!(claim.value, "1700000000");
    }

    #[test]
    fn test_claim_serialization() {
        let claim = Claim::new("name", "Alice");
        let json = serde_json::to_string(&claim).unwrap();
        let round_trip: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(round_trip, claim);
    }
}
