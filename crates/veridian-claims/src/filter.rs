//! The protocol claim filter
//!
//! Every claim type the token pipeline itself asserts is reserved: a
//! profile backend must never be able to override `sub`, inject a
//! `nonce`, or smuggle session identifiers into a token body. This
//! filter is the last line of defense on the resolver path.

use std::collections::HashSet;
use std::sync::LazyLock;
use veridian_core::{claim_types, Claim};

/// Claim types owned by the token/transport layer. Resolver output
/// carrying any of these is dropped.
static PROTOCOL_CLAIM_TYPES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        claim_types::SUBJECT,
        claim_types::AUTH_TIME,
        claim_types::IDENTITY_PROVIDER,
        claim_types::AUTHENTICATION_METHOD,
        claim_types::CLIENT_ID,
        claim_types::SCOPE,
        claim_types::ISSUER,
        claim_types::AUDIENCE,
        claim_types::AUTHORIZED_PARTY,
        claim_types::EXPIRATION,
        claim_types::NOT_BEFORE,
        claim_types::ISSUED_AT,
        claim_types::JWT_ID,
        claim_types::NONCE,
        claim_types::ACCESS_TOKEN_HASH,
        claim_types::AUTHORIZATION_CODE_HASH,
        claim_types::STATE_HASH,
        claim_types::SESSION_ID,
        claim_types::REFERENCE_TOKEN_ID,
    ])
});

/// Whether a claim type is reserved for protocol use
pub fn is_protocol_claim(claim_type: &str) -> bool {
    PROTOCOL_CLAIM_TYPES.contains(claim_type)
}

/// Remove protocol-reserved claims, preserving the order of survivors
pub fn filter_protocol_claims(claims: Vec<Claim>) -> Vec<Claim> {
    claims
        .into_iter()
        .filter(|claim| {
            if is_protocol_claim(&claim.claim_type) {
                tracing::warn!(
                    claim_type = %claim.claim_type,
                    "Dropping protocol-reserved claim from profile resolution"
                );
                false
            } else {
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_types_are_dropped() {
        let claims = vec![
            Claim::new("email", "alice@example.com"),
            Claim::new(claim_types::NONCE, "n-0S6_WzA2Mj"),
            Claim::new(claim_types::SESSION_ID, "sess-1"),
            Claim::new("name", "Alice"),
        ];

        let filtered = filter_protocol_claims(claims);
        let types: Vec<&str> = filtered.iter().map(|c| c.claim_type.as_str()).collect();
        assert_eq!(types, vec!["email", "name"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let claims = vec![
            Claim::new("c", "3"),
            Claim::new("a", "1"),
            Claim::new("b", "2"),
        ];

        let filtered = filter_protocol_claims(claims.clone());
        assert_eq!(filtered, claims);
    }

    #[test]
    fn test_subject_claim_cannot_be_overridden() {
        assert!(is_protocol_claim(claim_types::SUBJECT));
        assert!(is_protocol_claim(claim_types::ACCESS_TOKEN_HASH));
        assert!(is_protocol_claim(claim_types::AUTHORIZATION_CODE_HASH));
        assert!(!is_protocol_claim(claim_types::EMAIL));
    }
}
