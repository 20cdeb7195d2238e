//! Client configuration
//!
//! The subset of a registered client's configuration that claims assembly
//! reads. Records are validated upstream and passed in by reference.

use crate::claim::Claim;
use serde::{Deserialize, Serialize};

/// Prefix applied to client claim types when `prefix_client_claims` is set,
/// keeping them from colliding with subject claims of the same name.
pub const CLIENT_CLAIM_PREFIX: &str = "client_";

/// A registered client as seen by the token pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier
    pub client_id: String,

    /// Static claims configured on the client
    pub claims: Vec<Claim>,

    /// Send the static claims even when a subject is present.
    /// When false, client claims only appear in machine-to-machine
    /// tokens (no subject), so they cannot leak into user-facing tokens.
    pub always_send_client_claims: bool,

    /// Prefix each static claim's type with [`CLIENT_CLAIM_PREFIX`]
    pub prefix_client_claims: bool,
}

impl Client {
    /// Create a client with no static claims
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            claims: Vec::new(),
            always_send_client_claims: false,
            prefix_client_claims: false,
        }
    }

    /// Add a static claim
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claims.push(claim);
        self
    }

    /// Send static claims even for user-present tokens
    pub fn with_always_send_client_claims(mut self) -> Self {
        self.always_send_client_claims = true;
        self
    }

    /// Prefix static claim types on emission
    pub fn with_prefixed_client_claims(mut self) -> Self {
        self.prefix_client_claims = true;
        self
    }
}
