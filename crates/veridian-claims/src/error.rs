//! Error types for claims assembly

use crate::profile::ProfileError;
use thiserror::Error;

/// Errors surfaced while assembling token claims.
///
/// A failed profile resolution fails the whole token-issuance request;
/// issuing a token with partial claims is never acceptable.
#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Profile resolution failed: {0}")]
    Profile(#[from] ProfileError),
}
