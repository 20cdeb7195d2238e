//! The profile resolver contract
//!
//! Profile data lives outside the token pipeline (user database, external
//! directory). The assembler hands the resolver the set of claim types it
//! needs and trusts the answer, except for the protocol-claim filter
//! applied afterwards. The resolver may apply its own policy per caller
//! context and is free to return fewer claims than requested.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use veridian_core::{Claim, Client, Subject};

/// Why profile claims are being requested, so the resolver can apply
/// context-appropriate policy (e.g. richer claims at the userinfo
/// endpoint than embedded in a token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerContext {
    /// Claims destined for an identity token
    IdentityToken,

    /// Claims destined for an access token
    AccessToken,

    /// Claims served from the userinfo endpoint
    UserInfoEndpoint,
}

impl CallerContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallerContext::IdentityToken => "identity_token",
            CallerContext::AccessToken => "access_token",
            CallerContext::UserInfoEndpoint => "userinfo_endpoint",
        }
    }
}

/// A single profile-resolution request
#[derive(Debug, Clone, Copy)]
pub struct ProfileClaimsRequest<'a> {
    /// The authenticated subject, when one is present
    pub subject: Option<&'a Subject>,

    /// The client the token is being issued to
    pub client: &'a Client,

    /// Why the claims are being requested
    pub caller: CallerContext,

    /// Claim types to resolve. May contain duplicates; resolvers must
    /// tolerate them.
    pub requested_claim_types: &'a [String],
}

/// Errors raised by a profile resolver backend
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile backend failure: {0}")]
    Backend(String),

    #[error("Subject is deactivated: {0}")]
    SubjectDeactivated(String),
}

/// External collaborator mapping requested claim types to claim values
/// for a subject. Implementations must be shareable across concurrent
/// token-issuance requests.
#[async_trait::async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Resolve claim values for the requested types. Returning fewer
    /// claims than requested is not an error; the corresponding claims
    /// are simply omitted from the token.
    async fn resolve_profile_claims(
        &self,
        request: ProfileClaimsRequest<'_>,
    ) -> Result<Vec<Claim>, ProfileError>;
}

/// Resolver for deployments without a profile backend: every request
/// resolves to no claims.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProfileResolver;

#[async_trait::async_trait]
impl ProfileResolver for EmptyProfileResolver {
    async fn resolve_profile_claims(
        &self,
        _request: ProfileClaimsRequest<'_>,
    ) -> Result<Vec<Claim>, ProfileError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_context_as_str() {
        assert_eq!(CallerContext::IdentityToken.as_str(), "identity_token");
        assert_eq!(CallerContext::AccessToken.as_str(), "access_token");
        assert_eq!(CallerContext::UserInfoEndpoint.as_str(), "userinfo_endpoint");
    }

    #[tokio::test]
    async fn test_empty_resolver_returns_no_claims() {
        let client = Client::new("app");
        let requested = vec!["email".to_string()];
        let request = ProfileClaimsRequest {
            subject: None,
            client: &client,
            caller: CallerContext::UserInfoEndpoint,
            requested_claim_types: &requested,
        };

        let issued = EmptyProfileResolver
            .resolve_profile_claims(request)
            .await
            .unwrap();
        assert!(issued.is_empty());
    }
}
