//! The requested resource model
//!
//! Identity resources bundle subject claims a client can request as a
//! scope; API resources describe protected APIs with their own scopes and
//! user-claim requirements. A `Resources` value is the already-validated
//! result of resolving a request's scope parameter, produced by the
//! resource store and consumed by claims assembly.

use serde::{Deserialize, Serialize};

/// Scope name granting a refresh token
pub const OFFLINE_ACCESS: &str = "offline_access";

/// The mandatory OpenID Connect scope name
pub const OPENID: &str = "openid";

/// A subject claim type bundled by an identity resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaim {
    /// The claim type this resource exposes
    pub claim_type: String,

    /// Emit this claim in identity tokens even when the client is
    /// expected to fetch profile data from the userinfo endpoint
    pub always_include_in_id_token: bool,
}

impl UserClaim {
    /// A userinfo-only user claim
    pub fn new(claim_type: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            always_include_in_id_token: false,
        }
    }

    /// A user claim always embedded in identity tokens
    pub fn always_in_id_token(claim_type: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            always_include_in_id_token: true,
        }
    }
}

/// A named bundle of subject claims requestable as a scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResource {
    /// Scope name clients request
    pub name: String,

    /// Subject claim types this resource exposes
    pub user_claims: Vec<UserClaim>,
}

impl IdentityResource {
    pub fn new(name: impl Into<String>, user_claims: Vec<UserClaim>) -> Self {
        Self {
            name: name.into(),
            user_claims,
        }
    }
}

/// A scope belonging to an API resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Scope name clients request
    pub name: String,

    /// Subject claim types required by this scope
    pub user_claims: Vec<String>,
}

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_claims: Vec::new(),
        }
    }

    /// Require a subject claim type for this scope
    pub fn with_user_claim(mut self, claim_type: impl Into<String>) -> Self {
        self.user_claims.push(claim_type.into());
        self
    }
}

/// A protected API with its scopes and claim requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Resource name
    pub name: String,

    /// Subject claim types required by every scope of this API
    pub user_claims: Vec<String>,

    /// Scopes this API exposes
    pub scopes: Vec<Scope>,
}

impl ApiResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_claims: Vec::new(),
            scopes: Vec::new(),
        }
    }

    /// Require a subject claim type for the whole API
    pub fn with_user_claim(mut self, claim_type: impl Into<String>) -> Self {
        self.user_claims.push(claim_type.into());
        self
    }

    /// Add a scope
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }
}

/// The resolved, requested resource set for one token-issuance request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Requested identity resources, in request order
    pub identity: Vec<IdentityResource>,

    /// Requested API resources, in request order
    pub apis: Vec<ApiResource>,

    /// Whether `offline_access` was requested and granted
    pub offline_access: bool,
}

impl Resources {
    pub fn new(identity: Vec<IdentityResource>, apis: Vec<ApiResource>) -> Self {
        Self {
            identity,
            apis,
            offline_access: false,
        }
    }

    /// Mark `offline_access` as requested
    pub fn with_offline_access(mut self) -> Self {
        self.offline_access = true;
        self
    }

    /// Whether any resource was requested at all
    pub fn is_empty(&self) -> bool {
        self.identity.is_empty() && self.apis.is_empty() && !self.offline_access
    }
}

/// The standard OpenID Connect identity resources with their standard
/// claim bundles (OpenID Connect Core 1.0, section 5.4).
pub mod standard {
    use super::{IdentityResource, UserClaim, OPENID};
    use crate::claim_types;

    /// `openid` - the subject identifier; always embedded in identity tokens
    pub fn openid() -> IdentityResource {
        IdentityResource::new(OPENID, vec![UserClaim::always_in_id_token(claim_types::SUBJECT)])
    }

    /// `profile` - default profile claims
    pub fn profile() -> IdentityResource {
        IdentityResource::new(
            "profile",
            [
                claim_types::NAME,
                claim_types::FAMILY_NAME,
                claim_types::GIVEN_NAME,
                claim_types::MIDDLE_NAME,
                claim_types::NICKNAME,
                claim_types::PREFERRED_USERNAME,
                claim_types::PROFILE,
                claim_types::PICTURE,
                claim_types::WEBSITE,
                claim_types::GENDER,
                claim_types::BIRTHDATE,
                claim_types::ZONEINFO,
                claim_types::LOCALE,
                claim_types::UPDATED_AT,
            ]
            .into_iter()
            .map(UserClaim::new)
            .collect(),
        )
    }

    /// `email` - email address and verification status
    pub fn email() -> IdentityResource {
        IdentityResource::new(
            "email",
            vec![
                UserClaim::new(claim_types::EMAIL),
                UserClaim::new(claim_types::EMAIL_VERIFIED),
            ],
        )
    }

    /// `address` - postal address
    pub fn address() -> IdentityResource {
        IdentityResource::new("address", vec![UserClaim::new(claim_types::ADDRESS)])
    }

    /// `phone` - phone number and verification status
    pub fn phone() -> IdentityResource {
        IdentityResource::new(
            "phone",
            vec![
                UserClaim::new(claim_types::PHONE_NUMBER),
                UserClaim::new(claim_types::PHONE_NUMBER_VERIFIED),
            ],
        )
    }
}
