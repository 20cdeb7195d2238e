//! The claims assembler
//!
//! Computes the final ordered claim list for identity and access tokens.
//! Static and derived claims are emitted directly; claim types that need
//! profile data are collected into a resolve-set, fetched through the
//! [`ProfileResolver`], and passed through the protocol-claim filter
//! before they are appended.

use crate::error::ClaimsError;
use crate::filter::filter_protocol_claims;
use crate::profile::{CallerContext, ProfileClaimsRequest, ProfileResolver};
use veridian_core::client::CLIENT_CLAIM_PREFIX;
use veridian_core::resource::OFFLINE_ACCESS;
use veridian_core::{claim_types, Claim, Client, Resources, Subject};

/// Mandatory claims asserting who authenticated, when, and how:
/// `sub`, `auth_time`, `idp`, then one `amr` claim per authentication
/// method in subject order.
pub fn standard_subject_claims(subject: &Subject) -> Vec<Claim> {
    let mut claims = vec![
        Claim::new(claim_types::SUBJECT, &subject.subject_id),
        Claim::integer(claim_types::AUTH_TIME, subject.auth_time_epoch().to_string()),
        Claim::new(claim_types::IDENTITY_PROVIDER, &subject.identity_provider),
    ];

    for method in &subject.authentication_methods {
        claims.push(Claim::new(claim_types::AUTHENTICATION_METHOD, method));
    }

    claims
}

/// The `acr` claim, when the authentication layer asserted one
pub fn optional_claims(subject: &Subject) -> Vec<Claim> {
    match &subject.authentication_context_class {
        Some(acr) => vec![Claim::new(claim_types::AUTHENTICATION_CONTEXT_CLASS, acr)],
        None => Vec::new(),
    }
}

/// Assembles the claim lists for identity and access tokens.
///
/// Stateless apart from the resolver it holds; one instance can serve
/// any number of concurrent token-issuance requests.
pub struct ClaimsAssembler<P> {
    profile: P,
}

impl<P: ProfileResolver> ClaimsAssembler<P> {
    pub fn new(profile: P) -> Self {
        Self { profile }
    }

    /// Claims for an identity token.
    ///
    /// Per-resource identity claims are userinfo-only by default;
    /// `include_all_identity_claims` is the caller's override for flows
    /// where no userinfo round trip will follow (implicit/hybrid).
    pub async fn identity_token_claims(
        &self,
        subject: &Subject,
        client: &Client,
        resources: &Resources,
        include_all_identity_claims: bool,
    ) -> Result<Vec<Claim>, ClaimsError> {
        tracing::debug!(
            client_id = %client.client_id,
            subject_id = %subject.subject_id,
            "Assembling identity token claims"
        );

        let mut claims = standard_subject_claims(subject);
        claims.extend(optional_claims(subject));

        let mut requested = Vec::new();
        for identity in &resources.identity {
            for user_claim in &identity.user_claims {
                if include_all_identity_claims || user_claim.always_include_in_id_token {
                    requested.push(user_claim.claim_type.clone());
                }
            }
        }

        if !requested.is_empty() {
            let issued = self
                .resolve(subject, client, CallerContext::IdentityToken, &requested)
                .await?;
            claims.extend(filter_protocol_claims(issued));
        }

        Ok(claims)
    }

    /// Claims for an access token.
    ///
    /// `subject` is absent for machine-to-machine grants. When a subject
    /// is present its identity claims are duplicated into the access
    /// token, keeping bearer tokens self-describing.
    pub async fn access_token_claims(
        &self,
        subject: Option<&Subject>,
        client: &Client,
        resources: &Resources,
    ) -> Result<Vec<Claim>, ClaimsError> {
        tracing::debug!(
            client_id = %client.client_id,
            "Assembling access token claims"
        );

        let mut claims = vec![Claim::new(claim_types::CLIENT_ID, &client.client_id)];

        // Client static claims stay out of user-present tokens unless the
        // client explicitly opted in.
        if !client.claims.is_empty() && (subject.is_none() || client.always_send_client_claims) {
            for claim in &client.claims {
                let claim_type = if client.prefix_client_claims {
                    format!("{}{}", CLIENT_CLAIM_PREFIX, claim.claim_type)
                } else {
                    claim.claim_type.clone()
                };
                claims.push(Claim::with_kind(claim_type, &claim.value, claim.value_kind));
            }
        }

        for identity in &resources.identity {
            claims.push(Claim::new(claim_types::SCOPE, &identity.name));
        }
        for api in &resources.apis {
            for scope in &api.scopes {
                claims.push(Claim::new(claim_types::SCOPE, &scope.name));
            }
        }

        if let Some(subject) = subject {
            if resources.offline_access {
                claims.push(Claim::new(claim_types::SCOPE, OFFLINE_ACCESS));
            }

            claims.extend(standard_subject_claims(subject));
            claims.extend(optional_claims(subject));

            let requested = access_token_resolve_set(resources);
            if !requested.is_empty() {
                let issued = self
                    .resolve(subject, client, CallerContext::AccessToken, &requested)
                    .await?;
                claims.extend(filter_protocol_claims(issued));
            }
        }

        Ok(claims)
    }

    async fn resolve(
        &self,
        subject: &Subject,
        client: &Client,
        caller: CallerContext,
        requested: &[String],
    ) -> Result<Vec<Claim>, ClaimsError> {
        tracing::debug!(
            caller = caller.as_str(),
            requested = ?requested,
            "Requesting profile claims"
        );

        let issued = self
            .profile
            .resolve_profile_claims(ProfileClaimsRequest {
                subject: Some(subject),
                client,
                caller,
                requested_claim_types: requested,
            })
            .await?;

        Ok(issued)
    }
}

/// Flatten API-resource and nested scope user-claim requirements into a
/// single resolve-set, deduplicated by first occurrence (case-sensitive).
fn access_token_resolve_set(resources: &Resources) -> Vec<String> {
    let mut requested: Vec<String> = Vec::new();
    let mut push = |claim_type: &String, requested: &mut Vec<String>| {
        if !requested.contains(claim_type) {
            requested.push(claim_type.clone());
        }
    };

    for api in &resources.apis {
        for claim_type in &api.user_claims {
            push(claim_type, &mut requested);
        }
        for scope in &api.scopes {
            for claim_type in &scope.user_claims {
                push(claim_type, &mut requested);
            }
        }
    }

    requested
}
