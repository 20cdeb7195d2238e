//! Veridian Claims
//!
//! Claims assembly for the Veridian identity provider: decides, for an
//! authenticated subject, client, and requested resource set, exactly
//! which claims go into an identity token versus an access token. Claim
//! values that live outside the token pipeline (profile data) are fetched
//! through the [`ProfileResolver`] contract and defensively filtered so
//! protocol-reserved claim types never leak into a token body.

pub mod assembler;
pub mod error;
pub mod filter;
pub mod profile;

pub use assembler::{optional_claims, standard_subject_claims, ClaimsAssembler};
pub use error::ClaimsError;
pub use filter::filter_protocol_claims;
pub use profile::{
    CallerContext, EmptyProfileResolver, ProfileClaimsRequest, ProfileError, ProfileResolver,
};
