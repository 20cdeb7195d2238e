//! Veridian Core
//!
//! Core domain types for the Veridian identity provider.
//! This crate defines the data model shared by the token-issuance
//! pipeline: claims, the authenticated subject, client configuration,
//! and the requested resource set.

pub mod claim;
pub mod claim_types;
pub mod client;
pub mod resource;
pub mod subject;

pub use claim::{Claim, ClaimValueKind};
pub use client::Client;
pub use resource::{ApiResource, IdentityResource, Resources, Scope, UserClaim};
pub use subject::Subject;
