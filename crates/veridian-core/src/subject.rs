//! The authenticated principal
//!
//! A `Subject` is produced by the authentication layer and passed by
//! reference into claims assembly. It is immutable for the duration of a
//! single token-issuance request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated principal as seen by the token pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier for the subject
    pub subject_id: String,

    /// When the subject authenticated
    pub auth_time: DateTime<Utc>,

    /// Identity provider that performed the authentication
    pub identity_provider: String,

    /// Authentication method references, in authentication order
    pub authentication_methods: Vec<String>,

    /// Authentication context class reference, if the authentication
    /// layer asserted one
    pub authentication_context_class: Option<String>,
}

impl Subject {
    /// Create a subject authenticated now by the given provider
    pub fn new(subject_id: impl Into<String>, identity_provider: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            auth_time: Utc::now(),
            identity_provider: identity_provider.into(),
            authentication_methods: Vec::new(),
            authentication_context_class: None,
        }
    }

    /// Set the authentication time
    pub fn with_auth_time(mut self, auth_time: DateTime<Utc>) -> Self {
        self.auth_time = auth_time;
        self
    }

    /// Add an authentication method reference
    pub fn with_authentication_method(mut self, method: impl Into<String>) -> Self {
        self.authentication_methods.push(method.into());
        self
    }

    /// Set the authentication context class reference
    pub fn with_context_class(mut self, acr: impl Into<String>) -> Self {
        self.authentication_context_class = Some(acr.into());
        self
    }

    /// Authentication time as epoch seconds
    pub fn auth_time_epoch(&self) -> i64 {
        self.auth_time.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder_accumulates_methods() {
        let subject = Subject::new("alice", "local")
            .with_authentication_method("pwd")
            .with_authentication_method("otp");

        assert_eq!(subject.authentication_methods, vec!["pwd", "otp"]);
        assert!(subject.authentication_context_class.is_none());
    }

    #[test]
    fn test_auth_time_epoch() {
        let instant = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let subject = Subject::new("alice", "local").with_auth_time(instant);

        assert_eq!(subject.auth_time_epoch(), 1_700_000_000);
    }
}
