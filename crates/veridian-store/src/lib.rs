//! Veridian Resource Store
//!
//! Read-only lookup contract for identity and API resource configuration,
//! plus an in-memory implementation for tests and small deployments.
//! Endpoint logic resolves a request's scope names through this store into
//! the `Resources` value that claims assembly consumes.

use thiserror::Error;
use veridian_core::resource::OFFLINE_ACCESS;
use veridian_core::{ApiResource, IdentityResource, Resources};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Resource store backend failure: {0}")]
    Backend(String),
}

/// Read-only resource configuration lookups. All methods are
/// side-effect-free; implementations must be shareable across concurrent
/// requests.
#[async_trait::async_trait]
pub trait ResourceStore: Send + Sync {
    /// Identity resources whose name is in `scope_names`
    async fn find_identity_resources_by_scope(
        &self,
        scope_names: &[String],
    ) -> Result<Vec<IdentityResource>, StoreError>;

    /// API resources exposing at least one scope named in `scope_names`
    async fn find_api_resources_by_scope(
        &self,
        scope_names: &[String],
    ) -> Result<Vec<ApiResource>, StoreError>;

    /// A single API resource by its resource name
    async fn find_api_resource(&self, name: &str) -> Result<Option<ApiResource>, StoreError>;

    /// Every configured resource
    async fn all_resources(&self) -> Result<Resources, StoreError>;
}

/// Resolve a request's scope names into the `Resources` set consumed by
/// claims assembly. `offline_access` is not a stored resource; it is
/// recognized here and surfaced as a flag.
pub async fn find_requested_resources(
    store: &dyn ResourceStore,
    scope_names: &[String],
) -> Result<Resources, StoreError> {
    let identity = store.find_identity_resources_by_scope(scope_names).await?;
    let apis = store.find_api_resources_by_scope(scope_names).await?;

    let mut resources = Resources::new(identity, apis);
    if scope_names.iter().any(|name| name == OFFLINE_ACCESS) {
        resources = resources.with_offline_access();
    }

    Ok(resources)
}

/// In-memory resource store backed by configuration loaded at startup.
/// Immutable after construction, so reads need no locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceStore {
    identity: Vec<IdentityResource>,
    apis: Vec<ApiResource>,
}

impl InMemoryResourceStore {
    pub fn new(identity: Vec<IdentityResource>, apis: Vec<ApiResource>) -> Self {
        Self { identity, apis }
    }
}

#[async_trait::async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn find_identity_resources_by_scope(
        &self,
        scope_names: &[String],
    ) -> Result<Vec<IdentityResource>, StoreError> {
        Ok(self
            .identity
            .iter()
            .filter(|resource| scope_names.iter().any(|name| *name == resource.name))
            .cloned()
            .collect())
    }

    async fn find_api_resources_by_scope(
        &self,
        scope_names: &[String],
    ) -> Result<Vec<ApiResource>, StoreError> {
        Ok(self
            .apis
            .iter()
            .filter(|api| {
                api.scopes
                    .iter()
                    .any(|scope| scope_names.iter().any(|name| *name == scope.name))
            })
            .cloned()
            .collect())
    }

    async fn find_api_resource(&self, name: &str) -> Result<Option<ApiResource>, StoreError> {
        Ok(self.apis.iter().find(|api| api.name == name).cloned())
    }

    async fn all_resources(&self) -> Result<Resources, StoreError> {
        Ok(Resources::new(self.identity.clone(), self.apis.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridian_core::resource::standard;
    use veridian_core::Scope;

    fn test_store() -> InMemoryResourceStore {
        InMemoryResourceStore::new(
            vec![standard::openid(), standard::profile(), standard::email()],
            vec![
                ApiResource::new("inventory")
                    .with_scope(Scope::new("inventory.read"))
                    .with_scope(Scope::new("inventory.write")),
                ApiResource::new("billing").with_scope(Scope::new("billing.read")),
            ],
        )
    }

    fn names(scopes: &[&str]) -> Vec<String> {
        scopes.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_find_identity_resources_by_scope() {
        let store = test_store();
        let found = store
            .find_identity_resources_by_scope(&names(&["openid", "email", "unknown"]))
            .await
            .unwrap();

        let found_names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(found_names, vec!["openid", "email"]);
    }

    #[tokio::test]
    async fn test_find_api_resources_by_scope() {
        let store = test_store();
        let found = store
            .find_api_resources_by_scope(&names(&["inventory.write"]))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "inventory");
    }

    #[tokio::test]
    async fn test_find_api_resource_by_name() {
        let store = test_store();

        assert!(store.find_api_resource("billing").await.unwrap().is_some());
        assert!(store.find_api_resource("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_resources() {
        let store = test_store();
        let all = store.all_resources().await.unwrap();

        assert_eq!(all.identity.len(), 3);
        assert_eq!(all.apis.len(), 2);
        assert!(!all.offline_access);
    }

    #[tokio::test]
    async fn test_find_requested_resources_sets_offline_access() {
        let store = test_store();
        let resources = find_requested_resources(
            &store,
            &names(&["openid", "inventory.read", "offline_access"]),
        )
        .await
        .unwrap();

        assert_eq!(resources.identity.len(), 1);
        assert_eq!(resources.apis.len(), 1);
        assert!(resources.offline_access);
    }

    #[tokio::test]
    async fn test_find_requested_resources_ignores_unknown_scopes() {
        let store = test_store();
        let resources = find_requested_resources(&store, &names(&["unknown"]))
            .await
            .unwrap();

        assert!(resources.is_empty());
    }
}
