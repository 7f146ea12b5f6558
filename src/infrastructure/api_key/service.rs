//! API key authentication service
//!
//! Resolves bearer credentials against the configured key ring and counts
//! every successful authentication in the usage store.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::api_key::{ApiKeyIdentity, ApiKeyRing, KeyTier};
use crate::domain::usage::{UsageKey, UsageRecord, UsageStore};
use crate::domain::DomainError;

/// Authentication failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The credential matches none of the configured keys
    #[error("Invalid API key")]
    InvalidKey,

    /// The credential is not the admin key
    #[error("Admin access required")]
    AdminRequired,
}

/// Service that authenticates API keys and tracks their usage
#[derive(Debug)]
pub struct ApiKeyService<U>
where
    U: UsageStore + ?Sized,
{
    keys: ApiKeyRing,
    usage: Arc<U>,
}

impl<U: UsageStore + ?Sized> ApiKeyService<U> {
    /// Create a new service over a key ring and a usage store
    pub fn new(keys: ApiKeyRing, usage: Arc<U>) -> Self {
        Self { keys, usage }
    }

    /// Verify a credential for general access.
    ///
    /// On success the use is counted against `(client_address, tier)`.
    /// Failed attempts are never counted.
    pub async fn verify_api_key(
        &self,
        credential: &str,
        client_address: &str,
    ) -> Result<ApiKeyIdentity, AuthError> {
        let Some(tier) = self.keys.resolve(credential) else {
            warn!(
                client = %client_address,
                key_prefix = %key_prefix(credential),
                "Rejected invalid API key"
            );
            return Err(AuthError::InvalidKey);
        };

        let key = UsageKey::new(client_address, tier);

        match self.usage.record(key, Utc::now()).await {
            Ok(record) => debug!(
                client = %client_address,
                tier = %tier,
                count = record.count,
                "API key authenticated"
            ),
            Err(e) => warn!("Failed to record API key usage: {}", e),
        }

        Ok(ApiKeyIdentity::new(tier, client_address))
    }

    /// Verify that a credential is exactly the admin key. Usage is not counted.
    pub fn verify_admin_key(&self, credential: &str) -> Result<(), AuthError> {
        if self.keys.is_admin(credential) {
            debug!(tier = %KeyTier::Admin, "Admin key verified");
            Ok(())
        } else {
            warn!(key_prefix = %key_prefix(credential), "Rejected non-admin key on admin route");
            Err(AuthError::AdminRequired)
        }
    }

    /// All usage records seen since the process started
    pub async fn usage_snapshot(&self) -> Result<Vec<(UsageKey, UsageRecord)>, DomainError> {
        self.usage.snapshot().await
    }
}

/// First characters of a credential, safe to log
fn key_prefix(credential: &str) -> String {
    credential.chars().take(4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::usage::InMemoryUsageStore;

    fn create_service() -> ApiKeyService<InMemoryUsageStore> {
        let keys = ApiKeyRing::new("demo-key", "ci-key", "admin-key").unwrap();
        ApiKeyService::new(keys, Arc::new(InMemoryUsageStore::new()))
    }

    #[tokio::test]
    async fn test_verify_api_key_resolves_tier() {
        let service = create_service();

        let identity = service.verify_api_key("ci-key", "10.1.1.1").await.unwrap();
        assert_eq!(identity.tier, KeyTier::CiCd);
        assert_eq!(identity.client_address, "10.1.1.1");

        let identity = service.verify_api_key("admin-key", "10.1.1.1").await.unwrap();
        assert_eq!(identity.tier, KeyTier::Admin);
    }

    #[tokio::test]
    async fn test_verify_api_key_counts_every_success() {
        let service = create_service();

        for _ in 0..3 {
            service.verify_api_key("demo-key", "10.1.1.1").await.unwrap();
        }

        let snapshot = service.usage_snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].0, UsageKey::new("10.1.1.1", KeyTier::Demo));
        assert_eq!(snapshot[0].1.count, 3);
    }

    #[tokio::test]
    async fn test_invalid_key_is_not_counted() {
        let service = create_service();

        let result = service.verify_api_key("invalid-key", "10.1.1.1").await;
        assert_eq!(result, Err(AuthError::InvalidKey));
        assert!(service.usage_snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_verify_admin_key() {
        let service = create_service();

        assert!(service.verify_admin_key("admin-key").is_ok());
        assert_eq!(
            service.verify_admin_key("demo-key"),
            Err(AuthError::AdminRequired)
        );
        assert_eq!(
            service.verify_admin_key("nonsense"),
            Err(AuthError::AdminRequired)
        );
    }

    #[tokio::test]
    async fn test_verify_admin_key_does_not_touch_usage() {
        let service = create_service();
        service.verify_admin_key("admin-key").unwrap();

        assert!(service.usage_snapshot().await.unwrap().is_empty());
    }

    #[test]
    fn test_key_prefix_truncates() {
        assert_eq!(key_prefix("admin-super-key"), "admi");
        assert_eq!(key_prefix("ab"), "ab");
    }
}
