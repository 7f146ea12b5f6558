//! The fixed set of configured API keys

use std::fmt;

use thiserror::Error;

use super::KeyTier;

/// Errors raised when building a key ring
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyRingError {
    #[error("API key for tier '{0}' cannot be empty")]
    EmptyKey(KeyTier),
    #[error("API keys for tiers '{0}' and '{1}' must be different")]
    DuplicateKey(KeyTier, KeyTier),
}

/// One key per tier. Key values are compared exactly, case-sensitively.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyRing {
    demo: String,
    ci_cd: String,
    admin: String,
}

impl ApiKeyRing {
    pub fn new(
        demo: impl Into<String>,
        ci_cd: impl Into<String>,
        admin: impl Into<String>,
    ) -> Result<Self, KeyRingError> {
        let ring = Self {
            demo: demo.into(),
            ci_cd: ci_cd.into(),
            admin: admin.into(),
        };

        for (i, tier) in KeyTier::ALL.iter().enumerate() {
            if ring.key_for(*tier).is_empty() {
                return Err(KeyRingError::EmptyKey(*tier));
            }

            for other in &KeyTier::ALL[i + 1..] {
                if ring.key_for(*tier) == ring.key_for(*other) {
                    return Err(KeyRingError::DuplicateKey(*tier, *other));
                }
            }
        }

        Ok(ring)
    }

    pub fn key_for(&self, tier: KeyTier) -> &str {
        match tier {
            KeyTier::Demo => &self.demo,
            KeyTier::CiCd => &self.ci_cd,
            KeyTier::Admin => &self.admin,
        }
    }

    /// Resolve a credential to the first tier whose key matches it
    pub fn resolve(&self, credential: &str) -> Option<KeyTier> {
        KeyTier::ALL
            .into_iter()
            .find(|tier| self.key_for(*tier) == credential)
    }

    pub fn is_admin(&self, credential: &str) -> bool {
        self.admin == credential
    }
}

impl fmt::Debug for ApiKeyRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyRing")
            .field("demo", &"[REDACTED]")
            .field("ci_cd", &"[REDACTED]")
            .field("admin", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> ApiKeyRing {
        ApiKeyRing::new("demo-key", "ci-key", "admin-key").unwrap()
    }

    #[test]
    fn test_resolve_each_tier() {
        let ring = ring();
        assert_eq!(ring.resolve("demo-key"), Some(KeyTier::Demo));
        assert_eq!(ring.resolve("ci-key"), Some(KeyTier::CiCd));
        assert_eq!(ring.resolve("admin-key"), Some(KeyTier::Admin));
    }

    #[test]
    fn test_resolve_is_exact_and_case_sensitive() {
        let ring = ring();
        assert_eq!(ring.resolve("DEMO-KEY"), None);
        assert_eq!(ring.resolve("demo-key "), None);
        assert_eq!(ring.resolve(""), None);
    }

    #[test]
    fn test_is_admin() {
        let ring = ring();
        assert!(ring.is_admin("admin-key"));
        assert!(!ring.is_admin("demo-key"));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let result = ApiKeyRing::new("same", "ci-key", "same");
        assert_eq!(
            result,
            Err(KeyRingError::DuplicateKey(KeyTier::Demo, KeyTier::Admin))
        );
    }

    #[test]
    fn test_rejects_empty_key() {
        let result = ApiKeyRing::new("demo-key", "", "admin-key");
        assert_eq!(result, Err(KeyRingError::EmptyKey(KeyTier::CiCd)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            KeyRingError::EmptyKey(KeyTier::CiCd).to_string(),
            "API key for tier 'ci_cd' cannot be empty"
        );
        assert_eq!(
            KeyRingError::DuplicateKey(KeyTier::Demo, KeyTier::Admin).to_string(),
            "API keys for tiers 'demo' and 'admin' must be different"
        );
    }

    #[test]
    fn test_debug_redacts_keys() {
        let debug = format!("{:?}", ring());
        assert!(!debug.contains("admin-key"));
        assert!(debug.contains("REDACTED"));
    }
}
