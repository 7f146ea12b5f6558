//! Caller identity resolved by authentication

use serde::Serialize;

use super::KeyTier;

/// A caller that presented a valid API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyIdentity {
    pub tier: KeyTier,
    pub client_address: String,
}

impl ApiKeyIdentity {
    pub fn new(tier: KeyTier, client_address: impl Into<String>) -> Self {
        Self {
            tier,
            client_address: client_address.into(),
        }
    }

    /// Project the identity into the user view returned by `/me`
    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            user_type: self.tier,
            ip_address: self.client_address.clone(),
            authenticated: true,
        }
    }
}

/// User information derived from the caller's key tier and address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub user_type: KeyTier,
    pub ip_address: String,
    pub authenticated: bool,
}
