//! Usage record entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::api_key::KeyTier;

/// Identifies a usage counter: one per (client address, tier) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UsageKey {
    pub client: String,
    pub tier: KeyTier,
}

impl UsageKey {
    pub fn new(client: impl Into<String>, tier: KeyTier) -> Self {
        Self {
            client: client.into(),
            tier,
        }
    }
}

impl std::fmt::Display for UsageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.client, self.tier)
    }
}

/// Authentication counter for one usage key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub count: u64,
    pub first_used: DateTime<Utc>,
    pub last_used: DateTime<Utc>,
}

impl UsageRecord {
    /// A record for a first use at `at`
    pub fn first(at: DateTime<Utc>) -> Self {
        Self {
            count: 1,
            first_used: at,
            last_used: at,
        }
    }

    /// Count one more use at `at`
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.count += 1;
        self.last_used = at;
    }
}
