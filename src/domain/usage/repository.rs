//! Usage store trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{UsageKey, UsageRecord};
use crate::domain::DomainError;

/// Process-lifetime store of usage counters.
///
/// Implementations must be safe to call concurrently; increments are not lost.
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Count one use of `key` at `at` and return the updated record
    async fn record(&self, key: UsageKey, at: DateTime<Utc>) -> Result<UsageRecord, DomainError>;

    /// All records, ordered by key
    async fn snapshot(&self) -> Result<Vec<(UsageKey, UsageRecord)>, DomainError>;
}
