//! In-memory usage store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::usage::{UsageKey, UsageRecord, UsageStore};
use crate::domain::DomainError;

/// In-memory usage store.
///
/// Increments take the write lock, so concurrent requests never lose a count.
/// Contents live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryUsageStore {
    records: RwLock<HashMap<UsageKey, UsageRecord>>,
}

impl InMemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsageStore for InMemoryUsageStore {
    async fn record(&self, key: UsageKey, at: DateTime<Utc>) -> Result<UsageRecord, DomainError> {
        let mut records = self.records.write().map_err(|e| {
            DomainError::internal(format!("Failed to acquire write lock: {}", e))
        })?;

        let record = records
            .entry(key)
            .and_modify(|record| record.touch(at))
            .or_insert_with(|| UsageRecord::first(at));

        Ok(record.clone())
    }

    async fn snapshot(&self) -> Result<Vec<(UsageKey, UsageRecord)>, DomainError> {
        let records = self.records.read().map_err(|e| {
            DomainError::internal(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut entries: Vec<_> = records
            .iter()
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(entries)
    }
}
