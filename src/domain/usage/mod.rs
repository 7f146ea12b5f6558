//! Usage tracking domain
//!
//! In-memory counters of successful authentications per client and tier.

mod record;
mod repository;

pub use record::{UsageKey, UsageRecord};
pub use repository::UsageStore;
