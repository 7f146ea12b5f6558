//! API key domain
//!
//! A closed set of tiers, each backed by exactly one configured key.

mod identity;
mod key_ring;
mod tier;

pub use identity::{ApiKeyIdentity, CurrentUser};
pub use key_ring::{ApiKeyRing, KeyRingError};
pub use tier::KeyTier;
