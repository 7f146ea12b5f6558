//! Privilege tiers resolved from API keys

use serde::{Deserialize, Serialize};

/// Privilege class of a configured API key.
///
/// Declaration order is the order keys are matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTier {
    Demo,
    CiCd,
    Admin,
}

impl KeyTier {
    /// All tiers in match order
    pub const ALL: [KeyTier; 3] = [KeyTier::Demo, KeyTier::CiCd, KeyTier::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::CiCd => "ci_cd",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for KeyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serialization() {
        assert_eq!(serde_json::to_string(&KeyTier::Demo).unwrap(), "\"demo\"");
        assert_eq!(serde_json::to_string(&KeyTier::CiCd).unwrap(), "\"ci_cd\"");
        assert_eq!(serde_json::to_string(&KeyTier::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_display_matches_serde() {
        for tier in KeyTier::ALL {
            assert_eq!(
                serde_json::to_string(&tier).unwrap(),
                format!("\"{}\"", tier)
            );
        }
    }
}
