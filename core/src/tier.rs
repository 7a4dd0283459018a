use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a reading. Variant order is the severity order, `Emergency` is the maximum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    #[default]
    Low,
    Moderate,
    High,
    Emergency,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Low,
        SeverityTier::Moderate,
        SeverityTier::High,
        SeverityTier::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Moderate => "moderate",
            SeverityTier::High => "high",
            SeverityTier::Emergency => "emergency",
        }
    }

    /// Merges two verdicts, never lowering the severity.
    pub fn merge(self, other: SeverityTier) -> SeverityTier {
        self.max(other)
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, SeverityTier::Emergency)
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_totally_ordered() {
        assert!(SeverityTier::Low < SeverityTier::Moderate);
        assert!(SeverityTier::Moderate < SeverityTier::High);
        assert!(SeverityTier::High < SeverityTier::Emergency);
    }

    #[test]
    fn merge_never_lowers() {
        for a in SeverityTier::ALL {
            for b in SeverityTier::ALL {
                let merged = a.merge(b);
                assert!(merged >= a && merged >= b);
            }
        }
        assert_eq!(
            SeverityTier::High.merge(SeverityTier::Moderate),
            SeverityTier::High
        );
    }

    #[test]
    fn serializes_lowercase() {
        let value = serde_json::to_value(SeverityTier::Emergency).unwrap();
        assert_eq!(value, serde_json::json!("emergency"));
    }
}
