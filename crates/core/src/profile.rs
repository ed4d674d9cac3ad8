//! The [`Profile`] record produced by extraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role used when a rule captures a name without any role information.
pub const DEFAULT_ROLE: &str = "Expert";

/// Role used when a rule captures a name and an organization but no title.
pub const AFFILIATED_ROLE: &str = "Representative";

/// Company used when no organization is captured.
pub const DEFAULT_COMPANY: &str = "Organization";

/// Quote used when no sentence could be attributed to the name.
pub const NO_QUOTE: &str = "No direct quote found";

/// A person mentioned in an article, with what the rules could infer about them.
///
/// `confidence` is on a 0-100 scale and reflects how structured the matching
/// rule was, not a probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub company: String,
    pub quote: String,
    pub confidence: u8,
}

impl Profile {
    /// Gets the display tier for this profile's confidence.
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    /// Whether a real quote (not the placeholder) was attributed.
    pub fn has_quote(&self) -> bool {
        self.quote != NO_QUOTE
    }
}

/// Coarse bands used when presenting confidence scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Medium,
    High,
}

impl ConfidenceTier {
    /// High above 90, medium otherwise.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 90 { Self::High } else { Self::Medium }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(confidence: u8, quote: &str) -> Profile {
        Profile {
            name: "Jane Doe".to_string(),
            role: "CEO".to_string(),
            company: "Acme Corp".to_string(),
            quote: quote.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_tiers() {
        assert_eq!(profile(95, NO_QUOTE).tier(), ConfidenceTier::High);
        assert_eq!(profile(91, NO_QUOTE).tier(), ConfidenceTier::High);
        assert_eq!(profile(90, NO_QUOTE).tier(), ConfidenceTier::Medium);
        assert_eq!(profile(85, NO_QUOTE).tier(), ConfidenceTier::Medium);
        assert_eq!(profile(40, NO_QUOTE).tier(), ConfidenceTier::Medium);
    }

    #[test]
    fn test_has_quote() {
        assert!(!profile(95, NO_QUOTE).has_quote());
        assert!(profile(95, "Jane Doe said hello.").has_quote());
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(profile(95, NO_QUOTE)).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        for key in ["name", "role", "company", "quote", "confidence"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["confidence"], 95);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(ConfidenceTier::Medium.to_string(), "medium");
    }
}
