//! Collapsing candidate profiles to one entry per name.

use std::collections::HashMap;

use tracing::debug;

use crate::profile::Profile;

/// Which candidate survives when a name appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Keep the first candidate for each name.
    #[default]
    FirstSeen,
    /// Keep the first occurrence's position, but the fields of the candidate
    /// with the highest confidence. Earlier candidates win ties.
    HighestConfidence,
}

/// Keeps the first candidate for each distinct name, preserving order.
///
/// # Example
///
/// ```rust
/// use newsnex_core::{deduplicate, extract_profiles};
///
/// let candidates = extract_profiles("Jane Doe, CEO of Acme Corp, said the deal was final.");
/// let profiles = deduplicate(candidates);
///
/// assert_eq!(profiles.iter().filter(|p| p.name == "Jane Doe").count(), 1);
/// assert_eq!(profiles[0].role, "CEO");
/// ```
pub fn deduplicate(candidates: Vec<Profile>) -> Vec<Profile> {
    deduplicate_with_policy(candidates, DedupPolicy::FirstSeen)
}

/// Deduplicates by exact name using the given policy.
pub fn deduplicate_with_policy(candidates: Vec<Profile>, policy: DedupPolicy) -> Vec<Profile> {
    let total = candidates.len();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut profiles: Vec<Profile> = Vec::new();

    for candidate in candidates {
        match index.get(&candidate.name) {
            Some(&slot) => {
                if policy == DedupPolicy::HighestConfidence && candidate.confidence > profiles[slot].confidence {
                    profiles[slot] = candidate;
                }
            }
            None => {
                index.insert(candidate.name.clone(), profiles.len());
                profiles.push(candidate);
            }
        }
    }

    debug!(candidates = total, profiles = profiles.len(), ?policy, "deduplicated");
    profiles
}
