//! Planning strategy.
//!
//! One strategy value drives two decisions: how many retake candidates are
//! selected, and which placement policy the semester scheduler uses.
//!
//! | Strategy | Selection limit | Placement policy |
//! |----------|-----------------|------------------|
//! | `conservative` | 3 | least loaded |
//! | `balanced` | 5 | least loaded |
//! | `aggressive` | 8 | first available |
//! | `burnout` | 8 | first available |
//! | unrecognized | 8 | least loaded |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Retake planning strategy.
///
/// Unrecognized names parse to [`Strategy::Unspecified`] rather than
/// failing, so the fallback behavior is an explicit, testable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    /// Few courses, evenly spread.
    #[default]
    Conservative,
    /// Moderate selection, evenly spread.
    Balanced,
    /// Large selection, front-loaded.
    Aggressive,
    /// Large selection, packed as early as possible.
    Burnout,
    /// Any name not listed above.
    Unspecified,
}

impl Strategy {
    /// Parses a strategy name (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "conservative" => Self::Conservative,
            "balanced" => Self::Balanced,
            "aggressive" => Self::Aggressive,
            "burnout" => Self::Burnout,
            _ => Self::Unspecified,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
            Self::Burnout => "burnout",
            Self::Unspecified => "unspecified",
        }
    }

    /// Maximum number of retake candidates to select.
    pub fn selection_limit(&self) -> usize {
        match self {
            Self::Conservative => 3,
            Self::Balanced => 5,
            Self::Aggressive | Self::Burnout | Self::Unspecified => 8,
        }
    }

    /// Placement policy used by the semester scheduler.
    pub fn placement_policy(&self) -> PlacementPolicy {
        match self {
            Self::Aggressive | Self::Burnout => PlacementPolicy::FirstAvailable,
            Self::Conservative | Self::Balanced | Self::Unspecified => PlacementPolicy::LeastLoaded,
        }
    }
}

impl From<String> for Strategy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.name().to_string()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the scheduler picks a slot for each course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// Earliest slot that offers the course.
    FirstAvailable,
    /// Offering slot with the lowest accumulated hours; ties go to the earlier slot.
    LeastLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Strategy::from_name("conservative"), Strategy::Conservative);
        assert_eq!(Strategy::from_name(" Balanced "), Strategy::Balanced);
        assert_eq!(Strategy::from_name("AGGRESSIVE"), Strategy::Aggressive);
        assert_eq!(Strategy::from_name("burnout"), Strategy::Burnout);
        assert_eq!(Strategy::from_name("yolo"), Strategy::Unspecified);
        assert_eq!(Strategy::from_name(""), Strategy::Unspecified);
    }

    #[test]
    fn test_selection_limits() {
        assert_eq!(Strategy::Conservative.selection_limit(), 3);
        assert_eq!(Strategy::Balanced.selection_limit(), 5);
        assert_eq!(Strategy::Aggressive.selection_limit(), 8);
        assert_eq!(Strategy::Burnout.selection_limit(), 8);
        assert_eq!(Strategy::Unspecified.selection_limit(), 8);
    }

    #[test]
    fn test_unrecognized_falls_back_to_least_loaded() {
        assert_eq!(
            Strategy::from_name("something-else").placement_policy(),
            PlacementPolicy::LeastLoaded
        );
        assert_eq!(
            Strategy::Conservative.placement_policy(),
            PlacementPolicy::LeastLoaded
        );
        assert_eq!(
            Strategy::Burnout.placement_policy(),
            PlacementPolicy::FirstAvailable
        );
    }

    #[test]
    fn test_serde_lenient() {
        let s: Strategy = serde_json::from_str("\"burnout\"").unwrap();
        assert_eq!(s, Strategy::Burnout);
        let s: Strategy = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(s, Strategy::Unspecified);
        assert_eq!(serde_json::to_string(&Strategy::Balanced).unwrap(), "\"balanced\"");
    }
}
