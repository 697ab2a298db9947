//! Compatibility verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of a compatibility check.
///
/// `Indeterminate` is not the same as `Incompatible`: it means the check
/// had nothing to go on (no version text, or text that is not
/// version-shaped), and it renders distinctly so users can tell
/// "can't tell" apart from a confirmed mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "lowercase")]
pub enum Verdict {
    /// The found version satisfies the desired specifier.
    Compatible,
    /// The found version does not satisfy the desired specifier.
    Incompatible(String),
    /// Not enough information to judge either way.
    Indeterminate(String),
}

impl Verdict {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Verdict::Compatible)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Verdict::Indeterminate(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Compatible => write!(f, "Compatible"),
            Verdict::Incompatible(reason) => write!(f, "{reason}"),
            Verdict::Indeterminate(reason) => write!(f, "{reason}"),
        }
    }
}

/// A verdict paired with a clean display string for the found version:
/// the normalized version, the raw snapshot text, or `Found`/`Not Found`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub verdict: Verdict,
    pub clean_format: String,
}

impl Resolution {
    pub fn new(verdict: Verdict, clean_format: impl Into<String>) -> Self {
        Self {
            verdict,
            clean_format: clean_format.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_displays_fixed_text() {
        assert_eq!(Verdict::Compatible.to_string(), "Compatible");
    }

    #[test]
    fn incompatible_displays_reason() {
        let v = Verdict::Incompatible(">=1.1.1 != 1.1.0".into());
        assert_eq!(v.to_string(), ">=1.1.1 != 1.1.0");
    }

    #[test]
    fn indeterminate_displays_reason() {
        let v = Verdict::Indeterminate("Can't tell".into());
        assert_eq!(v.to_string(), "Can't tell");
        assert!(v.is_indeterminate());
        assert!(!v.is_compatible());
    }

    #[test]
    fn verdict_serde_round_trips() {
        for verdict in [
            Verdict::Compatible,
            Verdict::Incompatible("mismatch".into()),
            Verdict::Indeterminate("Can't tell".into()),
        ] {
            let json = serde_json::to_string(&verdict).unwrap();
            let parsed: Verdict = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, verdict);
        }
    }
}
