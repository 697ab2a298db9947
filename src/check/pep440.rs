//! PEP 440 schema checker.
//!
//! Same specifier grammar as the semver checker, interpreted under PEP
//! 440 ordering (dev sorts before pre-release, pre-release before the
//! release). Specifier sets are delegated to the `pep440_rs` machinery.

use std::str::FromStr;

use pep508_rs::pep440_rs::{Version as Pep440Version, VersionSpecifiers};

use crate::check::verdict::{Resolution, Verdict};
use crate::check::SchemaChecker;

/// Checks a found version against a PEP 440 specifier.
pub struct Pep440Checker {
    found: Option<Pep440Version>,
}

impl Pep440Checker {
    pub fn new(found_raw: &str) -> Self {
        Self {
            found: Pep440Version::from_str(found_raw.trim()).ok(),
        }
    }

    fn check_specifier_set(&self, desired: &str, found: &Pep440Version) -> Verdict {
        match VersionSpecifiers::from_str(desired) {
            Ok(specifiers) if specifiers.contains(found) => Verdict::Compatible,
            Ok(_) => Verdict::Incompatible(format!("{desired} != {found}")),
            Err(err) => Verdict::Indeterminate(format!("Can't tell: {err}")),
        }
    }

    fn check_exact(&self, desired: &str, found: &Pep440Version) -> Verdict {
        match Pep440Version::from_str(desired) {
            Ok(wanted) if *found == wanted => Verdict::Compatible,
            Ok(_) => Verdict::Incompatible(format!("{desired} != {found}")),
            Err(err) => Verdict::Indeterminate(format!("Can't tell: {err}")),
        }
    }
}

/// Operator characters or whitespace flag a specifier set; a bare
/// version means exact match, mirroring the semver checker.
fn is_specifier_set(desired: &str) -> bool {
    desired.contains([' ', ',', '>', '<', '~', '=', '!', '*'])
}

impl SchemaChecker for Pep440Checker {
    fn check(&self, desired: Option<&str>) -> Resolution {
        let Some(found) = &self.found else {
            return Resolution::new(
                Verdict::Indeterminate("Found version is not PEP 440".into()),
                "Invalid format",
            );
        };
        let clean = found.to_string();

        let desired = desired.map(str::trim).unwrap_or("");
        // Blank is treated as "*".
        if desired.is_empty() || desired == "*" {
            return Resolution::new(Verdict::Compatible, clean);
        }

        let verdict = if is_specifier_set(desired) {
            self.check_specifier_set(desired, found)
        } else {
            self.check_exact(desired, found)
        };
        Resolution::new(verdict, clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(desired: Option<&str>, found: &str) -> Resolution {
        Pep440Checker::new(found).check(desired)
    }

    #[test]
    fn blank_desired_is_compatible() {
        assert!(check(None, "1.2.3").verdict.is_compatible());
        assert!(check(Some(""), "1.2.3").verdict.is_compatible());
        assert!(check(Some("*"), "1.2.3").verdict.is_compatible());
    }

    #[test]
    fn bare_version_means_exact_match() {
        assert!(check(Some("1.2.3"), "1.2.3").verdict.is_compatible());
        assert!(!check(Some("1.2.3"), "1.2.4").verdict.is_compatible());
    }

    #[test]
    fn specifier_set_containment() {
        assert!(check(Some(">=2.28.0"), "2.32.0").verdict.is_compatible());
        assert!(!check(Some(">=2.28.0"), "2.27.0").verdict.is_compatible());
    }

    #[test]
    fn compound_specifier_set() {
        assert!(check(Some(">=2.0, <3.0"), "2.5.0").verdict.is_compatible());
        assert!(!check(Some(">=2.0, <3.0"), "3.0.0").verdict.is_compatible());
    }

    #[test]
    fn compatible_release_operator() {
        assert!(check(Some("~=1.4.2"), "1.4.5").verdict.is_compatible());
        assert!(!check(Some("~=1.4.2"), "1.5.0").verdict.is_compatible());
    }

    #[test]
    fn pep440_ordering_applies_to_prereleases() {
        // 1.2.3a1 < 1.2.3 under PEP 440.
        assert!(check(Some("<1.2.3"), "1.2.3a1").verdict.is_compatible());
    }

    #[test]
    fn exact_match_uses_pep440_equality() {
        // PEP 440 normalizes case and separators.
        assert!(check(Some("1.2.3.post1"), "1.2.3.post1").verdict.is_compatible());
    }

    #[test]
    fn unparseable_found_is_indeterminate() {
        let res = check(Some(">=1.0"), "total garbage");
        assert!(res.verdict.is_indeterminate());
        assert_eq!(res.clean_format, "Invalid format");
    }

    #[test]
    fn unparseable_specifier_is_indeterminate() {
        assert!(check(Some(">>=1.0"), "1.2.3").verdict.is_indeterminate());
    }
}
