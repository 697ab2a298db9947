//! Semver schema checker: comparators, ranges, and wildcards.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::check::verdict::{Resolution, Verdict};
use crate::check::SchemaChecker;
use crate::version::{expand, normalize};

/// Splits an optional comparator prefix from the version literal.
static RE_COMPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(>=|<=|==|!=|~=|>|<)?\s*(.*)$").unwrap());

/// Checks a found version against a semver specifier.
///
/// The found text is normalized once at construction; a found version
/// that is not version-shaped makes every check indeterminate.
pub struct SemverChecker {
    found: Option<Version>,
}

impl SemverChecker {
    pub fn new(found_raw: &str) -> Self {
        Self {
            found: normalize(found_raw),
        }
    }

    /// The normalized found version, if the raw text was version-shaped.
    pub fn found_version(&self) -> Option<&Version> {
        self.found.as_ref()
    }

    fn check_range(&self, desired: &str, found: &Version) -> Verdict {
        match expand(desired) {
            Ok(range) if range.contains(found) => Verdict::Compatible,
            Ok(_) => Verdict::Incompatible(format!("{desired} != {found}")),
            Err(err) => Verdict::Indeterminate(err.to_string()),
        }
    }

    fn check_comparator(&self, desired: &str, found: &Version) -> Verdict {
        let captures = match RE_COMPARATOR.captures(desired) {
            Some(captures) => captures,
            None => return Verdict::Indeterminate(format!("Can't tell: {desired}")),
        };
        let comparator = captures.get(1).map(|m| m.as_str());
        let literal = captures.get(2).map(|m| m.as_str()).unwrap_or("");

        // Compatible-release reduces to a tilde range on the literal.
        if comparator == Some("~=") {
            return self.check_range(&format!("~{literal}"), found);
        }

        let Some(wanted) = normalize(literal) else {
            return Verdict::Indeterminate(format!(
                "Can't make sense of desired version {desired}"
            ));
        };

        let ord = found.cmp_precedence(&wanted);
        // A bare version with no comparator means exact match, not "at least".
        let compatible = match comparator {
            None | Some("==") => ord.is_eq(),
            Some("!=") => ord.is_ne(),
            Some(">=") => ord.is_ge(),
            Some("<=") => ord.is_le(),
            Some(">") => ord.is_gt(),
            Some("<") => ord.is_lt(),
            Some(other) => {
                return Verdict::Indeterminate(format!("Unsupported comparator {other}"))
            }
        };

        if compatible {
            Verdict::Compatible
        } else {
            Verdict::Incompatible(format!("{desired} != {found}"))
        }
    }
}

/// A specifier is a range expression when it uses `^`, `~` (but not the
/// `~=` comparator), or a `*` wildcard.
fn is_range_expr(desired: &str) -> bool {
    desired.starts_with('^')
        || (desired.starts_with('~') && !desired.starts_with("~="))
        || desired.contains('*')
}

impl SchemaChecker for SemverChecker {
    fn check(&self, desired: Option<&str>) -> Resolution {
        let Some(found) = &self.found else {
            return Resolution::new(
                Verdict::Indeterminate("Found version is not version-shaped".into()),
                "Invalid format",
            );
        };
        let clean = found.to_string();

        let desired = desired.map(str::trim).unwrap_or("");
        // Blank or "*" matches anything, no further parsing needed.
        if desired.is_empty() || desired == "*" {
            return Resolution::new(Verdict::Compatible, clean);
        }

        let verdict = if is_range_expr(desired) {
            self.check_range(desired, found)
        } else {
            self.check_comparator(desired, found)
        };
        Resolution::new(verdict, clean)
    }
}
