//! Expansion of caret/tilde/wildcard ranges into explicit bounds.
//!
//! The expander only accepts expressions that are unambiguously ranges:
//! `^`/`~` prefixes and `*` wildcards. Plain version literals are exact
//! matches and are handled by the resolver before reaching this module,
//! so anything else here is a config error and fails loudly.

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{Result, ToolcheckError};

/// An expanded range expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    /// `*` - matches every version.
    Any,
    /// Lower bound inclusive, upper bound exclusive.
    Bounded { lower: Version, upper: Version },
}

impl VersionRange {
    /// Test a version against the range with semver precedence.
    ///
    /// Build metadata never participates in the comparison.
    pub fn contains(&self, version: &Version) -> bool {
        match self {
            VersionRange::Any => true,
            VersionRange::Bounded { lower, upper } => {
                version.cmp_precedence(lower).is_ge() && version.cmp_precedence(upper).is_lt()
            }
        }
    }
}

/// Expand a `^`/`~`/`*` range expression into explicit bounds.
///
/// - `*` matches everything;
/// - `1.*` is `[1.0.0, 2.0.0)` and `1.2.*` is `[1.2.0, 1.3.0)`;
/// - `^X.Y.Z` keeps the leftmost nonzero component fixed;
/// - `~X.Y[.Z]` is `[X.Y.(Z|0), X.(Y+1).0)`, `~X` is `[X.0.0, (X+1).0.0)`.
///
/// Anything not starting with `^` or `~` and without a `*` is rejected
/// with [`ToolcheckError::InvalidRange`].
pub fn expand(expr: &str) -> Result<VersionRange> {
    let expr = expr.trim();

    if expr == "*" {
        return Ok(VersionRange::Any);
    }

    if expr.contains('*') {
        return expand_wildcard(expr);
    }

    if let Some(literal) = expr.strip_prefix('^') {
        return expand_caret(expr, literal);
    }

    if let Some(literal) = expr.strip_prefix('~') {
        return expand_tilde(expr, literal);
    }

    Err(invalid(expr))
}

/// A version literal with optional minor/patch components.
///
/// Tilde semantics depend on whether the minor component was written
/// out, so partial parsing has to preserve that distinction.
struct Partial {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Prerelease,
}

impl Partial {
    fn lower_bound(&self) -> Version {
        Version {
            major: self.major,
            minor: self.minor.unwrap_or(0),
            patch: self.patch.unwrap_or(0),
            pre: self.pre.clone(),
            build: BuildMetadata::EMPTY,
        }
    }
}

fn expand_wildcard(expr: &str) -> Result<VersionRange> {
    let parts: Vec<&str> = expr.split('.').collect();
    match parts.as_slice() {
        [major, "*"] => {
            let major = parse_component(major, expr)?;
            Ok(VersionRange::Bounded {
                lower: Version::new(major, 0, 0),
                upper: Version::new(bump(major, expr)?, 0, 0),
            })
        }
        [major, minor, "*"] => {
            let major = parse_component(major, expr)?;
            let minor = parse_component(minor, expr)?;
            Ok(VersionRange::Bounded {
                lower: Version::new(major, minor, 0),
                upper: Version::new(major, bump(minor, expr)?, 0),
            })
        }
        _ => Err(invalid(expr)),
    }
}

fn expand_caret(expr: &str, literal: &str) -> Result<VersionRange> {
    let partial = parse_partial(literal, expr)?;
    let lower = partial.lower_bound();

    // Caret keeps the leftmost nonzero component fixed.
    let upper = if lower.major > 0 {
        Version::new(bump(lower.major, expr)?, 0, 0)
    } else if lower.minor > 0 {
        Version::new(0, bump(lower.minor, expr)?, 0)
    } else {
        Version::new(0, 0, bump(lower.patch, expr)?)
    };

    Ok(VersionRange::Bounded { lower, upper })
}

fn expand_tilde(expr: &str, literal: &str) -> Result<VersionRange> {
    let partial = parse_partial(literal, expr)?;
    let upper = match partial.minor {
        Some(minor) => Version::new(partial.major, bump(minor, expr)?, 0),
        None => Version::new(bump(partial.major, expr)?, 0, 0),
    };

    Ok(VersionRange::Bounded {
        lower: partial.lower_bound(),
        upper,
    })
}

fn parse_partial(literal: &str, expr: &str) -> Result<Partial> {
    // A full literal may carry a prerelease tag; strict parse keeps it.
    if let Ok(version) = Version::parse(literal) {
        return Ok(Partial {
            major: version.major,
            minor: Some(version.minor),
            patch: Some(version.patch),
            pre: version.pre,
        });
    }

    let parts: Vec<&str> = literal.split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid(expr));
    }

    let major = parse_component(parts[0], expr)?;
    let minor = parts.get(1).map(|p| parse_component(p, expr)).transpose()?;
    let patch = parts.get(2).map(|p| parse_component(p, expr)).transpose()?;

    Ok(Partial {
        major,
        minor,
        patch,
        pre: Prerelease::EMPTY,
    })
}

fn parse_component(part: &str, expr: &str) -> Result<u64> {
    part.parse().map_err(|_| invalid(expr))
}

/// Increment an upper-bound component; a component at `u64::MAX` has no
/// next version to bound against, so the expression is invalid.
fn bump(component: u64, expr: &str) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| invalid(expr))
}

fn invalid(expr: &str) -> ToolcheckError {
    ToolcheckError::InvalidRange { expr: expr.into() }
}
