//! Best-effort normalization of free-text version output.
//!
//! Tools report versions in whatever shape they like: clean `1.2.3`
//! strings, two-part versions, PEP 440 forms, or a version buried in a
//! multi-line banner (`openjdk 17.0.6 2023-01-17 ...`). The normalizer
//! tries an ordered chain of pure parsers and returns the first success.
//! It is total: unparseable input yields `None`, never an error.

use std::str::FromStr;
use std::sync::LazyLock;

use pep508_rs::pep440_rs::Version as Pep440Version;
use regex::Regex;
use semver::Version;

use crate::version::pep440;

static RE_THREE_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+\.\d+").unwrap());
static RE_TWO_PART: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d+").unwrap());

/// Normalize an arbitrary version string into a structured version.
///
/// Fallback chain, first success wins:
/// 1. strict semver parse of the whole trimmed input;
/// 2. PEP 440 parse of the whole input, converted to semver (epoch and
///    post segments make the conversion fail);
/// 3. first `\d+.\d+.\d+` substring anywhere in the input, strict-parsed;
/// 4. first `\d+.\d+` substring, parsed via the PEP 440 path so the patch
///    component is promoted to zero.
///
/// Returns `None` when nothing version-shaped can be found.
pub fn normalize(raw: &str) -> Option<Version> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(version) = Version::parse(input) {
        return Some(version);
    }

    if let Some(version) = parse_as_pep440(input) {
        return Some(version);
    }

    if let Some(found) = extract_three_part(input) {
        if let Ok(version) = Version::parse(found) {
            return Some(version);
        }
    }

    if let Some(found) = extract_two_part(input) {
        if let Some(version) = parse_as_pep440(found) {
            return Some(version);
        }
    }

    tracing::debug!("no structured version in {:?}", input);
    None
}

/// Extract the first `MAJOR.MINOR.PATCH` run of digits, if any.
pub fn extract_three_part(input: &str) -> Option<&str> {
    RE_THREE_PART.find(input).map(|m| m.as_str())
}

/// Extract the first `MAJOR.MINOR` run of digits, if any.
pub fn extract_two_part(input: &str) -> Option<&str> {
    RE_TWO_PART.find(input).map(|m| m.as_str())
}

fn parse_as_pep440(input: &str) -> Option<Version> {
    let parsed = Pep440Version::from_str(input).ok()?;
    pep440::to_semver(&parsed).ok()
}
