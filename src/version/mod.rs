//! Version parsing and range handling.
//!
//! This module turns the noisy free text produced by `tool --version`
//! into structured, comparable versions:
//!
//! - [`normalize`] - best-effort conversion of arbitrary text into a
//!   [`semver::Version`]
//! - [`pep440`] - PEP 440 parsing and conversion into the semver model
//! - [`range`] - expansion of caret/tilde/wildcard expressions into
//!   explicit bounds
//!
//! All comparisons elsewhere in the crate go through semver precedence
//! (`Version::cmp_precedence`), which ignores build metadata.

pub mod normalize;
pub mod pep440;
pub mod range;

pub use normalize::normalize;
pub use range::{expand, VersionRange};
