//! Compatibility checking between desired specifiers and found versions.
//!
//! A tool entry selects a [`Schema`]; the [`resolver`] dispatches to the
//! matching checker and produces a uniform [`Resolution`]. The checkers
//! are pure and synchronous: no IO, no shared state, safe to call from
//! any number of audit workers.

pub mod existence;
pub mod pep440;
pub mod resolver;
pub mod schema;
pub mod semver;
pub mod snapshot;
pub mod verdict;

pub use resolver::resolve;
pub use schema::Schema;
pub use verdict::{Resolution, Verdict};

/// A strategy for deciding compatibility between a desired specifier
/// and a found version, one implementation per [`Schema`] variant.
pub trait SchemaChecker {
    /// Check the found version against the desired specifier.
    ///
    /// Never panics and never returns an error: anything unparseable
    /// degrades to [`Verdict::Indeterminate`] with a reason.
    fn check(&self, desired: Option<&str>) -> Resolution;
}
