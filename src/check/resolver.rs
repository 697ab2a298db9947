//! Schema dispatch: one entry point for all compatibility checks.

use crate::check::existence::ExistenceChecker;
use crate::check::pep440::Pep440Checker;
use crate::check::semver::SemverChecker;
use crate::check::snapshot::SnapshotChecker;
use crate::check::verdict::{Resolution, Verdict};
use crate::check::{Schema, SchemaChecker};

/// Rendered reason when a tool produced no version text.
pub const CANT_TELL: &str = "Can't tell";

/// Resolve a compatibility verdict for one tool check.
///
/// `found_raw` is the captured output of the tool's version switch
/// (`None` when the tool is absent or produced nothing). An empty
/// response carries no information, so every schema except `Existence`
/// yields [`Verdict::Indeterminate`] for it rather than misreporting an
/// incompatibility.
///
/// This function never panics and never returns an error: every
/// internal parse failure degrades to an indeterminate verdict.
pub fn resolve(schema: Schema, desired: Option<&str>, found_raw: Option<&str>) -> Resolution {
    if schema == Schema::Existence {
        return ExistenceChecker::new(found_raw.is_some()).check(desired);
    }

    let found_raw = found_raw.map(str::trim).unwrap_or("");
    if found_raw.is_empty() {
        tracing::debug!(
            "tool provided no version text, can't tell ({:?}/{:?})",
            desired,
            found_raw
        );
        return Resolution::new(Verdict::Indeterminate(CANT_TELL.into()), "");
    }

    match schema {
        Schema::Semver => SemverChecker::new(found_raw).check(desired),
        Schema::Pep440 => Pep440Checker::new(found_raw).check(desired),
        Schema::Snapshot => SnapshotChecker::new(found_raw).check(desired),
        Schema::Existence => unreachable!("handled above"),
    }
}
