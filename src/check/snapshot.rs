//! Snapshot schema checker.
//!
//! Snapshot versioning treats the entire raw output of the version
//! switch as the version. The string has no internal structure, no
//! ordering, and no ranges, so the normalizer is bypassed entirely and
//! compatibility is byte-exact equality after trimming.

use crate::check::verdict::{Resolution, Verdict};
use crate::check::SchemaChecker;

/// Checks a found version string by exact comparison.
pub struct SnapshotChecker {
    found: String,
}

impl SnapshotChecker {
    pub fn new(found_raw: &str) -> Self {
        Self {
            found: found_raw.trim().to_string(),
        }
    }
}

impl SchemaChecker for SnapshotChecker {
    fn check(&self, desired: Option<&str>) -> Resolution {
        let desired = desired.map(str::trim).unwrap_or("");
        let verdict = if self.found == desired {
            Verdict::Compatible
        } else {
            Verdict::Incompatible("Snapshot differs".into())
        };
        Resolution::new(verdict, self.found.clone())
    }
}
