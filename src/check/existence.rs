//! Existence schema checker.
//!
//! Only presence on the search path matters; any desired version text
//! is ignored.

use crate::check::verdict::{Resolution, Verdict};
use crate::check::SchemaChecker;

/// Display strings for existence checks.
pub const FOUND: &str = "Found";
pub const NOT_FOUND: &str = "Not Found";

/// Checks only whether the tool was found on the search path.
pub struct ExistenceChecker {
    available: bool,
}

impl ExistenceChecker {
    pub fn new(available: bool) -> Self {
        Self { available }
    }
}

impl SchemaChecker for ExistenceChecker {
    fn check(&self, _desired: Option<&str>) -> Resolution {
        if self.available {
            Resolution::new(Verdict::Compatible, FOUND)
        } else {
            Resolution::new(Verdict::Incompatible(NOT_FOUND.into()), NOT_FOUND)
        }
    }
}
