//! Pass/fail policy over a batch of audit results.

use crate::audit::ToolCheckResult;

/// Whether the audit as a whole failed.
///
/// Any tool that is a problem fails the run. An empty result set
/// passes: nothing was required, nothing is wrong.
pub fn audit_failed(results: &[ToolCheckResult]) -> bool {
    results.iter().any(ToolCheckResult::is_problem)
}

/// The problem subset, for `--only-errors` style reporting.
pub fn problems(results: &[ToolCheckResult]) -> Vec<ToolCheckResult> {
    results
        .iter()
        .filter(|result| result.is_problem())
        .cloned()
        .collect()
}
