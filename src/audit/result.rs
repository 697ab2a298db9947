//! The outcome of auditing one tool.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::check::{Schema, Verdict};
use crate::config::ToolConfig;

/// Everything the report layer needs about one audited tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCheckResult {
    pub tool: String,

    /// Desired version specifier from the config, `*` when unset.
    pub desired_version: String,

    /// False when an `if_os` constraint excluded this tool here.
    pub is_needed_for_os: bool,

    pub is_available: bool,

    pub is_snapshot: bool,

    /// Raw captured version text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_version: Option<String>,

    /// Normalized version, snapshot text, or `Found`/`Not Found`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_version: Option<String>,

    pub is_compatible: Verdict,

    /// The tool exists but could not answer its version switch.
    pub is_broken: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Local>>,

    pub tool_config: ToolConfig,
}

impl ToolCheckResult {
    /// One-line status for reports, compressing the availability flags
    /// and the verdict into a single cell.
    pub fn status(&self) -> String {
        if !self.is_needed_for_os {
            return "Wrong OS".to_string();
        }
        if !self.is_available {
            return "Not available".to_string();
        }
        if self.tool_config.schema() == Schema::Existence {
            return "Available".to_string();
        }
        if self.is_broken {
            return "Can't run".to_string();
        }
        self.is_compatible.to_string()
    }

    /// Whether this result should count against the user.
    ///
    /// Tools excluded by OS are never a problem. Indeterminate verdicts
    /// are: a tool we cannot judge is a tool we cannot vouch for.
    pub fn is_problem(&self) -> bool {
        self.is_needed_for_os && (!self.is_compatible.is_compatible() || !self.is_available)
    }
}
