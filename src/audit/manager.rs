//! Single-tool audit: locate, invoke, judge.

use std::time::Duration;

use crate::check::{self, Schema, Verdict};
use crate::config::ToolConfig;
use crate::runner::{self, KnownSwitches};

use super::result::ToolCheckResult;

/// Runs one tool check end to end.
pub struct AuditManager {
    known: KnownSwitches,
    timeout: Duration,
}

impl Default for AuditManager {
    fn default() -> Self {
        Self {
            known: KnownSwitches::default(),
            timeout: runner::query_timeout(),
        }
    }
}

impl AuditManager {
    pub fn new(known: KnownSwitches, timeout: Duration) -> Self {
        Self { known, timeout }
    }

    /// Invoke the tool and resolve its compatibility verdict.
    pub fn call_and_check(&self, config: &ToolConfig) -> ToolCheckResult {
        let schema = config.schema();
        let desired = config.version.clone().unwrap_or_else(|| "*".to_string());

        if let Some(if_os) = &config.if_os {
            let os = std::env::consts::OS;
            if !os.starts_with(if_os.as_str()) {
                return ToolCheckResult {
                    tool: config.name.clone(),
                    desired_version: desired,
                    is_needed_for_os: false,
                    is_available: false,
                    is_snapshot: schema == Schema::Snapshot,
                    found_version: None,
                    parsed_version: None,
                    is_compatible: Verdict::Indeterminate(format!("{os}, not {if_os}")),
                    is_broken: false,
                    last_modified: None,
                    tool_config: config.clone(),
                };
            }
        }

        let availability = runner::check_tool(config, &self.known, self.timeout);

        let found_raw = if schema == Schema::Existence {
            // Presence marker only, the text itself is unused.
            availability.is_available.then(|| "Found".to_string())
        } else {
            availability.version.clone()
        };
        let resolution = check::resolve(schema, Some(&desired), found_raw.as_deref());

        ToolCheckResult {
            tool: config.name.clone(),
            desired_version: desired,
            is_needed_for_os: true,
            is_available: availability.is_available,
            is_snapshot: schema == Schema::Snapshot,
            found_version: availability.version,
            parsed_version: (!resolution.clean_format.is_empty())
                .then(|| resolution.clean_format.clone()),
            is_compatible: resolution.verdict,
            is_broken: availability.is_broken,
            last_modified: availability.last_modified,
            tool_config: config.clone(),
        }
    }
}
