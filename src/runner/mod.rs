//! Locating tools and asking them for their version.

pub mod invoke;
pub mod lookup;
pub mod switches;

pub use invoke::{query_timeout, query_version, InvocationOutput};
pub use lookup::{find_executable, last_modified};
pub use switches::{KnownSwitches, DEFAULT_SWITCH};

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::check::Schema;
use crate::config::ToolConfig;
use crate::error::ToolcheckError;

/// What we learned about one tool before any compatibility judgment.
#[derive(Debug, Clone, Default)]
pub struct ToolAvailability {
    pub is_available: bool,
    /// The tool exists but could not answer its version switch cleanly.
    pub is_broken: bool,
    pub version: Option<String>,
    pub path: Option<PathBuf>,
    pub last_modified: Option<DateTime<Local>>,
}

impl ToolAvailability {
    fn absent() -> Self {
        Self {
            is_broken: true,
            ..Self::default()
        }
    }
}

/// Locate a tool and capture its version output.
///
/// Never returns an error: a tool that is missing, crashing, or hanging
/// is a finding to report, not a reason to abort the audit.
pub fn check_tool(config: &ToolConfig, known: &KnownSwitches, timeout: Duration) -> ToolAvailability {
    let Some(path) = find_executable(&config.name) else {
        tracing::debug!("{} not found on PATH", config.name);
        return ToolAvailability::absent();
    };
    let last_modified = last_modified(&path);

    if config.schema() == Schema::Existence {
        return ToolAvailability {
            is_available: true,
            is_broken: false,
            version: None,
            path: Some(path),
            last_modified,
        };
    }

    let switch = known.switch_for(&config.name, config.version_switch.as_deref());
    match query_version(&config.name, &switch, timeout) {
        Ok(output) => {
            let text = output.version_text();
            ToolAvailability {
                is_available: true,
                is_broken: !output.success(),
                version: (!text.is_empty()).then(|| text.to_string()),
                path: Some(path),
                last_modified,
            }
        }
        Err(ToolcheckError::Timeout { tool, seconds }) => {
            tracing::warn!("{tool} did not answer within {seconds}s");
            ToolAvailability {
                is_available: true,
                is_broken: true,
                version: None,
                path: Some(path),
                last_modified,
            }
        }
        Err(err) => {
            tracing::debug!("{} failed to run: {err}", config.name);
            ToolAvailability {
                is_available: true,
                is_broken: true,
                version: None,
                path: Some(path),
                last_modified,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(name: &str) -> ToolConfig {
        ToolConfig::new(name)
    }

    #[test]
    fn missing_tool_is_unavailable_and_broken() {
        let availability = check_tool(
            &config_for("definitely-not-a-real-tool-xyz"),
            &KnownSwitches::default(),
            Duration::from_secs(1),
        );
        assert!(!availability.is_available);
        assert!(availability.is_broken);
        assert!(availability.version.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn existence_schema_skips_invocation() {
        let mut config = config_for("sh");
        config.schema = Some(Schema::Existence);
        let availability =
            check_tool(&config, &KnownSwitches::default(), Duration::from_secs(1));
        assert!(availability.is_available);
        assert!(!availability.is_broken);
        assert!(availability.version.is_none());
        assert!(availability.last_modified.is_some());
    }

    #[cfg(unix)]
    #[test]
    fn present_tool_reports_version_text() {
        // `sh --version` behavior varies, use a tool that is reliably
        // present and answers --version on test machines.
        let availability = check_tool(
            &config_for("cargo"),
            &KnownSwitches::default(),
            Duration::from_secs(15),
        );
        if availability.is_available && !availability.is_broken {
            assert!(availability.version.is_some());
        }
    }
}
