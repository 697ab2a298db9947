//! Version switch selection.
//!
//! Most tools answer `--version`, but a few well-known ones insist on
//! something else. The table of exceptions is injected rather than
//! global so callers can extend it.

use std::collections::HashMap;

pub const DEFAULT_SWITCH: &str = "--version";

/// Tools that do not accept `--version`.
#[derive(Debug, Clone)]
pub struct KnownSwitches {
    switches: HashMap<String, String>,
}

impl Default for KnownSwitches {
    fn default() -> Self {
        let mut switches = HashMap::new();
        switches.insert("npm".to_string(), "version".to_string());
        switches.insert("terraform".to_string(), "-version".to_string());
        switches.insert("java".to_string(), "-version".to_string());
        Self { switches }
    }
}

impl KnownSwitches {
    pub fn empty() -> Self {
        Self {
            switches: HashMap::new(),
        }
    }

    pub fn insert(&mut self, tool: impl Into<String>, switch: impl Into<String>) {
        self.switches.insert(tool.into(), switch.into());
    }

    /// Pick the switch to invoke `tool` with.
    ///
    /// A configured switch wins unless it is absent or the generic
    /// `--version`, in which case the exception table is consulted
    /// before falling back to the default.
    pub fn switch_for(&self, tool: &str, configured: Option<&str>) -> String {
        match configured {
            Some(switch) if switch != DEFAULT_SWITCH => switch.to_string(),
            _ => self
                .switches
                .get(tool)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SWITCH.to_string()),
        }
    }
}
