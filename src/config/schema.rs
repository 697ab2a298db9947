//! Per-tool configuration entry.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::check::Schema;

/// What tool and what version the user wants to audit on their system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Tool name without path.
    #[serde(default)]
    pub name: String,

    /// Desired version specifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Command line switch to get the version, e.g. `-V`, `--version`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_switch: Option<String>,

    /// Version schema; `semver` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    /// Check only on this OS. Compared by prefix against
    /// `std::env::consts::OS` values (`linux`, `macos`, `windows`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_os: Option<String>,

    /// Tags for filtering audits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Command the user can run after a failed check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,

    /// Where the user can read how to install the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_docs: Option<String>,
}

impl ToolConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            version_switch: None,
            schema: None,
            if_os: None,
            tags: None,
            install_command: None,
            install_docs: None,
        }
    }

    /// Effective schema for this entry.
    pub fn schema(&self) -> Schema {
        self.schema.unwrap_or_default()
    }

    /// Content fingerprint of this entry, used as the cache key.
    ///
    /// Any field change produces a new fingerprint, which invalidates
    /// cached audit results for the old configuration.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_string(self).unwrap_or_default());
        hex::encode(hasher.finalize())
    }
}
