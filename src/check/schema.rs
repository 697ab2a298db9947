//! Version schema selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The version-comparison grammar selected for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Major, minor, patch, prerelease, and build metadata.
    /// Compatibility by comparator or range expression.
    #[default]
    Semver,
    /// The entire output of the version switch is the version.
    /// Compatibility by exact match.
    Snapshot,
    /// PEP 440 grammar and ordering.
    Pep440,
    /// Only check that the tool exists; any version is compatible.
    Existence,
}

impl Schema {
    /// All schema names, for prompt choices and help text.
    pub const NAMES: [&'static str; 4] = ["semver", "snapshot", "pep440", "existence"];
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Schema::Semver => "semver",
            Schema::Snapshot => "snapshot",
            Schema::Pep440 => "pep440",
            Schema::Existence => "existence",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "semver" => Ok(Schema::Semver),
            "snapshot" => Ok(Schema::Snapshot),
            "pep440" => Ok(Schema::Pep440),
            "existence" => Ok(Schema::Existence),
            other => Err(format!(
                "unknown schema '{other}', expected one of: {}",
                Schema::NAMES.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_semver() {
        assert_eq!(Schema::default(), Schema::Semver);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for schema in [
            Schema::Semver,
            Schema::Snapshot,
            Schema::Pep440,
            Schema::Existence,
        ] {
            assert_eq!(schema.to_string().parse::<Schema>().unwrap(), schema);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("SemVer".parse::<Schema>().unwrap(), Schema::Semver);
        assert_eq!("SNAPSHOT".parse::<Schema>().unwrap(), Schema::Snapshot);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = "calver".parse::<Schema>().unwrap_err();
        assert!(err.contains("calver"));
        assert!(err.contains("semver"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Schema::Pep440).unwrap();
        assert_eq!(json, "\"pep440\"");
        let parsed: Schema = serde_json::from_str("\"existence\"").unwrap();
        assert_eq!(parsed, Schema::Existence);
    }
}
