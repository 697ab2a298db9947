//! Freeze: capture currently-installed versions as config entries.

use std::collections::BTreeMap;
use std::path::Path;

use crate::check::Schema;
use crate::config::{ConfigManager, ToolConfig, ToolUpdate};
use crate::error::Result;
use crate::runner::{self, KnownSwitches};
use crate::version;

/// Ask each named tool for its version, normalized per `schema`.
///
/// Tools that are missing or answer with nothing freeze to `None`, so
/// the caller can still record their names.
pub fn freeze_tools(names: &[String], schema: Schema) -> BTreeMap<String, Option<String>> {
    let known = KnownSwitches::default();
    let timeout = runner::query_timeout();
    let mut frozen = BTreeMap::new();

    for name in names {
        let mut config = ToolConfig::new(name.clone());
        config.schema = Some(schema);
        let availability = runner::check_tool(&config, &known, timeout);

        let version = match schema {
            Schema::Existence => None,
            Schema::Snapshot => availability.version,
            Schema::Semver | Schema::Pep440 => availability
                .version
                .as_deref()
                .and_then(version::normalize)
                .map(|v| v.to_string()),
        };
        if version.is_none() && schema != Schema::Existence {
            tracing::warn!("could not capture a version for {name}");
        }
        frozen.insert(name.clone(), version);
    }
    frozen
}

/// Render frozen versions as a `[tools]` snippet for the screen.
pub fn freeze_to_screen(names: &[String], schema: Schema) -> String {
    let frozen = freeze_tools(names, schema);
    let mut out = String::from("[tools]\n");
    for (name, version) in frozen {
        match version {
            Some(version) if schema == Schema::Semver => {
                out.push_str(&format!("{name} = {{ version = \"{version}\" }}\n"));
            }
            Some(version) => {
                out.push_str(&format!(
                    "{name} = {{ version = \"{version}\", schema = \"{schema}\" }}\n"
                ));
            }
            None if schema == Schema::Existence => {
                out.push_str(&format!("{name} = {{ schema = \"existence\" }}\n"));
            }
            None => {
                out.push_str(&format!("# {name}: no version captured\n"));
            }
        }
    }
    out
}

/// Write frozen versions into the config file, creating or updating
/// entries as needed.
pub fn freeze_to_config(path: &Path, names: &[String], schema: Schema) -> Result<()> {
    let frozen = freeze_tools(names, schema);
    let mut manager = ConfigManager::new(path);
    manager.read()?;

    for (name, version) in frozen {
        let update = ToolUpdate {
            version,
            schema: Some(schema),
            ..Default::default()
        };
        manager.create_or_update_tool(&name, &update)?;
        tracing::info!("froze {name}");
    }
    Ok(())
}
