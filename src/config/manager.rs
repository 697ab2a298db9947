//! Config file CRUD with format-preserving saves.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml_edit::{DocumentMut, InlineTable, Item, Value};

use crate::check::Schema;
use crate::config::ToolConfig;
use crate::error::{Result, ToolcheckError};

/// Partial update for a tool entry; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ToolUpdate {
    pub version: Option<String>,
    pub version_switch: Option<String>,
    pub schema: Option<Schema>,
    pub if_os: Option<String>,
}

impl ToolUpdate {
    fn apply(&self, config: &mut ToolConfig) {
        if let Some(version) = &self.version {
            config.version = Some(version.clone());
        }
        if let Some(switch) = &self.version_switch {
            config.version_switch = Some(switch.clone());
        }
        if let Some(schema) = self.schema {
            config.schema = Some(schema);
        }
        if let Some(if_os) = &self.if_os {
            config.if_os = Some(if_os.clone());
        }
    }
}

/// On-disk shape of a tool entry, including legacy keys from older
/// config files that predate the `schema` field.
#[derive(Debug, Deserialize)]
struct RawToolConfig {
    #[serde(flatten)]
    base: ToolConfig,
    #[serde(default)]
    only_check_existence: Option<bool>,
    #[serde(default)]
    version_snapshot: Option<String>,
}

impl RawToolConfig {
    fn into_config(self, name: &str) -> ToolConfig {
        let mut config = self.base;
        config.name = name.to_string();
        if self.only_check_existence.unwrap_or(false) {
            config.schema = Some(Schema::Existence);
        } else if let Some(snapshot) = self.version_snapshot {
            config.schema = Some(Schema::Snapshot);
            config.version = Some(snapshot);
        }
        config
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    tools: BTreeMap<String, RawToolConfig>,
}

/// Manages the `[tools]` section of a TOML config file.
pub struct ConfigManager {
    path: PathBuf,
    pub tools: BTreeMap<String, ToolConfig>,
}

impl ConfigManager {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            tools: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the `[tools]` section. Returns `false` when the file or the
    /// section is missing or empty.
    pub fn read(&mut self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        tracing::debug!("loading config from {}", self.path.display());

        let content = fs::read_to_string(&self.path)?;
        let parsed: ConfigFile =
            toml::from_str(&content).map_err(|err| ToolcheckError::ConfigParse {
                path: self.path.clone(),
                message: err.to_string(),
            })?;

        self.tools = parsed
            .tools
            .into_iter()
            .map(|(name, raw)| {
                let config = raw.into_config(&name);
                (name, config)
            })
            .collect();
        Ok(!self.tools.is_empty())
    }

    /// Create a new tool entry; fails if the tool already exists.
    pub fn create_tool(&mut self, name: &str, update: &ToolUpdate) -> Result<()> {
        self.ensure_loaded()?;
        if self.tools.contains_key(name) {
            return Err(ToolcheckError::ToolExists { name: name.into() });
        }
        let mut config = ToolConfig::new(name);
        update.apply(&mut config);
        self.tools.insert(name.to_string(), config);
        self.save()
    }

    /// Update an existing tool entry; fails if the tool does not exist.
    pub fn update_tool(&mut self, name: &str, update: &ToolUpdate) -> Result<()> {
        self.ensure_loaded()?;
        match self.tools.get_mut(name) {
            Some(config) => {
                update.apply(config);
                self.save()
            }
            None => Err(ToolcheckError::UnknownTool { name: name.into() }),
        }
    }

    /// Create the entry if missing, otherwise update it in place.
    pub fn create_or_update_tool(&mut self, name: &str, update: &ToolUpdate) -> Result<()> {
        self.ensure_loaded()?;
        let config = self
            .tools
            .entry(name.to_string())
            .or_insert_with(|| ToolConfig::new(name));
        update.apply(config);
        self.save()
    }

    /// Delete a tool entry; deleting a missing entry is a no-op.
    pub fn delete_tool(&mut self, name: &str) -> Result<()> {
        self.ensure_loaded()?;
        if self.tools.remove(name).is_none() {
            return Ok(());
        }
        self.save()
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if self.tools.is_empty() {
            self.read()?;
        }
        Ok(())
    }

    /// Write the `[tools]` section back, preserving everything else in
    /// the document.
    pub fn save(&self) -> Result<()> {
        let mut doc = if self.path.exists() {
            fs::read_to_string(&self.path)?
                .parse::<DocumentMut>()
                .map_err(|err| ToolcheckError::ConfigParse {
                    path: self.path.clone(),
                    message: err.to_string(),
                })?
        } else {
            DocumentMut::new()
        };

        if doc.get("tools").and_then(Item::as_table).is_none() {
            doc.insert("tools", toml_edit::table());
        }
        let Some(table) = doc["tools"].as_table_mut() else {
            return Err(ToolcheckError::ConfigParse {
                path: self.path.clone(),
                message: "'tools' is not a table".into(),
            });
        };

        for (name, config) in &self.tools {
            table.insert(name, Item::Value(Value::InlineTable(inline_table(config))));
        }

        // Handle deletes.
        let stale: Vec<String> = table
            .iter()
            .map(|(key, _)| key.to_string())
            .filter(|key| !self.tools.contains_key(key))
            .collect();
        for key in stale {
            table.remove(&key);
        }

        fs::write(&self.path, doc.to_string())?;
        Ok(())
    }
}

fn inline_table(config: &ToolConfig) -> InlineTable {
    let mut table = InlineTable::new();
    if let Some(version) = &config.version {
        table.insert("version", Value::from(version.as_str()));
    }
    if let Some(switch) = &config.version_switch {
        table.insert("version_switch", Value::from(switch.as_str()));
    }
    if let Some(schema) = config.schema {
        table.insert("schema", Value::from(schema.to_string()));
    }
    if let Some(if_os) = &config.if_os {
        table.insert("if_os", Value::from(if_os.as_str()));
    }
    if let Some(tags) = &config.tags {
        let array: toml_edit::Array = tags.iter().map(|tag| Value::from(tag.as_str())).collect();
        table.insert("tags", Value::Array(array));
    }
    if let Some(command) = &config.install_command {
        table.insert("install_command", Value::from(command.as_str()));
    }
    if let Some(docs) = &config.install_docs {
        table.insert("install_docs", Value::from(docs.as_str()));
    }
    table
}
