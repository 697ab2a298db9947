//! Interactive config editing.

use std::path::Path;
use std::str::FromStr;

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::check::Schema;
use crate::config::{ConfigManager, ToolUpdate};
use crate::error::{Result, ToolcheckError};

fn map_dialoguer_err(e: dialoguer::Error) -> ToolcheckError {
    ToolcheckError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

const ACTIONS: [&str; 3] = ["create or update a tool", "delete a tool", "exit"];

/// Loop asking the user to edit tool entries until they exit.
pub fn run(config_path: &Path) -> Result<()> {
    let mut manager = ConfigManager::new(config_path);
    manager.read()?;
    let theme = prompt_theme();

    loop {
        let action = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&ACTIONS)
            .default(0)
            .interact()
            .map_err(map_dialoguer_err)?;

        match action {
            0 => create_or_update(&mut manager, &theme)?,
            1 => delete(&mut manager, &theme)?,
            _ => break,
        }
    }
    Ok(())
}

fn ask_tool_name(theme: &ColorfulTheme) -> Result<String> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Tool name")
        .interact_text()
        .map_err(map_dialoguer_err)?;
    Ok(name.trim().to_string())
}

fn create_or_update(manager: &mut ConfigManager, theme: &ColorfulTheme) -> Result<()> {
    let name = ask_tool_name(theme)?;
    if name.is_empty() {
        println!("No tool name given, nothing to do.");
        return Ok(());
    }

    let existence_only = Confirm::with_theme(theme)
        .with_prompt("Only check that the tool exists?")
        .default(false)
        .interact()
        .map_err(map_dialoguer_err)?;

    let update = if existence_only {
        ToolUpdate {
            schema: Some(Schema::Existence),
            ..Default::default()
        }
    } else {
        let schema_idx = Select::with_theme(theme)
            .with_prompt("Version schema")
            .items(&Schema::NAMES)
            .default(0)
            .interact()
            .map_err(map_dialoguer_err)?;
        let schema =
            Schema::from_str(Schema::NAMES[schema_idx]).map_err(|msg| anyhow::anyhow!(msg))?;

        let version: String = Input::with_theme(theme)
            .with_prompt("Desired version (e.g. >=1.2.0, ^1.2.0, *)")
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_err)?;
        let version_switch: String = Input::with_theme(theme)
            .with_prompt("Version switch")
            .default("--version".to_string())
            .interact_text()
            .map_err(map_dialoguer_err)?;
        let if_os: String = Input::with_theme(theme)
            .with_prompt("Only check on OS (blank for all)")
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_err)?;

        ToolUpdate {
            version: (!version.trim().is_empty()).then(|| version.trim().to_string()),
            version_switch: Some(version_switch.trim().to_string()),
            schema: Some(schema),
            if_os: (!if_os.trim().is_empty()).then(|| if_os.trim().to_string()),
        }
    };

    manager.create_or_update_tool(&name, &update)?;
    println!("Saved {name}.");
    Ok(())
}

fn delete(manager: &mut ConfigManager, theme: &ColorfulTheme) -> Result<()> {
    let name = ask_tool_name(theme)?;
    if name.is_empty() {
        return Ok(());
    }
    if !manager.tools.contains_key(&name) {
        println!("No entry for {name}.");
        return Ok(());
    }
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete {name}?"))
        .default(false)
        .interact()
        .map_err(map_dialoguer_err)?;
    if confirmed {
        manager.delete_tool(&name)?;
        println!("Deleted {name}.");
    }
    Ok(())
}
