//! Config CRUD commands: `read`, `create`, `update`, `delete`.

use crate::cli::args::{Cli, DeleteArgs, EntryArgs};
use crate::config::{ConfigManager, ToolUpdate};
use crate::error::Result;
use crate::report::Table;

pub fn read(cli: &Cli) -> Result<u8> {
    let mut manager = ConfigManager::new(&cli.config);
    if !manager.read()? {
        println!("No tool entries in {}", cli.config.display());
        return Ok(0);
    }

    let mut table = Table::new(vec!["Tool", "Version", "Schema", "Switch", "OS"]);
    for (name, config) in &manager.tools {
        table.add_row(vec![
            name.clone(),
            config.version.clone().unwrap_or_default(),
            config.schema().to_string(),
            config.version_switch.clone().unwrap_or_default(),
            config.if_os.clone().unwrap_or_default(),
        ]);
    }
    println!("{}", table.render());
    Ok(0)
}

fn update_from(args: &EntryArgs) -> ToolUpdate {
    ToolUpdate {
        version: args.version.clone(),
        version_switch: args.version_switch.clone(),
        schema: args.schema,
        if_os: args.if_os.clone(),
    }
}

pub fn create(cli: &Cli, args: &EntryArgs) -> Result<u8> {
    let mut manager = ConfigManager::new(&cli.config);
    manager.create_tool(&args.tool, &update_from(args))?;
    println!("Created {}", args.tool);
    Ok(0)
}

pub fn update(cli: &Cli, args: &EntryArgs) -> Result<u8> {
    let mut manager = ConfigManager::new(&cli.config);
    manager.update_tool(&args.tool, &update_from(args))?;
    println!("Updated {}", args.tool);
    Ok(0)
}

pub fn delete(cli: &Cli, args: &DeleteArgs) -> Result<u8> {
    let mut manager = ConfigManager::new(&cli.config);
    manager.delete_tool(&args.tool)?;
    println!("Deleted {}", args.tool);
    Ok(0)
}
