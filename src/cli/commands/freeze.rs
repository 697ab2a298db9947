//! The `freeze` command: record what is installed right now.

use crate::cli::args::{Cli, FreezeArgs};
use crate::error::Result;
use crate::freeze;

pub fn run(cli: &Cli, args: &FreezeArgs) -> Result<u8> {
    if args.save {
        freeze::freeze_to_config(&cli.config, &args.tools, args.schema)?;
        println!("Wrote {} tool(s) to {}", args.tools.len(), cli.config.display());
    } else {
        print!("{}", freeze::freeze_to_screen(&args.tools, args.schema));
    }
    Ok(0)
}
