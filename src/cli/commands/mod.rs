//! Command handlers and dispatch.

pub mod audit;
pub mod completions;
pub mod config;
pub mod freeze;
pub mod single;

use crate::cli::args::{AuditArgs, Cli, Commands};
use crate::error::Result;
use crate::interactive;

/// Run the selected command and return the process exit code.
///
/// No subcommand means `audit` with default arguments.
pub fn dispatch(cli: &Cli) -> Result<u8> {
    match &cli.command {
        None => audit::run(cli, &AuditArgs::default()),
        Some(Commands::Audit(args)) => audit::run(cli, args),
        Some(Commands::Single(args)) => single::run(args),
        Some(Commands::Freeze(args)) => freeze::run(cli, args),
        Some(Commands::Read) => config::read(cli),
        Some(Commands::Create(args)) => config::create(cli, args),
        Some(Commands::Update(args)) => config::update(cli, args),
        Some(Commands::Delete(args)) => config::delete(cli, args),
        Some(Commands::Interactive) => {
            interactive::run(&cli.config)?;
            Ok(0)
        }
        Some(Commands::Completions(args)) => completions::run(args),
    }
}
