//! The `audit` command: check every tool in the config.

use crate::audit::{self, AuditOptions};
use crate::cli::args::{AuditArgs, Cli};
use crate::config;
use crate::error::{Result, ToolcheckError};
use crate::policy;
use crate::report::{self, OutputFormat};

pub fn run(cli: &Cli, args: &AuditArgs) -> Result<u8> {
    if !cli.config.exists() {
        return Err(ToolcheckError::ConfigNotFound {
            path: cli.config.clone(),
        });
    }
    let tools = config::read_tools(&cli.config)?;

    let options = AuditOptions {
        no_cache: args.no_cache,
        tags: (!args.tags.is_empty()).then(|| args.tags.clone()),
        show_progress: args.format == OutputFormat::Table && !cli.quiet,
    };
    let results = audit::process_tools(&tools, &options);
    let failed = policy::audit_failed(&results);

    let shown = if args.only_errors {
        policy::problems(&results)
    } else {
        results
    };
    println!("{}", report::render(&shown, args.format)?);

    // Machine-readable formats always exit 0 so pipelines can consume
    // the output and judge for themselves.
    if failed && !args.never_fail && args.format == OutputFormat::Table {
        Ok(1)
    } else {
        Ok(0)
    }
}
