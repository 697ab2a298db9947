//! The `single` command: check one tool without a config file.

use crate::audit::AuditManager;
use crate::cli::args::SingleArgs;
use crate::config::ToolConfig;
use crate::error::Result;
use crate::policy;
use crate::report::{self, OutputFormat};

pub fn run(args: &SingleArgs) -> Result<u8> {
    let mut config = ToolConfig::new(&args.tool);
    config.version = args.version.clone();
    config.version_switch = args.version_switch.clone();
    config.schema = args.schema;
    config.if_os = args.if_os.clone();

    let result = AuditManager::default().call_and_check(&config);
    let results = vec![result];
    println!("{}", report::render(&results, args.format)?);

    if policy::audit_failed(&results) && args.format == OutputFormat::Table {
        Ok(1)
    } else {
        Ok(0)
    }
}
