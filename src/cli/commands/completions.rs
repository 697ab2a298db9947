//! The `completions` command: emit shell completion scripts.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;

pub fn run(args: &CompletionsArgs) -> Result<u8> {
    let mut command = Cli::command();
    generate(args.shell, &mut command, "toolcheck", &mut io::stdout());
    Ok(0)
}
