//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::check::Schema;
use crate::report::OutputFormat;

/// Toolcheck - Audit CLI tool versions against a config file.
#[derive(Debug, Parser)]
#[command(name = "toolcheck")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, default_value = "toolcheck.toml")]
    pub config: PathBuf,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit every tool in the config (default if no command specified)
    Audit(AuditArgs),

    /// Check one tool without a config file
    Single(SingleArgs),

    /// Capture currently-installed versions
    Freeze(FreezeArgs),

    /// Show the tool entries in the config
    Read,

    /// Add a tool entry to the config
    Create(EntryArgs),

    /// Change a tool entry in the config
    Update(EntryArgs),

    /// Remove a tool entry from the config
    Delete(DeleteArgs),

    /// Edit the config with prompts
    Interactive,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `audit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AuditArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Exit 0 even when tools are missing or incompatible
    #[arg(long)]
    pub never_fail: bool,

    /// Skip the result cache
    #[arg(long)]
    pub no_cache: bool,

    /// Report only tools with problems
    #[arg(long)]
    pub only_errors: bool,

    /// Audit only tools carrying one of these tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

/// Arguments for the `single` command.
#[derive(Debug, Clone, clap::Args)]
#[command(disable_version_flag = true)]
pub struct SingleArgs {
    /// Tool to check
    pub tool: String,

    /// Desired version specifier
    #[arg(long)]
    pub version: Option<String>,

    /// Switch to ask the tool its version with
    #[arg(long)]
    pub version_switch: Option<String>,

    /// Version schema: semver, snapshot, pep440, existence
    #[arg(long)]
    pub schema: Option<Schema>,

    /// Only check on this OS
    #[arg(long)]
    pub if_os: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the `freeze` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FreezeArgs {
    /// Tools to freeze
    #[arg(required = true)]
    pub tools: Vec<String>,

    /// Version schema to record: semver, snapshot, pep440, existence
    #[arg(long, default_value = "semver")]
    pub schema: Schema,

    /// Write entries into the config instead of printing them
    #[arg(long)]
    pub save: bool,
}

/// Arguments for the `create` and `update` commands.
#[derive(Debug, Clone, clap::Args)]
#[command(disable_version_flag = true)]
pub struct EntryArgs {
    /// Tool the entry is for
    pub tool: String,

    /// Desired version specifier
    #[arg(long)]
    pub version: Option<String>,

    /// Switch to ask the tool its version with
    #[arg(long)]
    pub version_switch: Option<String>,

    /// Version schema: semver, snapshot, pep440, existence
    #[arg(long)]
    pub schema: Option<Schema>,

    /// Only check on this OS
    #[arg(long)]
    pub if_os: Option<String>,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// Tool whose entry to remove
    pub tool: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
