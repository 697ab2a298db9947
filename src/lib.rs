//! Toolcheck: audit the CLI tools on a machine against a config file.
//!
//! The config file's `[tools]` section names the tools a project needs
//! and the versions it wants. Toolcheck locates each tool, asks it for
//! its version, and judges compatibility under the tool's version
//! schema. Reports render as a terminal table or as machine-readable
//! JSON, CSV, XML, or HTML.

pub mod audit;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod freeze;
pub mod interactive;
pub mod policy;
pub mod report;
pub mod runner;
pub mod version;

pub use error::{Result, ToolcheckError};
