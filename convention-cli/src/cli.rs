//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CanonicalizeCommand, CompletionsCommand, ExtensionsCommand, FindCommand, LookupCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use convention::config::OutputFormat;
use std::path::PathBuf;

/// Resolve web resources by naming convention.
#[derive(Parser)]
#[command(name = "convention")]
#[command(version, about = "Resolve resources by naming convention", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Document root that resource paths are resolved against
    #[arg(long, value_name = "DIR", global = true, env = "CONVENTION_ROOT")]
    pub root: Option<PathBuf>,

    /// Override the user configuration directory
    #[arg(long, value_name = "DIR", global = true, env = "CONVENTION_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Collapse repeated separators in request paths
    Canonicalize(CanonicalizeCommand),

    /// Resolve a base path against the extension priority list
    Find(FindCommand),

    /// Find the page for an action or result code
    Lookup(LookupCommand),

    /// Show the effective extension priority list
    Extensions(ExtensionsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
