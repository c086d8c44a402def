//! Main entry point for the convention CLI.
//!
//! Commands:
//! - `canonicalize`: Collapse repeated separators in request paths
//! - `find`: Resolve a base path against the extension priority list
//! - `lookup`: Find the page for an action or result code
//! - `extensions`: Show the effective extension priority list
//! - `validate`: Check a configuration file

use clap::Parser;
use convention_cli::cli::{Cli, Command};
use convention_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Library records flow through the same logger
    let logger = convention::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root: cli.root,
        config_dir: cli.config_dir,
        format: cli.format,
    };

    let result = match cli.command {
        Command::Canonicalize(cmd) => cmd.execute(&global),
        Command::Find(cmd) => cmd.execute(&global),
        Command::Lookup(cmd) => cmd.execute(&global),
        Command::Extensions(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
