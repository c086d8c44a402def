//! Command to canonicalize request paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use convention::path::canonicalize::canonicalize;

/// Collapse repeated separators in request paths.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// Paths to canonicalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl CanonicalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for path in &self.paths {
            println!("{}", canonicalize(path));
        }
        Ok(())
    }
}
