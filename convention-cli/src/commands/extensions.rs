//! Command to show the effective extension priority list.

use crate::error::CliError;
use crate::utils::{extension_set, formatter, load_configuration, GlobalOptions};
use clap::Args;

/// Show the effective extension priority list.
#[derive(Args)]
pub struct ExtensionsCommand {}

impl ExtensionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let extensions = extension_set(&config, &[])?;
        println!("{}", formatter(&config).format_extensions(&extensions)?);
        Ok(())
    }
}
