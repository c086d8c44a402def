//! Command to resolve a base path against the extension priority list.

use crate::error::CliError;
use crate::utils::{extension_set, formatter, load_configuration, open_oracle, GlobalOptions};
use clap::Args;
use convention::output::ResolutionReport;
use convention::PathResolver;

/// Resolve a base path against the extension priority list.
#[derive(Args)]
pub struct FindCommand {
    /// Resource path without extension (e.g. /WEB-INF/content/hello)
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Extension to try, in priority order (repeatable; `ext=result_type`)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

impl FindCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration and pick the extension list
        let config = load_configuration(global)?;
        let extensions = extension_set(&config, &self.extensions)?;

        // 2. Probe below the document root
        let resolver = PathResolver::new(open_oracle(&config)?);
        let found = resolver.find_resource(&extensions, &self.base)?;

        // 3. Report
        let mut report = ResolutionReport::new(&self.base).with_candidates(&self.base, &extensions);
        if let Some(ref resource) = found {
            report = report.with_resource(resource, &extensions);
        }
        println!("{}", formatter(&config).format_report(&report)?);

        if report.is_resolved() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "No resource found for {}",
                self.base
            )))
        }
    }
}
