//! Command to find the page for an action or result code.

use crate::error::CliError;
use crate::utils::{extension_set, formatter, load_configuration, open_oracle, GlobalOptions};
use clap::Args;
use convention::output::ResolutionReport;
use convention::ConventionLookup;

/// Find the page for an action or result code.
#[derive(Args)]
pub struct LookupCommand {
    /// Action namespace (e.g. / or /admin)
    #[arg(value_name = "NAMESPACE")]
    pub namespace: String,

    /// Action name; empty selects the namespace index
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Result code to find a page for (e.g. success, input)
    #[arg(long = "result", value_name = "CODE")]
    pub result_code: Option<String>,

    /// Extension to try, in priority order (repeatable; `ext=result_type`)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

impl LookupCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let extensions = extension_set(&config, &self.extensions)?;
        let lookup = ConventionLookup::new(open_oracle(&config)?, extensions)
            .with_result_path(config.result_path_or_default());

        let (requested, steps, found) = match self.result_code {
            Some(ref code) => (
                format!("{}:{}#{code}", self.namespace, self.action),
                lookup.result_steps(&self.namespace, &self.action, code),
                lookup.find_result(&self.namespace, &self.action, code)?,
            ),
            None => (
                format!("{}:{}", self.namespace, self.action),
                lookup.action_steps(&self.namespace, &self.action),
                lookup.find_action(&self.namespace, &self.action)?,
            ),
        };

        let mut report = ResolutionReport::new(&requested);
        for (base, _) in &steps {
            report = report.with_candidates(base, lookup.extensions());
        }
        if let Some(ref found) = found {
            report = report.with_match(found);
        }
        println!("{}", formatter(&config).format_report(&report)?);

        if report.is_resolved() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "No page found for {requested}"
            )))
        }
    }
}
