//! Output formatting for resolution reports.
//!
//! This module renders what a lookup tried and what it found, either as
//! human-readable text or as JSON.

mod formatters;

use std::path::Path;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::extension::ExtensionSet;
use crate::lookup::{ConventionMatch, MatchKind};
use crate::path::{CanonicalPath, Resource};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Trait for rendering reports in a particular output format.
pub trait OutputFormatter {
    /// Format a resolution report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_report(&self, report: &ResolutionReport) -> Result<String>;

    /// Format an extension priority list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_extensions(&self, extensions: &ExtensionSet) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

/// What a lookup asked for, which probe paths were candidates, and what
/// matched.
///
/// # Examples
///
/// ```
/// use convention::output::ResolutionReport;
/// use convention::ExtensionSet;
///
/// let set = ExtensionSet::from_extensions(["jsp", "ftl"]).unwrap();
/// let report = ResolutionReport::new("//a//b").with_candidates("//a//b", &set);
/// assert_eq!(report.candidates, ["/a/b.jsp", "/a/b.ftl"]);
/// assert!(!report.is_resolved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    /// The request as the caller wrote it.
    pub requested: String,
    /// Probe paths in the order they would be tried.
    pub candidates: Vec<String>,
    /// The match, if any.
    pub resolved: Option<ResolvedEntry>,
}

/// The matched resource inside a [`ResolutionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// Canonical probe path that matched.
    pub path: String,
    /// Extension that matched.
    pub extension: String,
    /// Result type registered for the extension.
    pub result_type: String,
    /// Convention lookup step, when the match came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MatchKind>,
    /// Where the oracle says the resource lives.
    pub location: String,
}

impl ResolutionReport {
    /// Start a report for `requested`.
    pub fn new(requested: impl Into<String>) -> Self {
        Self {
            requested: requested.into(),
            candidates: Vec::new(),
            resolved: None,
        }
    }

    /// Append the probe paths `base` would produce with `extensions`.
    #[must_use]
    pub fn with_candidates(mut self, base: &str, extensions: &ExtensionSet) -> Self {
        let base = CanonicalPath::new(base);
        self.candidates
            .extend(extensions.extensions().map(|ext| base.probe(ext)));
        self
    }

    /// Record a resource found by [`PathResolver`](crate::PathResolver).
    #[must_use]
    pub fn with_resource<H: AsRef<Path>>(
        mut self,
        resource: &Resource<H>,
        extensions: &ExtensionSet,
    ) -> Self {
        let extension = resource.extension().as_str();
        self.resolved = Some(ResolvedEntry {
            path: resource.path().to_string(),
            extension: extension.to_string(),
            result_type: extensions
                .result_type_of(extension)
                .unwrap_or(crate::extension::DEFAULT_RESULT_TYPE)
                .to_string(),
            kind: None,
            location: resource.handle().as_ref().display().to_string(),
        });
        self
    }

    /// Record a convention lookup match.
    #[must_use]
    pub fn with_match<H: AsRef<Path>>(mut self, found: &ConventionMatch<H>) -> Self {
        self.resolved = Some(ResolvedEntry {
            path: found.resource.path().to_string(),
            extension: found.resource.extension().to_string(),
            result_type: found.result_type.clone(),
            kind: Some(found.kind),
            location: found.resource.handle().as_ref().display().to_string(),
        });
        self
    }

    /// Returns `true` if something matched.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::MemoryOracle;
    use crate::PathResolver;

    #[test]
    fn test_report_from_resource() {
        let set = ExtensionSet::defaults();
        let resolver = PathResolver::new(MemoryOracle::new().with("/a/b.ftl", "mem:b"));
        let resource = resolver.find_resource(&set, "/a//b").unwrap().unwrap();

        let report = ResolutionReport::new("/a//b")
            .with_candidates("/a//b", &set)
            .with_resource(&resource, &set);

        assert_eq!(report.candidates.len(), set.len());
        let resolved = report.resolved.unwrap();
        assert_eq!(resolved.path, "/a/b.ftl");
        assert_eq!(resolved.result_type, "freemarker");
        assert_eq!(resolved.location, "mem:b");
        assert_eq!(resolved.kind, None);
    }

    #[test]
    fn test_create_formatter() {
        let report = ResolutionReport::new("/x");
        let human = OutputFormat::Human.create_formatter().format_report(&report).unwrap();
        let json = OutputFormat::Json.create_formatter().format_report(&report).unwrap();
        assert!(human.contains("not found"));
        assert!(json.contains("\"resolved\": null"));
    }
}
