//! Output formatter implementations.

use std::fmt::Write as _;

use serde::Serialize;

use crate::extension::ExtensionSet;
use crate::Result;

use super::{OutputFormatter, ResolutionReport};

/// Plain text, one fact per line.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &ResolutionReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "requested: {}", report.requested);
        if !report.candidates.is_empty() {
            let _ = writeln!(out, "candidates:");
            for candidate in &report.candidates {
                let _ = writeln!(out, "  {candidate}");
            }
        }
        match &report.resolved {
            Some(entry) => {
                let kind = entry
                    .kind
                    .map(|k| format!(" [{k}]"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "found: {} ({}){kind}",
                    entry.path, entry.result_type
                );
                let _ = write!(out, "location: {}", entry.location);
            }
            None => {
                let _ = write!(out, "not found");
            }
        }
        Ok(out)
    }

    fn format_extensions(&self, extensions: &ExtensionSet) -> Result<String> {
        let width = extensions
            .extensions()
            .map(|e| e.as_str().len())
            .max()
            .unwrap_or(0);
        let lines: Vec<String> = extensions
            .iter()
            .enumerate()
            .map(|(i, m)| {
                format!(
                    "{:>2}. {:<width$}  {}",
                    i + 1,
                    m.extension.as_str(),
                    m.result_type
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ResolutionReport) -> Result<String> {
        Self::render(report)
    }

    fn format_extensions(&self, extensions: &ExtensionSet) -> Result<String> {
        Self::render(extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MatchKind;
    use crate::output::ResolvedEntry;

    fn found_report() -> ResolutionReport {
        ResolutionReport {
            requested: "/shop:cart".to_string(),
            candidates: vec!["/WEB-INF/content/shop/cart.jsp".to_string()],
            resolved: Some(ResolvedEntry {
                path: "/WEB-INF/content/shop/cart.jsp".to_string(),
                extension: "jsp".to_string(),
                result_type: "dispatcher".to_string(),
                kind: Some(MatchKind::Action),
                location: "/srv/site/WEB-INF/content/shop/cart.jsp".to_string(),
            }),
        }
    }

    #[test]
    fn test_human_report() {
        let text = HumanFormatter.format_report(&found_report()).unwrap();
        assert!(text.contains("requested: /shop:cart"));
        assert!(text.contains("found: /WEB-INF/content/shop/cart.jsp (dispatcher) [action]"));
        assert!(text.ends_with("location: /srv/site/WEB-INF/content/shop/cart.jsp"));
    }

    #[test]
    fn test_json_report() {
        let json = JsonFormatter.format_report(&found_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["resolved"]["kind"], "action");
        assert_eq!(value["resolved"]["extension"], "jsp");
        assert_eq!(value["candidates"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_json_omits_missing_kind() {
        let mut report = found_report();
        if let Some(entry) = report.resolved.as_mut() {
            entry.kind = None;
        }
        let json = JsonFormatter.format_report(&report).unwrap();
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_extension_listing() {
        let set: ExtensionSet = "jsp,ftl=freemarker".parse().unwrap();
        let text = HumanFormatter.format_extensions(&set).unwrap();
        assert_eq!(text, " 1. jsp  dispatcher\n 2. ftl  freemarker");

        let json = JsonFormatter.format_extensions(&set).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["extension"], "ftl");
        assert_eq!(value[1]["result_type"], "freemarker");
    }
}
