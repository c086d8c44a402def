//! Convention-based page lookup for actions and their results.
//!
//! Pages live under a *result path* (by default `/WEB-INF/content/`), one
//! directory per namespace. For the action `hello` in namespace `/admin`
//! the lookup tries, in this order:
//!
//! | step          | base path probed                          | kind       |
//! |---------------|-------------------------------------------|------------|
//! | result page   | `/WEB-INF/content/admin/hello-success`    | `Result`   |
//! | action page   | `/WEB-INF/content/admin/hello`            | `Action`   |
//! | index page    | `/WEB-INF/content/admin/hello/index`      | `Index`    |
//!
//! Each step is a full [`PathResolver::find_resource`] scan over the
//! configured extensions. [`ConventionLookup::find_result`] runs the first
//! two steps, [`ConventionLookup::find_action`] the last two.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::extension::{ExtensionSet, DEFAULT_RESULT_TYPE};
use crate::oracle::ResourceOracle;
use crate::path::{CanonicalPath, PathResolver, Resource};

/// Directory that holds convention pages unless configured otherwise.
pub const DEFAULT_RESULT_PATH: &str = "/WEB-INF/content/";

/// Page name probed when an action maps onto a directory.
pub const INDEX_PAGE: &str = "index";

/// Which lookup step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// `<action>-<result code>` page.
    Result,
    /// `<action>` page.
    Action,
    /// `<action>/index` page; callers usually redirect to the directory.
    Index,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result => write!(f, "result"),
            Self::Action => write!(f, "action"),
            Self::Index => write!(f, "index"),
        }
    }
}

/// A page found by a convention lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionMatch<H> {
    /// The step that matched.
    pub kind: MatchKind,
    /// The resource found.
    pub resource: Resource<H>,
    /// Result type registered for the matched extension.
    pub result_type: String,
}

/// Maps actions onto pages below a result path.
///
/// # Examples
///
/// ```
/// use convention::lookup::{ConventionLookup, MatchKind};
/// use convention::oracle::MemoryOracle;
/// use convention::ExtensionSet;
///
/// let oracle = MemoryOracle::new()
///     .with("/WEB-INF/content/admin/hello-input.ftl", "form")
///     .with("/WEB-INF/content/admin/hello.jsp", "page");
/// let lookup = ConventionLookup::new(oracle, ExtensionSet::defaults());
///
/// let input = lookup.find_result("/admin", "hello", "input").unwrap().unwrap();
/// assert_eq!(input.kind, MatchKind::Result);
/// assert_eq!(input.result_type, "freemarker");
///
/// let success = lookup.find_result("/admin", "hello", "success").unwrap().unwrap();
/// assert_eq!(success.kind, MatchKind::Action);
/// assert_eq!(success.resource.path(), "/WEB-INF/content/admin/hello.jsp");
/// ```
#[derive(Debug, Clone)]
pub struct ConventionLookup<O> {
    resolver: PathResolver<O>,
    extensions: ExtensionSet,
    result_path: String,
}

impl<O: ResourceOracle> ConventionLookup<O> {
    /// Create a lookup over `oracle` using [`DEFAULT_RESULT_PATH`].
    pub fn new(oracle: O, extensions: ExtensionSet) -> Self {
        Self {
            resolver: PathResolver::new(oracle),
            extensions,
            result_path: DEFAULT_RESULT_PATH.to_string(),
        }
    }

    /// Use a different result path.
    #[must_use]
    pub fn with_result_path(mut self, result_path: impl Into<String>) -> Self {
        self.result_path = result_path.into();
        self
    }

    /// The configured result path, as given.
    pub fn result_path(&self) -> &str {
        &self.result_path
    }

    /// The extension priority list.
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &PathResolver<O> {
        &self.resolver
    }

    /// Directory prefix for `namespace`, always ending in `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use convention::lookup::ConventionLookup;
    /// use convention::oracle::MemoryOracle;
    /// use convention::ExtensionSet;
    ///
    /// let lookup = ConventionLookup::new(MemoryOracle::<()>::new(), ExtensionSet::defaults());
    /// assert_eq!(lookup.namespace_prefix("").as_str(), "/WEB-INF/content/");
    /// assert_eq!(lookup.namespace_prefix("/").as_str(), "/WEB-INF/content/");
    /// assert_eq!(lookup.namespace_prefix("/admin").as_str(), "/WEB-INF/content/admin/");
    /// ```
    pub fn namespace_prefix(&self, namespace: &str) -> CanonicalPath {
        CanonicalPath::new(&format!("{}/{namespace}/", self.result_path))
    }

    /// Base paths [`find_action`](Self::find_action) tries, in order.
    ///
    /// `<action>`, then `<action>/index`; an empty action name yields only
    /// the namespace's index page.
    pub fn action_steps(&self, namespace: &str, action: &str) -> Vec<(String, MatchKind)> {
        let prefix = self.namespace_prefix(namespace);
        if action.is_empty() {
            return vec![(format!("{prefix}{INDEX_PAGE}"), MatchKind::Index)];
        }
        vec![
            (format!("{prefix}{action}"), MatchKind::Action),
            (format!("{prefix}{action}/{INDEX_PAGE}"), MatchKind::Index),
        ]
    }

    /// Base paths [`find_result`](Self::find_result) tries, in order.
    ///
    /// `<action>-<result_code>`, then `<action>`. An empty result code skips
    /// the first step.
    pub fn result_steps(
        &self,
        namespace: &str,
        action: &str,
        result_code: &str,
    ) -> Vec<(String, MatchKind)> {
        let prefix = self.namespace_prefix(namespace);
        let mut steps = Vec::with_capacity(2);
        if !result_code.is_empty() {
            steps.push((format!("{prefix}{action}-{result_code}"), MatchKind::Result));
        }
        steps.push((format!("{prefix}{action}"), MatchKind::Action));
        steps
    }

    /// Find the page for an action with no result code yet.
    ///
    /// # Errors
    ///
    /// Returns the oracle's error if a probe fails.
    pub fn find_action(
        &self,
        namespace: &str,
        action: &str,
    ) -> Result<Option<ConventionMatch<O::Handle>>> {
        self.first_match(self.action_steps(namespace, action))
    }

    /// Find the page rendering `result_code` for an action, falling back to
    /// the action's own page.
    ///
    /// # Errors
    ///
    /// Returns the oracle's error if a probe fails.
    pub fn find_result(
        &self,
        namespace: &str,
        action: &str,
        result_code: &str,
    ) -> Result<Option<ConventionMatch<O::Handle>>> {
        self.first_match(self.result_steps(namespace, action, result_code))
    }

    fn first_match(
        &self,
        steps: Vec<(String, MatchKind)>,
    ) -> Result<Option<ConventionMatch<O::Handle>>> {
        for (base, kind) in steps {
            if let Some(found) = self.resolve(&base, kind)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn resolve(&self, base: &str, kind: MatchKind) -> Result<Option<ConventionMatch<O::Handle>>> {
        let Some(resource) = self.resolver.find_resource(&self.extensions, base)? else {
            return Ok(None);
        };
        let result_type = self
            .extensions
            .result_type_of(resource.extension().as_str())
            .unwrap_or(DEFAULT_RESULT_TYPE)
            .to_string();
        log::debug!("{kind} page {} rendered by {result_type}", resource.path());
        Ok(Some(ConventionMatch {
            kind,
            resource,
            result_type,
        }))
    }
}
