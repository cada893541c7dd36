//! Contextual diagnostics collected during validation.
//!
//! Validation never stops at the first problem. Every error and warning is
//! recorded on an [`Issues`] collector together with the [`Context`] active
//! at the time, so a report can say where in the dataset hierarchy each
//! problem lives.
//!
//! Context is scoped: [`Issues::enter`] returns a [`ContextGuard`] that
//! restores the previous context when dropped. Guards borrow the collector
//! mutably, so scopes nest strictly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// A level of the dataset hierarchy that can appear in a diagnostic context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    /// The dataset (root metadata)
    #[serde(rename = "dataset_name")]
    Dataset,
    /// A distribution (file object)
    #[serde(rename = "distribution_name")]
    Distribution,
    /// A record set
    #[serde(rename = "record_set_name")]
    RecordSet,
    /// A field or the parent field of a sub-field
    #[serde(rename = "field_name")]
    Field,
}

impl Scope {
    /// Short label used in rendered reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Distribution => "distribution",
            Self::RecordSet => "record_set",
            Self::Field => "field",
        }
    }
}

/// Ordered mapping from scope to the name currently in effect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context(IndexMap<Scope, String>);

impl Context {
    /// Create an empty context
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Get the name bound to a scope
    #[must_use]
    pub fn get(&self, scope: Scope) -> Option<&str> {
        self.0.get(&scope).map(String::as_str)
    }

    /// Bind a scope, keeping its position if already present
    pub fn set(&mut self, scope: Scope, name: impl Into<String>) {
        self.0.insert(scope, name.into());
    }

    /// Iterate over bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Scope, &str)> {
        self.0.iter().map(|(scope, name)| (*scope, name.as_str()))
    }

    /// Number of bound scopes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no scope is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Scope, S)> for Context {
    fn from_iter<T: IntoIterator<Item = (Scope, S)>>(iter: T) -> Self {
        let mut context = Self::new();
        for (scope, name) in iter {
            context.set(scope, name);
        }
        context
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Empty names (placeholders such as `field_name = ""`) are not shown
        let mut first = true;
        for (scope, name) in self.iter().filter(|(_, name)| !name.is_empty()) {
            if !first {
                write!(f, " > ")?;
            }
            write!(f, "{}({})", scope.label(), name)?;
            first = false;
        }
        Ok(())
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The dataset is invalid
    Error,
    /// Informational, does not invalidate the dataset
    Warning,
}

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Context active when the issue was raised
    pub context: Context,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self.context.to_string();
        if rendered.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "[{}] {}", rendered, self.message)
        }
    }
}

/// Collector of errors and warnings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issues {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
    #[serde(skip)]
    context: Context,
}

impl Issues {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error under the current context
    pub fn add_error(&mut self, message: impl Into<String>) {
        let issue = self.issue(Severity::Error, message.into());
        self.errors.push(issue);
    }

    /// Record a warning under the current context
    pub fn add_warning(&mut self, message: impl Into<String>) {
        let issue = self.issue(Severity::Warning, message.into());
        self.warnings.push(issue);
    }

    fn issue(&self, severity: Severity, message: String) -> Issue {
        Issue {
            severity,
            message,
            context: self.context.clone(),
        }
    }

    /// Enter a scope, binding one or more context names
    ///
    /// The previous context is restored when the returned guard is dropped.
    pub fn enter<I, S>(&mut self, bindings: I) -> ContextGuard<'_>
    where
        I: IntoIterator<Item = (Scope, S)>,
        S: Into<String>,
    {
        let saved = self.context.clone();
        for (scope, name) in bindings {
            self.context.set(scope, name);
        }
        ContextGuard {
            issues: self,
            saved,
        }
    }

    /// Context currently in effect
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Recorded errors, in the order they were raised
    #[must_use]
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    /// Recorded warnings, in the order they were raised
    #[must_use]
    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    /// Check whether any error was recorded
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check whether nothing at all was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Render all issues, errors first, one per line
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        if !self.errors.is_empty() {
            out.push_str(&format!("Found the following {} error(s):\n", self.errors.len()));
            for issue in &self.errors {
                out.push_str(&format!("  - {}\n", issue));
            }
        }
        if !self.warnings.is_empty() {
            out.push_str(&format!(
                "Found the following {} warning(s):\n",
                self.warnings.len()
            ));
            for issue in &self.warnings {
                out.push_str(&format!("  - {}\n", issue));
            }
        }
        out
    }
}

/// Scope guard returned by [`Issues::enter`]
///
/// Dereferences to the collector; dropping it restores the context that was
/// in effect before the scope was entered.
pub struct ContextGuard<'a> {
    issues: &'a mut Issues,
    saved: Context,
}

impl Deref for ContextGuard<'_> {
    type Target = Issues;

    fn deref(&self) -> &Issues {
        self.issues
    }
}

impl DerefMut for ContextGuard<'_> {
    fn deref_mut(&mut self) -> &mut Issues {
        self.issues
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        self.issues.context = std::mem::take(&mut self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_issues_new() {
        let issues = Issues::new();
        assert!(issues.is_empty());
        assert!(!issues.has_errors());
        assert!(issues.context().is_empty());
    }

    #[test]
    fn test_add_error_captures_context() {
        let mut issues = Issues::new();
        {
            let mut scope = issues.enter([(Scope::Dataset, "Titanic")]);
            scope.add_error("boom");
        }
        assert_eq!(issues.errors().len(), 1);
        assert_eq!(issues.errors()[0].context.get(Scope::Dataset), Some("Titanic"));
        assert!(issues.context().is_empty());
    }

    #[test]
    fn test_repeated_issues_kept() {
        let mut issues = Issues::new();
        issues.add_error("same");
        issues.add_error("same");
        issues.add_warning("same");
        assert_eq!(issues.errors().len(), 2);
        assert_eq!(issues.warnings().len(), 1);
    }

    #[test]
    fn test_nested_scopes_restore() {
        let mut issues = Issues::new();
        let mut dataset = issues.enter([(Scope::Dataset, "d")]);
        {
            let mut record_set =
                dataset.enter([(Scope::RecordSet, "r"), (Scope::Field, "")]);
            {
                let mut field = record_set.enter([(Scope::Field, "a")]);
                field.add_error("in a");
            }
            assert_eq!(record_set.context().get(Scope::Field), Some(""));
            record_set.add_error("in r");
        }
        assert_eq!(dataset.context().get(Scope::RecordSet), None);
        assert_eq!(dataset.context().len(), 1);
        drop(dataset);

        let expected: Context = [
            (Scope::Dataset, "d"),
            (Scope::RecordSet, "r"),
            (Scope::Field, "a"),
        ]
        .into_iter()
        .collect();
        assert_eq!(issues.errors()[0].context, expected);
        assert_eq!(issues.errors()[1].context.get(Scope::Field), Some(""));
    }

    #[test]
    fn test_override_keeps_position() {
        let mut context: Context = [(Scope::Dataset, "d"), (Scope::Field, "")]
            .into_iter()
            .collect();
        context.set(Scope::Field, "a");
        let keys: Vec<_> = context.iter().map(|(scope, _)| scope).collect();
        assert_eq!(keys, vec![Scope::Dataset, Scope::Field]);
    }

    #[test]
    fn test_issue_display() {
        let mut issues = Issues::new();
        issues.add_error("no context");
        {
            let mut scope = issues.enter([
                (Scope::Dataset, "Titanic"),
                (Scope::RecordSet, "passengers"),
                (Scope::Field, ""),
            ]);
            scope.add_warning("hmm");
        }
        assert_eq!(issues.errors()[0].to_string(), "no context");
        assert_eq!(
            issues.warnings()[0].to_string(),
            "[dataset(Titanic) > record_set(passengers)] hmm"
        );
    }

    #[test]
    fn test_report() {
        let mut issues = Issues::new();
        assert_eq!(issues.report(), "");
        issues.add_warning("w");
        issues.add_error("e");
        let report = issues.report();
        let error_at = report.find("1 error(s)").unwrap();
        let warning_at = report.find("1 warning(s)").unwrap();
        assert!(error_at < warning_at);
        assert!(report.contains("  - e\n"));
    }

    #[test]
    fn test_serialize_skips_live_context() {
        let mut issues = Issues::new();
        let mut scope = issues.enter([(Scope::Dataset, "d")]);
        scope.add_error("e");
        let json = serde_json::to_value(&*scope).unwrap();
        drop(scope);
        assert!(json.get("context").is_none());
        assert_eq!(json["errors"][0]["severity"], "error");
        assert_eq!(json["errors"][0]["context"]["dataset_name"], "d");
    }

    #[test]
    fn test_context_serializes_name_keys() {
        let context: Context = [
            (Scope::Dataset, "Titanic"),
            (Scope::Distribution, "train.csv"),
            (Scope::RecordSet, "passengers"),
            (Scope::Field, ""),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dataset_name": "Titanic",
                "distribution_name": "train.csv",
                "record_set_name": "passengers",
                "field_name": "",
            })
        );

        let back: Context = serde_json::from_value(json).unwrap();
        assert_eq!(back, context);
    }

    proptest! {
        #[test]
        fn prop_context_restored_after_any_nesting(names in proptest::collection::vec("[a-z]{0,6}", 0..8)) {
            fn descend(issues: &mut Issues, names: &[String]) {
                if let Some((head, rest)) = names.split_first() {
                    let before = issues.context().clone();
                    {
                        let mut scope = issues.enter([(Scope::Field, head.as_str())]);
                        scope.add_error(format!("at {}", head));
                        descend(&mut scope, rest);
                        assert_eq!(scope.context().get(Scope::Field), Some(head.as_str()));
                    }
                    assert_eq!(issues.context(), &before);
                }
            }

            let mut issues = Issues::new();
            descend(&mut issues, &names);
            prop_assert!(issues.context().is_empty());
        }
    }
}
