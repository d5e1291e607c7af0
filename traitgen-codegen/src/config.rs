//! Generator configuration.

use crate::generator::TESTS_DIR;
use traitgen_schema::{CyclePolicy, ResolveOptions};

/// Default banner placed at the top of every generated file.
pub const DEFAULT_HEADER: &str =
    "# This file auto-generated by `traitgen`.\n# Do not modify this file directly.";

/// Configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub(crate) package_title: String,
    pub(crate) header_comment: String,
    pub(crate) base_module: String,
    pub(crate) base_class: String,
    pub(crate) summarize_help: bool,
    pub(crate) cycle_policy: CyclePolicy,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            package_title: "schema".to_string(),
            header_comment: DEFAULT_HEADER.to_string(),
            base_module: "..baseobject".to_string(),
            base_class: "BaseObject".to_string(),
            summarize_help: true,
            cycle_policy: CyclePolicy::default(),
        }
    }

    /// Sets the title used in the package docstrings.
    #[must_use]
    pub fn package_title(mut self, title: impl Into<String>) -> Self {
        self.package_title = title.into();
        self
    }

    /// Sets the banner placed at the top of every generated file.
    #[must_use]
    pub fn header_comment(mut self, header: impl Into<String>) -> Self {
        self.header_comment = header.into();
        self
    }

    /// Sets the module and class object definitions derive from.
    #[must_use]
    pub fn base_class(mut self, module: impl Into<String>, class: impl Into<String>) -> Self {
        self.base_module = module.into();
        self.base_class = class.into();
        self
    }

    /// Sets whether descriptions are reduced to their first sentence.
    #[must_use]
    pub fn summarize_help(mut self, summarize: bool) -> Self {
        self.summarize_help = summarize;
        self
    }

    /// Sets how reference cycles are handled.
    #[must_use]
    pub fn cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Returns the module names a definition must not map to: the package
    /// index, the tests package and the leaf of the base class module.
    #[must_use]
    pub fn reserved_modules(&self) -> Vec<&str> {
        let base_leaf = self.base_module.trim_start_matches('.');
        let base_leaf = base_leaf.rsplit('.').next().unwrap_or(base_leaf);
        vec!["__init__", TESTS_DIR, base_leaf]
    }

    /// Returns the attribute resolution options.
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            summarize_help: self.summarize_help,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.package_title, "schema");
        assert_eq!(config.base_module, "..baseobject");
        assert_eq!(config.base_class, "BaseObject");
        assert!(config.summarize_help);
        assert_eq!(config.cycle_policy, CyclePolicy::Warn);
        assert!(config.header_comment.starts_with("# This file auto-generated"));
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .package_title("vegalite schema")
            .header_comment("# generated")
            .base_class("..base", "Base")
            .summarize_help(false)
            .cycle_policy(CyclePolicy::Reject);

        assert_eq!(config.package_title, "vegalite schema");
        assert_eq!(config.header_comment, "# generated");
        assert_eq!(config.base_module, "..base");
        assert_eq!(config.base_class, "Base");
        assert!(!config.resolve_options().summarize_help);
        assert_eq!(config.cycle_policy, CyclePolicy::Reject);
    }

    #[test]
    fn test_reserved_modules() {
        assert_eq!(
            GeneratorConfig::default().reserved_modules(),
            vec!["__init__", "tests", "baseobject"]
        );
        assert_eq!(
            GeneratorConfig::new()
                .base_class("..core.base", "Base")
                .reserved_modules(),
            vec!["__init__", "tests", "base"]
        );
    }
}
