//! Package index generation.

use crate::config::GeneratorConfig;
use traitgen_schema::ir::ClassIr;

/// Generator for the package and test package `__init__.py` files.
pub struct IndexEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> IndexEmitter<'a> {
    /// Creates a new index emitter.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the package index listing every class with its module.
    #[must_use]
    pub fn package_index<'c>(&self, classes: impl IntoIterator<Item = &'c ClassIr>) -> String {
        let mut output = format!(
            "\"\"\"Auto-generated Python wrappers for {}\"\"\"\n",
            self.config.package_title
        );
        for class in classes {
            output.push_str(&format!("\nfrom .{} import {}", class.module, class.name));
        }
        output.push('\n');
        output
    }

    /// Generates the test package index.
    #[must_use]
    pub fn tests_index(&self) -> String {
        format!(
            "\"\"\"Auto-generated unit tests for {} wrappers\"\"\"\n",
            self.config.package_title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traitgen_schema::ir::{ClassBody, ImportSet};

    fn class(name: &str) -> ClassIr {
        ClassIr {
            name: name.to_string(),
            module: name.to_lowercase(),
            doc: None,
            body: ClassBody::Text,
            imports: ImportSet::new(),
        }
    }

    #[test]
    fn test_package_index() {
        let config = GeneratorConfig::new().package_title("vegalite schema");
        let classes = [class("AxisConfig"), class("Color")];

        assert_eq!(
            IndexEmitter::new(&config).package_index(&classes),
            "\"\"\"Auto-generated Python wrappers for vegalite schema\"\"\"\n\
             \nfrom .axisconfig import AxisConfig\
             \nfrom .color import Color\n"
        );
    }

    #[test]
    fn test_empty_package_index() {
        let config = GeneratorConfig::default();
        assert_eq!(
            IndexEmitter::new(&config).package_index(&Vec::<ClassIr>::new()),
            "\"\"\"Auto-generated Python wrappers for schema\"\"\"\n\n"
        );
    }

    #[test]
    fn test_tests_index() {
        let config = GeneratorConfig::default();
        assert_eq!(
            IndexEmitter::new(&config).tests_index(),
            "\"\"\"Auto-generated unit tests for schema wrappers\"\"\"\n"
        );
    }
}
