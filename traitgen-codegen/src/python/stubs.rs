//! Test stub generation.
//!
//! Each generated class gets a smoke test that constructs it with no
//! arguments.

use crate::config::GeneratorConfig;
use traitgen_schema::ir::ClassIr;

/// Generator for test stub modules.
pub struct TestStubEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> TestStubEmitter<'a> {
    /// Creates a new test stub emitter.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the test module of a class.
    #[must_use]
    pub fn emit(&self, class: &ClassIr) -> String {
        let mut output = String::new();

        output.push_str(&self.config.header_comment);
        output.push_str("\n\n");
        output.push_str(&format!("from ... import {}\n\n\n", class.name));
        output.push_str(&format!("def {}():\n", class.test_name()));
        output.push_str(&format!("    obj = {}()\n", class.name));
        output.push_str(&format!("    assert isinstance(obj, {})\n", class.name));

        output
    }
}
