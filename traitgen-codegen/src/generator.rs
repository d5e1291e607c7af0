//! Package generation.
//!
//! Drives a full run: validate the document, classify and resolve every
//! definition in name order, and render one class module plus one test
//! module per definition. The whole package is produced in memory; any
//! error aborts the run before anything is handed to a writer.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::python::{ClassEmitter, IndexEmitter, TestStubEmitter};
use std::path::PathBuf;
use traitgen_schema::ir::ClassIr;
use traitgen_schema::{
    AttributeResolver, SchemaRepository, build_class, validate_reserved_modules, validate_schema,
};

/// Directory of the generated test modules, relative to the package.
pub const TESTS_DIR: &str = "tests";

/// Generated output for one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Module name (lowercased definition name).
    pub module_name: String,
    /// Class name (the definition name).
    pub class_name: String,
    /// Class module source.
    pub class_source: String,
    /// Test module source.
    pub test_source: String,
    /// Imported module names in first-use order.
    pub imports: Vec<String>,
}

impl GeneratedModule {
    /// Returns the class module path relative to the package directory.
    #[must_use]
    pub fn class_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.py", self.module_name))
    }

    /// Returns the test module path relative to the package directory.
    #[must_use]
    pub fn test_path(&self) -> PathBuf {
        PathBuf::from(TESTS_DIR).join(format!("test_{}.py", self.module_name))
    }
}

/// Generated package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPackage {
    /// One module per definition, in definition name order.
    pub modules: Vec<GeneratedModule>,
    /// Package `__init__.py` source.
    pub index_source: String,
    /// Test package `__init__.py` source.
    pub tests_index_source: String,
    /// Reference cycles found during validation.
    pub cycles: Vec<Vec<String>>,
}

impl GeneratedPackage {
    /// Returns every file of the package as `(relative path, contents)`.
    #[must_use]
    pub fn files(&self) -> Vec<(PathBuf, &str)> {
        let mut files = Vec::with_capacity(self.modules.len() * 2 + 2);
        files.push((PathBuf::from("__init__.py"), self.index_source.as_str()));
        files.push((
            PathBuf::from(TESTS_DIR).join("__init__.py"),
            self.tests_index_source.as_str(),
        ));
        for module in &self.modules {
            files.push((module.class_path(), module.class_source.as_str()));
            files.push((module.test_path(), module.test_source.as_str()));
        }
        files
    }

    /// Looks up a generated module by module name.
    #[must_use]
    pub fn module(&self, module_name: &str) -> Option<&GeneratedModule> {
        self.modules.iter().find(|m| m.module_name == module_name)
    }
}

/// Generator for a complete package.
pub struct Generator<'a> {
    repository: &'a SchemaRepository,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(repository: &'a SchemaRepository, config: &'a GeneratorConfig) -> Self {
        Self { repository, config }
    }

    /// Resolves every definition into its class representation.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` for a definition mapping to a reserved
    /// module name, and for the first validation, classification or
    /// resolution error.
    pub fn resolve(&self) -> Result<(Vec<ClassIr>, Vec<Vec<String>>), CodegenError> {
        let document = self.repository.document();
        validate_reserved_modules(document, self.config.reserved_modules())?;
        let cycles = validate_schema(document, self.config.cycle_policy)?;
        let resolver = AttributeResolver::with_options(document, self.config.resolve_options());

        let mut classes = Vec::with_capacity(document.len());
        for entry in self.repository.iterate_definitions() {
            let (_, definition) = entry?;
            classes.push(build_class(&definition, &resolver)?);
        }

        Ok((classes, cycles))
    }

    /// Generates the package.
    ///
    /// # Errors
    /// Returns `CodegenError` if resolution fails or a name cannot be
    /// rendered as Python.
    pub fn generate(&self) -> Result<GeneratedPackage, CodegenError> {
        let (classes, cycles) = self.resolve()?;

        let class_emitter = ClassEmitter::new(self.config);
        let stub_emitter = TestStubEmitter::new(self.config);
        let index_emitter = IndexEmitter::new(self.config);

        let mut modules = Vec::with_capacity(classes.len());
        for class in &classes {
            let module = GeneratedModule {
                module_name: class.module.clone(),
                class_name: class.name.clone(),
                class_source: class_emitter.emit(class)?,
                test_source: stub_emitter.emit(class),
                imports: class.imports.modules(),
            };
            tracing::debug!(module = %module.module_name, "emitted module");
            modules.push(module);
        }

        tracing::info!(
            modules = modules.len(),
            cycles = cycles.len(),
            "generated package"
        );

        Ok(GeneratedPackage {
            index_source: index_emitter.package_index(&classes),
            tests_index_source: index_emitter.tests_index(),
            modules,
            cycles,
        })
    }
}
