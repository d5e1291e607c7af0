//! Writes a generated package to disk.

use crate::error::CodegenError;
use crate::generator::{GeneratedPackage, TESTS_DIR};
use std::path::Path;

/// Writes every file of a package under `dir`.
///
/// Creates `dir` and its tests directory when missing and overwrites
/// existing files with the same names.
///
/// # Returns
/// The number of files written.
///
/// # Errors
/// Returns `CodegenError::Generation` if `dir` exists but is not a
/// directory, and `CodegenError::Io` if a directory or file cannot be
/// written.
pub fn write_package(package: &GeneratedPackage, dir: &Path) -> Result<usize, CodegenError> {
    if dir.exists() && !dir.is_dir() {
        return Err(CodegenError::generation(format!(
            "output path {} is not a directory",
            dir.display()
        )));
    }

    tracing::info!(dir = %dir.display(), "writing Python wrappers");
    std::fs::create_dir_all(dir.join(TESTS_DIR))?;

    let files = package.files();
    for (relative, contents) in &files {
        let path = dir.join(relative);
        tracing::debug!(path = %path.display(), "writing file");
        std::fs::write(&path, contents)?;
    }

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::Generator;
    use traitgen_schema::SchemaRepository;

    #[test]
    fn test_write_package() {
        let repository = SchemaRepository::from_json(
            r#"{"definitions": {"Color": {"type": "string", "enum": ["red"]}}}"#,
        )
        .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let package = Generator::new(&repository, &config)
            .generate()
            .expect("Failed to generate");

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("_generated");
        let written = write_package(&package, &out).expect("Failed to write");

        assert_eq!(written, 4);
        assert!(out.join("__init__.py").is_file());
        assert!(out.join("tests").join("__init__.py").is_file());
        let color = std::fs::read_to_string(out.join("color.py")).expect("Failed to read");
        assert_eq!(color, package.modules[0].class_source);
        assert!(out.join("tests").join("test_color.py").is_file());
    }

    #[test]
    fn test_write_package_into_file_path() {
        let repository =
            SchemaRepository::from_json(r#"{"definitions": {"Label": {"type": "string"}}}"#)
                .expect("Failed to parse");
        let config = GeneratorConfig::default();
        let package = Generator::new(&repository, &config)
            .generate()
            .expect("Failed to generate");

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("occupied");
        std::fs::write(&file, "").expect("Failed to write");

        let result = write_package(&package, &file);
        assert!(matches!(result, Err(CodegenError::Generation { .. })));
    }
}
