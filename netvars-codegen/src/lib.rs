//! # NetVars Codegen
//!
//! C++ header generation from device variable registries.
//!
//! This crate provides:
//! - Header generation (type enum, identifier table, state record, setter)
//! - Non-fatal diagnostics for degraded variables
//! - Atomic output writing
//! - The external formatter boundary

pub mod config;
pub mod cpp;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod generator;
pub mod output;

pub use config::GeneratorConfig;
pub use diagnostics::Diagnostic;
pub use error::{CodegenError, FormatError};
pub use format::{Astyle, Formatter, NoopFormatter};
pub use generator::{Generation, Generator};
pub use output::write_atomic;

use netvars_schema::{Registry, SchemaIr};
use std::path::Path;

/// Generates a header from a loaded registry.
///
/// # Errors
/// Returns `CodegenError` if the client cannot be resolved or, in strict
/// mode, if variable names fail validation.
pub fn generate_from_registry(
    registry: &Registry,
    config: &GeneratorConfig,
) -> Result<Generation, CodegenError> {
    let resolved = netvars_schema::resolve(registry, config.client.as_deref())?;
    if config.strict {
        netvars_schema::validate_version(&resolved.entry)?;
    }
    let ir = SchemaIr::from_resolved(&resolved);
    Ok(Generator::new(&ir, config).generate())
}

/// Generates a header from a registry JSON string.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution or validation fails.
pub fn generate_from_json(json: &str, config: &GeneratorConfig) -> Result<Generation, CodegenError> {
    let registry = netvars_schema::parse_registry(json)?;
    generate_from_registry(&registry, config)
}

/// Generates a header from a registry file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution or validation
/// fails.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> Result<Generation, CodegenError> {
    let registry = netvars_schema::parse_registry_file(path)?;
    generate_from_registry(&registry, config)
}

/// Generates a header from `input`, writes it to `output` and formats it.
///
/// Nothing is written if generation fails. A formatter failure is added to
/// the returned diagnostics and the unformatted header stays in place.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_file(
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
    formatter: &dyn Formatter,
) -> Result<Generation, CodegenError> {
    let mut generation = generate_from_file(input, config)?;
    write_atomic(output, &generation.text)?;

    if let Err(e) = formatter.format_file(output) {
        let diagnostic = Diagnostic::formatter(&e);
        tracing::warn!("{}", diagnostic);
        generation.diagnostics.push(diagnostic);
    }

    Ok(generation)
}
