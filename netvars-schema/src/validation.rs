//! Variable list validation.
//!
//! The loader accepts any well-shaped document. This module checks the
//! properties the emitted header needs to compile: every variable name is a
//! C identifier, and no two names map to the same `VAR_ID_*` constant.

use crate::error::SchemaError;
use crate::ir::identifier_suffix;
use crate::types::VersionEntry;
use std::collections::HashMap;

/// Validates the variables of a resolved version.
///
/// # Errors
/// Returns `SchemaError::InvalidIdentifier` or
/// `SchemaError::DuplicateVariable` on the first offending variable.
pub fn validate_version(entry: &VersionEntry) -> Result<(), SchemaError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (index, var) in entry.variables.iter().enumerate() {
        if !is_c_identifier(&var.name) {
            return Err(SchemaError::InvalidIdentifier {
                name: var.name.clone(),
                index,
            });
        }

        if let Some(first) = seen.insert(identifier_suffix(&var.name), &var.name) {
            return Err(SchemaError::DuplicateVariable {
                name: var.name.clone(),
                index,
                first: first.to_string(),
            });
        }
    }

    Ok(())
}

/// Returns true if `name` is a valid C identifier.
#[must_use]
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
