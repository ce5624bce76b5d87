//! Intermediate representation for code generation.
//!
//! This module flattens a resolved version into one ordered list of
//! variables with their type mapping already decided. Every section of the
//! generated header is projected from this single list so the variable
//! indices stay in step across sections.

use crate::resolver::ResolvedVersion;
use crate::types::{ParseStrategy, Storage, TypeRef, TypeTag};

/// Prefix of the per-variable identifier constants.
pub const IDENTIFIER_PREFIX: &str = "VAR_ID_";

/// Intermediate representation of a resolved version.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Client name.
    pub client: String,
    /// Version label.
    pub version: String,
    /// Variables in index order.
    pub variables: Vec<VariableIr>,
}

impl SchemaIr {
    /// Creates the intermediate representation of a resolved version.
    #[must_use]
    pub fn from_resolved(resolved: &ResolvedVersion<'_>) -> Self {
        let variables = resolved
            .entry
            .variables
            .iter()
            .enumerate()
            .map(|(index, var)| VariableIr::new(index, &var.name, &var.var_type))
            .collect();

        Self {
            client: resolved.client.to_string(),
            version: resolved.version.to_string(),
            variables,
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn count(&self) -> usize {
        self.variables.len()
    }

    /// Returns every type tag in canonical order, used or not.
    #[must_use]
    pub fn type_tags(&self) -> &'static [TypeTag] {
        &TypeTag::ALL
    }

    /// Iterates variables whose type is outside the canonical set.
    pub fn unknown_types(&self) -> impl Iterator<Item = &VariableIr> {
        self.variables.iter().filter(|v| v.var_type.is_unknown())
    }

    /// Gets a variable by name.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&VariableIr> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// Resolved variable information.
#[derive(Debug, Clone)]
pub struct VariableIr {
    /// Position in the version's variable list.
    pub index: usize,
    /// Variable name, also the record field name.
    pub name: String,
    /// Name of the identifier constant.
    pub id_constant: String,
    /// Declared type.
    pub var_type: TypeRef,
    /// Record field layout.
    pub storage: Storage,
    /// Setter behaviour.
    pub parse: ParseStrategy,
}

impl VariableIr {
    /// Creates a resolved variable.
    #[must_use]
    pub fn new(index: usize, name: &str, var_type: &TypeRef) -> Self {
        let mapping = var_type.mapping();
        Self {
            index,
            name: name.to_string(),
            id_constant: format!("{IDENTIFIER_PREFIX}{}", identifier_suffix(name)),
            var_type: var_type.clone(),
            storage: mapping.storage,
            parse: mapping.parse,
        }
    }
}

/// Converts a variable name to its identifier constant suffix.
#[must_use]
pub fn identifier_suffix(name: &str) -> String {
    name.to_uppercase()
}
