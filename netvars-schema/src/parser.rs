//! Registry document parser.
//!
//! This module turns a JSON registry document into the in-memory
//! [`Registry`]. Loading only checks that the document is an object with at
//! least one client. The shape of a client's versions is checked by
//! [`crate::resolver`], and only for the version it picks, through
//! [`parse_version`]. Variable name uniqueness is left to
//! [`crate::validation`], and unrecognised type names load as
//! [`TypeRef::Unknown`] for the type mapper to deal with.

use crate::error::SchemaError;
use crate::types::{ClientSchema, Registry, TypeRef, VariableSpec, VersionEntry};
use serde_json::{Map, Value};
use std::path::Path;

/// Key holding a version's variable list.
pub const VARIABLES_KEY: &str = "variables";

/// Parses a registry from a JSON string.
///
/// # Arguments
/// * `json` - Registry document content
///
/// # Returns
/// Parsed registry or schema error.
///
/// # Errors
/// Returns `SchemaError` if the document is not JSON, is not an object, or
/// declares no clients.
pub fn parse_registry(json: &str) -> Result<Registry, SchemaError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(clients) = document else {
        return Err(SchemaError::structure("top level must be an object of clients"));
    };

    if clients.is_empty() {
        return Err(SchemaError::NoClients);
    }

    let mut registry = Registry::new();
    for (name, value) in clients {
        registry.add_client(ClientSchema::new(name, value));
    }

    tracing::debug!(clients = registry.len(), "registry loaded");

    Ok(registry)
}

/// Reads and parses a registry file.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be read or parsed.
pub fn parse_registry_file(path: &Path) -> Result<Registry, SchemaError> {
    let json = std::fs::read_to_string(path)?;
    parse_registry(&json)
}

/// Parses one version object into its variable list.
///
/// # Errors
/// Returns `SchemaError::MissingVariables` if the version has no
/// `variables` key, or `SchemaError::InvalidStructure` if the version or its
/// variables are not shaped as expected.
pub(crate) fn parse_version(client: &str, label: &str, value: &Value) -> Result<VersionEntry, SchemaError> {
    let object = value.as_object().ok_or_else(|| {
        SchemaError::structure(format!(
            "version '{label}' of client '{client}' must be an object"
        ))
    })?;

    let variables = object
        .get(VARIABLES_KEY)
        .ok_or_else(|| SchemaError::MissingVariables {
            client: client.to_string(),
            version: label.to_string(),
        })?
        .as_array()
        .ok_or_else(|| {
            SchemaError::structure(format!(
                "'{VARIABLES_KEY}' of version '{label}' must be an array"
            ))
        })?;

    let variables = variables
        .iter()
        .enumerate()
        .map(|(index, var)| parse_variable(label, index, var))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VersionEntry::new(variables))
}

/// Parses one variable declaration.
fn parse_variable(label: &str, index: usize, value: &Value) -> Result<VariableSpec, SchemaError> {
    let object = value.as_object().ok_or_else(|| {
        SchemaError::structure(format!(
            "variable {index} of version '{label}' must be an object"
        ))
    })?;

    let name = string_member(object, "name", label, index)?;
    let var_type = string_member(object, "type", label, index)?;

    Ok(VariableSpec::new(name, TypeRef::parse(var_type)))
}

/// Gets a required string member of a variable object.
fn string_member<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    label: &str,
    index: usize,
) -> Result<&'a str, SchemaError> {
    object.get(key).and_then(Value::as_str).ok_or_else(|| {
        SchemaError::structure(format!(
            "variable {index} of version '{label}' needs a string '{key}'"
        ))
    })
}
