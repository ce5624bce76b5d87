//! Version resolution.
//!
//! The version used for generation is always the one declared last in the
//! registry document. Labels are never compared, so `"v9"` declared after
//! `"v10"` wins even though it sorts lower. Only the picked client and
//! version are shape-checked; other clients and earlier versions may hold
//! anything.

use crate::error::SchemaError;
use crate::parser::parse_version;
use crate::types::{Registry, VersionEntry};

/// The single version picked for generation.
#[derive(Debug, Clone)]
pub struct ResolvedVersion<'a> {
    /// Client name.
    pub client: &'a str,
    /// Version label.
    pub version: &'a str,
    /// Variables of the version.
    pub entry: VersionEntry,
}

/// Resolves the client and version to generate for.
///
/// # Arguments
/// * `registry` - Loaded registry
/// * `client` - Client name, or `None` for the first declared client
///
/// # Errors
/// Returns `SchemaError::ClientNotFound` for an unknown client name,
/// `SchemaError::NoClients` for an empty registry, `SchemaError::NoVersions`
/// if the client declares no versions, and `SchemaError::MissingVariables`
/// or `SchemaError::InvalidStructure` if the last declared version is
/// malformed.
pub fn resolve<'a>(
    registry: &'a Registry,
    client: Option<&str>,
) -> Result<ResolvedVersion<'a>, SchemaError> {
    let schema = match client {
        Some(name) => registry
            .client(name)
            .ok_or_else(|| SchemaError::ClientNotFound {
                client: name.to_string(),
            })?,
        None => registry.first_client().ok_or(SchemaError::NoClients)?,
    };

    let (version, raw) = schema.last_declared()?;
    let entry = parse_version(&schema.name, version, raw)?;

    tracing::info!(
        client = %schema.name,
        version,
        variables = entry.variables.len(),
        "resolved registry version"
    );

    Ok(ResolvedVersion {
        client: &schema.name,
        version,
        entry,
    })
}
