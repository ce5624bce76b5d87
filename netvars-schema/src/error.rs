//! Error types for registry loading, resolution and validation.

use thiserror::Error;

/// Error type for registry loading, version resolution and validation.
///
/// Every variant is fatal to generation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Input could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not a JSON document.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document does not have the registry shape.
    #[error("invalid registry structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// The top-level object declares no clients.
    #[error("registry declares no clients")]
    NoClients,

    /// A client declares no versions.
    #[error("client '{client}' declares no versions")]
    NoVersions {
        /// Client name.
        client: String,
    },

    /// A version has no `variables` key.
    #[error("version '{version}' of client '{client}' has no 'variables' key")]
    MissingVariables {
        /// Client name.
        client: String,
        /// Version label.
        version: String,
    },

    /// Requested client is not in the registry.
    #[error("client '{client}' not found in registry")]
    ClientNotFound {
        /// Client name.
        client: String,
    },

    /// Two variables would produce the same identifier constant.
    #[error("duplicate variable '{name}' at index {index} (first declared as '{first}')")]
    DuplicateVariable {
        /// Name of the duplicate.
        name: String,
        /// Position of the duplicate.
        index: usize,
        /// Name of the earlier declaration it collides with.
        first: String,
    },

    /// Variable name cannot be used as a C identifier.
    #[error("variable name '{name}' at index {index} is not a valid C identifier")]
    InvalidIdentifier {
        /// Offending name.
        name: String,
        /// Position of the variable.
        index: usize,
    },
}

impl SchemaError {
    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// Error type for the runtime state mirror.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// No setter branch exists for the index.
    #[error("variable index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of variables.
        count: usize,
    },

    /// Value has no leading integer.
    #[error("'{value}' is not an integer")]
    InvalidInteger {
        /// Offending value.
        value: String,
    },

    /// Integer does not fit in a C `int`.
    #[error("'{value}' is out of range for int")]
    IntegerOutOfRange {
        /// Offending value.
        value: String,
    },
}
