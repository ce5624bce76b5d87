//! Non-fatal generation diagnostics.

use crate::error::FormatError;
use netvars_schema::VariableIr;
use std::fmt;

/// Condition that did not stop generation but may leave the header
/// incomplete or unformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A variable's type is outside the canonical set: it got `void*`
    /// storage and an empty setter branch.
    UnknownTypeDegradation {
        /// Variable index.
        index: usize,
        /// Variable name.
        name: String,
        /// Type as declared.
        declared_type: String,
    },
    /// The formatting pass failed; the header was left unformatted.
    FormatterWarning {
        /// Failure description.
        message: String,
    },
}

impl Diagnostic {
    /// Creates the degradation diagnostic for a variable.
    #[must_use]
    pub fn unknown_type(var: &VariableIr) -> Self {
        Self::UnknownTypeDegradation {
            index: var.index,
            name: var.name.clone(),
            declared_type: var.var_type.declared_name().to_string(),
        }
    }

    /// Creates a formatter warning.
    #[must_use]
    pub fn formatter(err: &FormatError) -> Self {
        Self::FormatterWarning {
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTypeDegradation {
                index,
                name,
                declared_type,
            } => write!(
                f,
                "variable '{name}' (index {index}) has unknown type '{declared_type}': \
                 stored as void* and never assigned"
            ),
            Self::FormatterWarning { message } => write!(f, "header left unformatted: {message}"),
        }
    }
}
