//! # NetVars Schema
//!
//! Device variable registry model and loader.
//!
//! This crate provides:
//! - JSON registry parsing that keeps declaration order
//! - Version resolution (last declared version wins)
//! - The closed variable type set and its storage/parse mapping
//! - Validation of variable names
//! - Intermediate representation for code generation
//! - A Rust mirror of the generated state record

pub mod error;
pub mod ir;
pub mod parser;
pub mod resolver;
pub mod state;
pub mod types;
pub mod validation;

pub use error::{SchemaError, StateError};
pub use ir::{SchemaIr, VariableIr};
pub use parser::{parse_registry, parse_registry_file};
pub use resolver::{ResolvedVersion, resolve};
pub use state::VarState;
pub use types::{
    ClientSchema, ParseStrategy, Registry, SlotValue, Storage, TypeMapping, TypeRef, TypeTag,
    VariableSpec, VersionEntry,
};
pub use validation::validate_version;
