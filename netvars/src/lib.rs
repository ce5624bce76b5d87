//! # NetVars
//!
//! Generates C++ device variable headers from versioned JSON registries.
//!
//! ## Quick Start
//!
//! ```ignore
//! use netvars::prelude::*;
//!
//! let generation = generate_from_json(json, &GeneratorConfig::default())?;
//! for diagnostic in &generation.diagnostics {
//!     eprintln!("warning: {diagnostic}");
//! }
//! std::fs::write("netsender_vars.hpp", generation.text)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Registry model, loading, version resolution and validation
//! - [`codegen`] - Header generation, formatting and output

/// Registry model, loading and version resolution.
pub mod schema {
    pub use netvars_schema::*;
}

/// Header generation.
pub mod codegen {
    pub use netvars_codegen::*;
}

/// Commonly used items.
pub mod prelude {
    pub use netvars_codegen::{
        Astyle, Diagnostic, Formatter, Generation, GeneratorConfig, NoopFormatter,
        generate_from_file, generate_from_json, generate_to_file,
    };
    pub use netvars_schema::{Registry, SchemaError, SchemaIr, TypeTag, VarState};
}
