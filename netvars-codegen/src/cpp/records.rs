//! State record generation.

use super::RECORD_NAME;
use netvars_schema::ir::{SchemaIr, VariableIr};

/// Generator for the state record.
pub struct RecordGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the record with one field per variable.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("struct {} {{\n", RECORD_NAME));
        for var in &self.ir.variables {
            output.push_str(&format!("    {};\n", Self::field_declaration(var)));
        }
        output.push_str("};\n\n");

        output
    }

    /// Renders the declaration of a variable's field.
    fn field_declaration(var: &VariableIr) -> String {
        match var.storage.array_len() {
            Some(len) => format!("{} {}[{}]", var.storage.cpp_type(), var.name, len),
            None => format!("{} {}", var.storage.cpp_type(), var.name),
        }
    }
}
