//! Index-driven setter generation.

use super::{RECORD_NAME, SETTER_NAME};
use netvars_schema::ir::{SchemaIr, VariableIr};
use netvars_schema::types::ParseStrategy;

/// Generator for the `update_state_member` routine.
pub struct SetterGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> SetterGenerator<'a> {
    /// Creates a new setter generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the setter with one `case` per variable index.
    ///
    /// There is no `default` branch: indices outside `[0, VAR_COUNT)` fall
    /// through the switch untouched.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "inline void {}({}& state, int var_index, const std::string& val)\n{{\n",
            SETTER_NAME, RECORD_NAME
        ));
        output.push_str("    switch (var_index) {\n");
        for var in &self.ir.variables {
            output.push_str(&format!("    case {}:\n", var.index));
            if let Some(statement) = Self::assignment(var) {
                output.push_str(&format!("        {}\n", statement));
            }
            output.push_str("        break;\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Renders the write performed for a variable, if any.
    fn assignment(var: &VariableIr) -> Option<String> {
        let field = format!("state.{}", var.name);
        match var.parse {
            ParseStrategy::IntegerNarrow => Some(format!(
                "{field} = static_cast<{}>(std::stoi(val));",
                var.storage.cpp_type()
            )),
            // The record is zero-initialised, so the last byte stays the
            // terminator.
            ParseStrategy::BoundedCopy { .. } => Some(format!(
                "strncpy({field}, val.c_str(), sizeof({field}) - 1);"
            )),
            ParseStrategy::NoAssignment => None,
        }
    }
}
