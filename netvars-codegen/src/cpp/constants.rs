//! Count constant, identifier table and identifier array generation.

use super::{ARRAY_NAME, COUNT_NAME, string_literal};
use netvars_schema::ir::SchemaIr;

/// Generator for the sections naming the variables.
pub struct ConstantGenerator<'a> {
    ir: &'a SchemaIr,
    id_namespace: &'a str,
}

impl<'a> ConstantGenerator<'a> {
    /// Creates a new constant generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, id_namespace: &'a str) -> Self {
        Self { ir, id_namespace }
    }

    /// Generates the count constant, identifier table and array.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.generate_count();
        output.push_str(&self.generate_identifiers());
        output.push_str(&self.generate_array());
        output
    }

    /// Generates the variable count constant.
    #[must_use]
    pub fn generate_count(&self) -> String {
        format!(
            "constexpr const auto {} = {};\n\n",
            COUNT_NAME,
            self.ir.count()
        )
    }

    /// Generates one `VAR_ID_*` constant per variable.
    #[must_use]
    pub fn generate_identifiers(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("namespace {} {{\n", self.id_namespace));
        for var in &self.ir.variables {
            output.push_str(&format!(
                "constexpr const auto {} = {};\n",
                var.id_constant,
                string_literal(&var.name)
            ));
        }
        output.push_str("}\n\n");

        output
    }

    /// Generates the index-to-name array.
    ///
    /// The element type and size are spelled out so an empty list still
    /// compiles.
    #[must_use]
    pub fn generate_array(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "constexpr const auto {} = std::array<const char*, {}>{{\n",
            ARRAY_NAME,
            self.ir.count()
        ));
        for var in &self.ir.variables {
            output.push_str(&format!("    {}::{},\n", self.id_namespace, var.id_constant));
        }
        output.push_str("};\n\n");

        output
    }
}
