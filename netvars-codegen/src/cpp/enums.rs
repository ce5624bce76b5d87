//! Type tag enum generation.

use super::ENUM_NAME;
use netvars_schema::ir::SchemaIr;

/// Generator for the type tag enum.
pub struct EnumGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the enum with every canonical tag, used or not.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("enum {} {{\n", ENUM_NAME));
        for tag in self.ir.type_tags() {
            output.push_str(&format!("    {} = {},\n", tag.enumerator(), tag.ordinal()));
        }
        output.push_str("};\n\n");

        output
    }
}
