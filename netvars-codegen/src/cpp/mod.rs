//! C++ header section generators.
//!
//! Each generator renders one or more sections of the header from the same
//! [`netvars_schema::SchemaIr`].

pub mod constants;
pub mod enums;
pub mod records;
pub mod setters;

pub use constants::ConstantGenerator;
pub use enums::EnumGenerator;
pub use records::RecordGenerator;
pub use setters::SetterGenerator;

/// Name of the type tag enum.
pub const ENUM_NAME: &str = "var_type_t";
/// Name of the variable count constant.
pub const COUNT_NAME: &str = "VAR_COUNT";
/// Name of the ordered identifier array.
pub const ARRAY_NAME: &str = "VARIABLES";
/// Name of the state record.
pub const RECORD_NAME: &str = "device_var_state_t";
/// Name of the index-driven setter.
pub const SETTER_NAME: &str = "update_state_member";

/// Renders `s` as a C++ string literal.
#[must_use]
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Flattens `s` so it fits on a single `//` comment line.
#[must_use]
pub fn comment_text(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
pub(crate) fn test_ir(json: &str) -> netvars_schema::SchemaIr {
    let registry = netvars_schema::parse_registry(json).expect("Failed to parse");
    let resolved = netvars_schema::resolve(&registry, None).expect("Failed to resolve");
    netvars_schema::SchemaIr::from_resolved(&resolved)
}
