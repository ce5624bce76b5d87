//! Header generator.
//!
//! Assembles the preamble, the six header sections and the closing
//! namespace from one [`SchemaIr`].

use crate::config::GeneratorConfig;
use crate::cpp::{
    ConstantGenerator, EnumGenerator, RecordGenerator, SetterGenerator, comment_text,
};
use crate::diagnostics::Diagnostic;
use netvars_schema::ir::SchemaIr;

/// Headers the generated code depends on.
const INCLUDES: [&str; 3] = ["array", "string", "cstring"];

/// Generated header text and the diagnostics raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Header text.
    pub text: String,
    /// Non-fatal diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    /// Returns true if any diagnostic was raised.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main code generator.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the complete header.
    ///
    /// Output depends only on the IR and configuration, so regenerating
    /// from the same input is byte-identical.
    #[must_use]
    pub fn generate(&self) -> Generation {
        let mut text = String::new();

        text.push_str(&self.generate_preamble());
        text.push_str(&format!("namespace {} {{\n\n", self.config.namespace));

        text.push_str(&EnumGenerator::new(self.ir).generate());
        text.push_str(&ConstantGenerator::new(self.ir, &self.config.id_namespace).generate());
        text.push_str(&RecordGenerator::new(self.ir).generate());
        text.push_str(&SetterGenerator::new(self.ir).generate());

        text.push_str(&format!("}} // namespace {}\n", self.config.namespace));

        Generation {
            text,
            diagnostics: self.collect_diagnostics(),
        }
    }

    /// Generates the include list and provenance comment.
    fn generate_preamble(&self) -> String {
        let mut output = String::from("#pragma once\n");
        for include in INCLUDES {
            output.push_str(&format!("#include <{}>\n", include));
        }
        output.push_str(&format!(
            "\n// Generated for {} {}\n\n",
            comment_text(&self.ir.client),
            comment_text(&self.ir.version)
        ));
        output
    }

    /// Reports every variable that degraded to opaque storage.
    fn collect_diagnostics(&self) -> Vec<Diagnostic> {
        self.ir
            .unknown_types()
            .map(|var| {
                let diagnostic = Diagnostic::unknown_type(var);
                tracing::warn!("{}", diagnostic);
                diagnostic
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpp::test_ir;

    const DEVICE_X: &str = r#"{"DeviceX": {"v1": {"variables": [
        {"name": "temp", "type": "byte"},
        {"name": "label", "type": "string"}
    ]}}}"#;

    const DEVICE_X_HEADER: &str = r#"#pragma once
#include <array>
#include <string>
#include <cstring>

// Generated for DeviceX v1

namespace netsender {

enum var_type_t {
    BYTE = 0,
    STRING = 1,
};

constexpr const auto VAR_COUNT = 2;

namespace netsender_var {
constexpr const auto VAR_ID_TEMP = "temp";
constexpr const auto VAR_ID_LABEL = "label";
}

constexpr const auto VARIABLES = std::array<const char*, 2>{
    netsender_var::VAR_ID_TEMP,
    netsender_var::VAR_ID_LABEL,
};

struct device_var_state_t {
    char temp;
    char label[64];
};

inline void update_state_member(device_var_state_t& state, int var_index, const std::string& val)
{
    switch (var_index) {
    case 0:
        state.temp = static_cast<char>(std::stoi(val));
        break;
    case 1:
        strncpy(state.label, val.c_str(), sizeof(state.label) - 1);
        break;
    }
}

} // namespace netsender
"#;

    #[test]
    fn test_generate_device_x() {
        let ir = test_ir(DEVICE_X);
        let config = GeneratorConfig::default();
        let generation = Generator::new(&ir, &config).generate();

        assert_eq!(generation.text, DEVICE_X_HEADER);
        assert!(!generation.has_warnings());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let config = GeneratorConfig::default();
        let first = Generator::new(&test_ir(DEVICE_X), &config).generate();
        let second = Generator::new(&test_ir(DEVICE_X), &config).generate();
        assert_eq!(first, second);
    }

    #[test]
    fn test_section_order() {
        let ir = test_ir(DEVICE_X);
        let config = GeneratorConfig::default();
        let text = Generator::new(&ir, &config).generate().text;

        let markers = [
            "#pragma once",
            "// Generated for DeviceX v1",
            "namespace netsender {",
            "enum var_type_t",
            "VAR_COUNT",
            "namespace netsender_var {",
            "VARIABLES",
            "struct device_var_state_t",
            "inline void update_state_member",
            "} // namespace netsender",
        ];
        let positions: Vec<_> = markers
            .iter()
            .map(|m| text.find(m).unwrap_or_else(|| panic!("missing '{m}'")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generate_unknown_type() {
        let ir = test_ir(
            r#"{"DeviceX": {"v1": {"variables": [
                {"name": "temp", "type": "byte"},
                {"name": "ratio", "type": "float"}
            ]}}}"#,
        );
        let config = GeneratorConfig::default();
        let generation = Generator::new(&ir, &config).generate();

        assert!(generation.text.contains("constexpr const auto VAR_ID_RATIO = \"ratio\";"));
        assert!(generation.text.contains("    netsender_var::VAR_ID_RATIO,\n"));
        assert!(generation.text.contains("    void* ratio;\n"));
        assert!(generation.text.contains("    case 1:\n        break;\n"));
        assert_eq!(
            generation.diagnostics,
            vec![Diagnostic::UnknownTypeDegradation {
                index: 1,
                name: "ratio".to_string(),
                declared_type: "float".to_string(),
            }]
        );
    }

    #[test]
    fn test_generate_empty_version() {
        let ir = test_ir(r#"{"d": {"v1": {"variables": []}}}"#);
        let config = GeneratorConfig::default();
        let text = Generator::new(&ir, &config).generate().text;

        assert!(text.contains("enum var_type_t {\n    BYTE = 0,\n    STRING = 1,\n};"));
        assert!(text.contains("VAR_COUNT = 0;"));
        assert!(text.contains("std::array<const char*, 0>{\n};"));
        assert!(text.contains("struct device_var_state_t {\n};"));
        assert!(!text.contains("case"));
    }

    #[test]
    fn test_generate_custom_namespaces() {
        let ir = test_ir(DEVICE_X);
        let config = GeneratorConfig {
            namespace: "device".to_string(),
            id_namespace: "ids".to_string(),
            ..GeneratorConfig::default()
        };
        let text = Generator::new(&ir, &config).generate().text;

        assert!(text.contains("namespace device {\n"));
        assert!(text.contains("namespace ids {\n"));
        assert!(text.contains("    ids::VAR_ID_TEMP,\n"));
        assert!(text.ends_with("} // namespace device\n"));
    }
}
