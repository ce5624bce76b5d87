//! Registry type definitions and the variable type mapping.
//!
//! This module contains the in-memory registry (clients, versions and
//! variables) and the closed set of variable types together with the
//! storage and parse decisions made for each of them.

use crate::error::{SchemaError, StateError};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Capacity in bytes of a `STRING` slot, terminator included.
pub const STRING_CAPACITY: usize = 64;

/// Longest text a `STRING` slot can hold.
pub const STRING_MAX_LEN: usize = STRING_CAPACITY - 1;

/// Complete device variable registry.
///
/// Clients keep document declaration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    clients: IndexMap<String, ClientSchema>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a client, keeping declaration order.
    pub fn add_client(&mut self, client: ClientSchema) {
        self.clients.insert(client.name.clone(), client);
    }

    /// Looks up a client by name.
    #[must_use]
    pub fn client(&self, name: &str) -> Option<&ClientSchema> {
        self.clients.get(name)
    }

    /// Returns the first declared client.
    #[must_use]
    pub fn first_client(&self) -> Option<&ClientSchema> {
        self.clients.first().map(|(_, client)| client)
    }

    /// Iterates clients in declaration order.
    pub fn clients(&self) -> impl Iterator<Item = &ClientSchema> {
        self.clients.values()
    }

    /// Returns the number of clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns true if the registry has no clients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// One client as declared in the registry.
///
/// Versions are kept as raw JSON in declaration order. Only the version
/// picked by the resolver is checked and parsed.
#[derive(Debug, Clone)]
pub struct ClientSchema {
    /// Client name.
    pub name: String,
    raw: Value,
}

impl ClientSchema {
    /// Creates a client from its raw JSON value.
    #[must_use]
    pub fn new(name: String, raw: Value) -> Self {
        Self { name, raw }
    }

    /// Iterates version labels in declaration order.
    ///
    /// Yields nothing if the client is not a JSON object.
    pub fn version_labels(&self) -> impl Iterator<Item = &str> {
        self.raw
            .as_object()
            .into_iter()
            .flat_map(|versions| versions.keys().map(String::as_str))
    }

    /// Returns the label and raw body of the version declared last.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidStructure` if the client is not an
    /// object, or `SchemaError::NoVersions` if it declares no versions.
    pub fn last_declared(&self) -> Result<(&str, &Value), SchemaError> {
        let versions = self.raw.as_object().ok_or_else(|| {
            SchemaError::structure(format!(
                "client '{}' must be an object of versions",
                self.name
            ))
        })?;

        versions
            .iter()
            .next_back()
            .map(|(label, body)| (label.as_str(), body))
            .ok_or_else(|| SchemaError::NoVersions {
                client: self.name.clone(),
            })
    }
}

/// Variable list of one version.
#[derive(Debug, Clone, Default)]
pub struct VersionEntry {
    /// Variables in input order; the position is the variable index.
    pub variables: Vec<VariableSpec>,
}

impl VersionEntry {
    /// Creates a version entry from an ordered variable list.
    #[must_use]
    pub fn new(variables: Vec<VariableSpec>) -> Self {
        Self { variables }
    }
}

/// One named, typed variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpec {
    /// Variable name.
    pub name: String,
    /// Declared type.
    pub var_type: TypeRef,
}

impl VariableSpec {
    /// Creates a variable declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, var_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            var_type,
        }
    }
}

/// Closed set of recognised variable types.
///
/// Declaration order is the emitted ordinal and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Single-octet integral value.
    Byte,
    /// Bounded text value.
    String,
}

impl TypeTag {
    /// Every tag in canonical order.
    pub const ALL: [TypeTag; 2] = [TypeTag::Byte, TypeTag::String];

    /// Returns the tag's position in the canonical order.
    #[must_use]
    pub fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|tag| *tag == self)
            .unwrap_or_default()
    }

    /// Returns the name used in registry documents.
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::String => "string",
        }
    }

    /// Returns the enumerator name in the emitted enum.
    #[must_use]
    pub const fn enumerator(self) -> &'static str {
        match self {
            Self::Byte => "BYTE",
            Self::String => "STRING",
        }
    }

    /// Parses a registry type name.
    #[must_use]
    pub fn from_schema_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.schema_name() == s)
    }

    /// Returns the storage of a slot of this type.
    #[must_use]
    pub const fn storage(self) -> Storage {
        match self {
            Self::Byte => Storage::Narrow,
            Self::String => Storage::FixedBuffer {
                capacity: STRING_CAPACITY,
            },
        }
    }

    /// Returns how a textual value is written into a slot of this type.
    #[must_use]
    pub const fn parse_strategy(self) -> ParseStrategy {
        match self {
            Self::Byte => ParseStrategy::IntegerNarrow,
            Self::String => ParseStrategy::BoundedCopy {
                max_len: STRING_MAX_LEN,
            },
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

/// Declared type of a variable, known or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Recognised type.
    Known(TypeTag),
    /// Type outside the canonical set, kept verbatim.
    Unknown(String),
}

impl TypeRef {
    /// Classifies a declared type name. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        TypeTag::from_schema_name(s).map_or_else(|| Self::Unknown(s.to_string()), Self::Known)
    }

    /// Returns the type name as declared.
    #[must_use]
    pub fn declared_name(&self) -> &str {
        match self {
            Self::Known(tag) => tag.schema_name(),
            Self::Unknown(name) => name,
        }
    }

    /// Returns true if the type is outside the canonical set.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Maps the type to its ordinal, storage and parse strategy.
    ///
    /// Unknown types degrade to opaque pointer storage with no assignment.
    #[must_use]
    pub fn mapping(&self) -> TypeMapping {
        match self {
            Self::Known(tag) => TypeMapping {
                ordinal: Some(tag.ordinal()),
                storage: tag.storage(),
                parse: tag.parse_strategy(),
            },
            Self::Unknown(_) => TypeMapping {
                ordinal: None,
                storage: Storage::OpaquePointer,
                parse: ParseStrategy::NoAssignment,
            },
        }
    }
}

/// Everything the emitter needs to know about a variable's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    /// Enum ordinal, `None` for unknown types.
    pub ordinal: Option<usize>,
    /// Record field layout.
    pub storage: Storage,
    /// Value assignment behaviour.
    pub parse: ParseStrategy,
}

/// Record field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Single `char`.
    Narrow,
    /// Fixed `char` array.
    FixedBuffer {
        /// Buffer size in bytes, terminator included.
        capacity: usize,
    },
    /// Generic `void*` fallback.
    OpaquePointer,
}

impl Storage {
    /// Returns the C++ element type of the field.
    #[must_use]
    pub const fn cpp_type(self) -> &'static str {
        match self {
            Self::Narrow | Self::FixedBuffer { .. } => "char",
            Self::OpaquePointer => "void*",
        }
    }

    /// Returns the array length, if the field is an array.
    #[must_use]
    pub const fn array_len(self) -> Option<usize> {
        match self {
            Self::FixedBuffer { capacity } => Some(capacity),
            _ => None,
        }
    }
}

/// How a textual value is written into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Parse a leading integer and narrow it to `char`.
    IntegerNarrow,
    /// Copy at most `max_len` bytes and keep the terminator.
    BoundedCopy {
        /// Maximum number of copied bytes.
        max_len: usize,
    },
    /// Nothing is written.
    NoAssignment,
}

impl ParseStrategy {
    /// Applies the strategy to a value the way the generated setter does.
    ///
    /// Returns `Ok(None)` when the strategy performs no write.
    ///
    /// # Errors
    /// Returns `StateError` when an integer value cannot be parsed.
    pub fn apply(self, value: &str) -> Result<Option<SlotValue>, StateError> {
        match self {
            Self::IntegerNarrow => {
                let parsed = parse_leading_int(value)?;
                // static_cast<char> keeps the low octet.
                Ok(Some(SlotValue::Byte(parsed as i8)))
            }
            Self::BoundedCopy { max_len } => {
                let mut buffer = vec![0u8; max_len + 1];
                let source = value.as_bytes();
                let end = source.iter().position(|b| *b == 0).unwrap_or(source.len());
                let copied = end.min(max_len);
                buffer[..copied].copy_from_slice(&source[..copied]);
                Ok(Some(SlotValue::Buffer(buffer)))
            }
            Self::NoAssignment => Ok(None),
        }
    }
}

/// Value held by a record slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    /// Zero-initialised slot.
    Empty,
    /// `char` slot.
    Byte(i8),
    /// Fixed buffer, always terminated.
    Buffer(Vec<u8>),
}

impl SlotValue {
    /// Returns the byte value, if this is a `char` slot.
    #[must_use]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Self::Byte(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the buffer contents up to the terminator.
    #[must_use]
    pub fn as_text(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(buf) => {
                let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
                Some(&buf[..end])
            }
            _ => None,
        }
    }
}

/// Parses like `std::stoi`: leading ASCII whitespace, optional sign, digits,
/// and anything after the digits ignored.
fn parse_leading_int(value: &str) -> Result<i32, StateError> {
    // C isspace(); unlike char::is_ascii_whitespace it includes '\x0b'.
    let trimmed = value.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r']);
    let bytes = trimmed.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        return Err(StateError::InvalidInteger {
            value: value.to_string(),
        });
    }

    trimmed[..sign_len + digits]
        .parse::<i32>()
        .map_err(|_| StateError::IntegerOutOfRange {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_canonical_order() {
        assert_eq!(TypeTag::Byte.ordinal(), 0);
        assert_eq!(TypeTag::String.ordinal(), 1);
        assert_eq!(TypeTag::ALL, [TypeTag::Byte, TypeTag::String]);
    }

    #[test]
    fn test_type_tag_from_schema_name() {
        assert_eq!(TypeTag::from_schema_name("byte"), Some(TypeTag::Byte));
        assert_eq!(TypeTag::from_schema_name("string"), Some(TypeTag::String));
        assert_eq!(TypeTag::from_schema_name("BYTE"), None);
        assert_eq!(TypeTag::from_schema_name("float"), None);
    }

    #[test]
    fn test_type_ref_mapping_known() {
        let byte = TypeRef::parse("byte").mapping();
        assert_eq!(byte.ordinal, Some(0));
        assert_eq!(byte.storage, Storage::Narrow);
        assert_eq!(byte.parse, ParseStrategy::IntegerNarrow);

        let string = TypeRef::parse("string").mapping();
        assert_eq!(string.ordinal, Some(1));
        assert_eq!(string.storage, Storage::FixedBuffer { capacity: 64 });
        assert_eq!(string.parse, ParseStrategy::BoundedCopy { max_len: 63 });
    }

    #[test]
    fn test_type_ref_mapping_unknown() {
        let float = TypeRef::parse("float");
        assert!(float.is_unknown());
        assert_eq!(float.declared_name(), "float");

        let mapping = float.mapping();
        assert_eq!(mapping.ordinal, None);
        assert_eq!(mapping.storage, Storage::OpaquePointer);
        assert_eq!(mapping.parse, ParseStrategy::NoAssignment);
    }

    #[test]
    fn test_storage_cpp_type() {
        assert_eq!(Storage::Narrow.cpp_type(), "char");
        assert_eq!(Storage::FixedBuffer { capacity: 64 }.cpp_type(), "char");
        assert_eq!(Storage::FixedBuffer { capacity: 64 }.array_len(), Some(64));
        assert_eq!(Storage::OpaquePointer.cpp_type(), "void*");
        assert_eq!(Storage::Narrow.array_len(), None);
    }

    #[test]
    fn test_bounded_copy_truncates_64_chars() {
        let value = "a".repeat(64);
        let slot = TypeTag::String
            .parse_strategy()
            .apply(&value)
            .expect("copy never fails")
            .expect("copy writes");

        assert_eq!(slot.as_text().map(<[u8]>::len), Some(63));
        if let SlotValue::Buffer(buf) = &slot {
            assert_eq!(buf.len(), STRING_CAPACITY);
            assert_eq!(buf[63], 0);
        } else {
            panic!("expected buffer slot");
        }
    }

    #[test]
    fn test_bounded_copy_truncates_100_chars() {
        let value: String = (0..100).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let slot = TypeTag::String
            .parse_strategy()
            .apply(&value)
            .expect("copy never fails")
            .expect("copy writes");

        assert_eq!(slot.as_text(), Some(&value.as_bytes()[..63]));
    }

    #[test]
    fn test_bounded_copy_short_value() {
        let slot = TypeTag::String
            .parse_strategy()
            .apply("speaker")
            .expect("copy never fails")
            .expect("copy writes");
        assert_eq!(slot.as_text(), Some(&b"speaker"[..]));
    }

    #[test]
    fn test_integer_narrow() {
        let strategy = TypeTag::Byte.parse_strategy();
        assert_eq!(
            strategy.apply("42").expect("valid"),
            Some(SlotValue::Byte(42))
        );
        assert_eq!(
            strategy.apply("  -7").expect("valid"),
            Some(SlotValue::Byte(-7))
        );
        assert_eq!(
            strategy.apply("12abc").expect("valid"),
            Some(SlotValue::Byte(12))
        );
        // 300 wraps to 44 once narrowed to an octet
        assert_eq!(
            strategy.apply("300").expect("valid"),
            Some(SlotValue::Byte(44))
        );
    }

    #[test]
    fn test_integer_narrow_errors() {
        let strategy = TypeTag::Byte.parse_strategy();
        assert!(matches!(
            strategy.apply("abc"),
            Err(StateError::InvalidInteger { .. })
        ));
        assert!(matches!(
            strategy.apply("-"),
            Err(StateError::InvalidInteger { .. })
        ));
        assert!(matches!(
            strategy.apply("99999999999"),
            Err(StateError::IntegerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_integer_narrow_skips_only_ascii_whitespace() {
        let strategy = TypeTag::Byte.parse_strategy();
        assert_eq!(
            strategy.apply("\t\n\x0b\x0c\r 5").expect("valid"),
            Some(SlotValue::Byte(5))
        );
        // U+00A0 and U+2003 are not isspace() in the C locale.
        assert!(matches!(
            strategy.apply("\u{a0}5"),
            Err(StateError::InvalidInteger { .. })
        ));
        assert!(matches!(
            strategy.apply("\u{2003}5"),
            Err(StateError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_no_assignment() {
        assert_eq!(ParseStrategy::NoAssignment.apply("1.5").expect("noop"), None);
    }

    fn client(json: &str) -> ClientSchema {
        let raw: Value = serde_json::from_str(json).expect("Failed to parse");
        ClientSchema::new("DeviceX".to_string(), raw)
    }

    #[test]
    fn test_client_last_declared() {
        let client = client(r#"{"v10": {"variables": []}, "v9": {"legacy": true}}"#);

        let (label, body) = client.last_declared().expect("has versions");
        assert_eq!(label, "v9");
        assert_eq!(body["legacy"], Value::Bool(true));
        assert_eq!(client.version_labels().collect::<Vec<_>>(), ["v10", "v9"]);
    }

    #[test]
    fn test_client_without_versions() {
        assert!(matches!(
            client("{}").last_declared(),
            Err(SchemaError::NoVersions { client }) if client == "DeviceX"
        ));
        assert!(matches!(
            client("[]").last_declared(),
            Err(SchemaError::InvalidStructure { .. })
        ));
        assert_eq!(client("[]").version_labels().count(), 0);
    }
}
