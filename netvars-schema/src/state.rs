//! Rust mirror of the generated device state record.
//!
//! [`VarState`] holds one slot per variable and applies values through the
//! same index-driven dispatch as the generated `update_state_member`, so the
//! index contract between `VARIABLES` and the setter can be exercised
//! without a C++ toolchain.

use crate::error::StateError;
use crate::ir::SchemaIr;
use crate::types::{ParseStrategy, SlotValue};
use std::collections::HashMap;

/// Device variable state, one zero-initialised slot per variable.
#[derive(Debug, Clone)]
pub struct VarState {
    names: Vec<String>,
    strategies: Vec<ParseStrategy>,
    slots: Vec<SlotValue>,
}

impl VarState {
    /// Creates a zeroed state for the variables of `ir`.
    #[must_use]
    pub fn new(ir: &SchemaIr) -> Self {
        Self {
            names: ir.variables.iter().map(|v| v.name.clone()).collect(),
            strategies: ir.variables.iter().map(|v| v.parse).collect(),
            slots: vec![SlotValue::Empty; ir.count()],
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` into the slot at `index`.
    ///
    /// # Errors
    /// Returns `StateError::IndexOutOfRange` for an index with no setter
    /// branch, or a parse error from the slot's strategy.
    pub fn update_member(&mut self, index: usize, value: &str) -> Result<(), StateError> {
        let strategy = *self
            .strategies
            .get(index)
            .ok_or(StateError::IndexOutOfRange {
                index,
                count: self.count(),
            })?;

        if let Some(slot) = strategy.apply(value)? {
            self.slots[index] = slot;
        }
        Ok(())
    }

    /// Applies values keyed `"<device_id>.<name>"`, as the device firmware
    /// does after polling its variables.
    ///
    /// Variables with no value are left untouched. Returns the number of
    /// slots updated.
    ///
    /// # Errors
    /// Returns the first parse error encountered.
    pub fn apply_remote(
        &mut self,
        device_id: &str,
        values: &HashMap<String, String>,
    ) -> Result<usize, StateError> {
        let mut updated = 0;
        for index in 0..self.count() {
            let key = format!("{device_id}.{}", self.names[index]);
            if let Some(value) = values.get(&key) {
                self.update_member(index, value)?;
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Gets a slot by variable name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|index| &self.slots[index])
    }

    /// Gets a slot by index.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&SlotValue> {
        self.slots.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_registry;
    use crate::resolver::resolve;

    fn device_x() -> VarState {
        let registry = parse_registry(
            r#"{"DeviceX": {"v1": {"variables": [
                {"name": "temp", "type": "byte"},
                {"name": "label", "type": "string"},
                {"name": "ratio", "type": "float"}
            ]}}}"#,
        )
        .expect("Failed to parse");
        let resolved = resolve(&registry, None).expect("Failed to resolve");
        VarState::new(&SchemaIr::from_resolved(&resolved))
    }

    #[test]
    fn test_new_state_is_zeroed() {
        let state = device_x();
        assert_eq!(state.count(), 3);
        assert!((0..3).all(|i| state.slot(i) == Some(&SlotValue::Empty)));
    }

    #[test]
    fn test_update_member_by_index() {
        let mut state = device_x();
        state.update_member(0, "21").expect("byte update");
        state.update_member(1, "kitchen").expect("string update");

        assert_eq!(state.get("temp").and_then(SlotValue::as_byte), Some(21));
        assert_eq!(
            state.get("label").and_then(SlotValue::as_text),
            Some(&b"kitchen"[..])
        );
    }

    #[test]
    fn test_update_member_truncates_long_text() {
        let mut state = device_x();
        state.update_member(1, &"x".repeat(100)).expect("string update");
        assert_eq!(
            state.get("label").and_then(SlotValue::as_text).map(<[u8]>::len),
            Some(63)
        );
    }

    #[test]
    fn test_update_member_unknown_type_writes_nothing() {
        let mut state = device_x();
        state.update_member(2, "0.5").expect("no-op update");
        assert_eq!(state.get("ratio"), Some(&SlotValue::Empty));
    }

    #[test]
    fn test_update_member_out_of_range() {
        let mut state = device_x();
        assert_eq!(
            state.update_member(3, "1"),
            Err(StateError::IndexOutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn test_apply_remote() {
        let mut state = device_x();
        let values: HashMap<String, String> = [
            ("0a:1b:2c:3d:4e:5f.temp", "7"),
            ("0a:1b:2c:3d:4e:5f.label", "porch"),
            ("ff:ff:ff:ff:ff:ff.temp", "99"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let updated = state
            .apply_remote("0a:1b:2c:3d:4e:5f", &values)
            .expect("apply");
        assert_eq!(updated, 2);
        assert_eq!(state.get("temp").and_then(SlotValue::as_byte), Some(7));
    }

    #[test]
    fn test_apply_remote_bad_integer() {
        let mut state = device_x();
        let values = HashMap::from([("dev.temp".to_string(), "warm".to_string())]);
        assert!(matches!(
            state.apply_remote("dev", &values),
            Err(StateError::InvalidInteger { .. })
        ));
    }
}
