use crate::tac::Operand;
use std::collections::HashMap;

/// Known integer values of variables at the current program point.
///
/// An entry `name -> v` holds if every preceding instruction guarantees that
/// `name` is exactly `v`. Later definitions overwrite or remove the entry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConstantEnvironment {
    values: HashMap<String, i64>,
}

impl ConstantEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Records that `name` now holds `value`.
    pub fn bind(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_owned(), value);
    }

    /// Records that the value of `name` is no longer known.
    pub fn forget(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// Replaces `operand` by its known value, if any.
    pub fn resolve(&self, operand: &Operand) -> Operand {
        match self.get(operand.as_str()) {
            Some(value) => Operand::literal(value),
            None => operand.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
