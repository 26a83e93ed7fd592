use super::FieldRef;
use crate::stmt::Value;

use indexmap::IndexMap;

/// Property name to value, in field order.
pub type Snapshot = IndexMap<String, Value>;

/// The changed fields of a model, ready for an update command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldsAssignment {
    /// Property name to new value, as constant fields.
    pub fields: IndexMap<String, FieldRef>,

    /// The snapshot the diff was taken against, kept verbatim for audit.
    pub old_values: Option<Snapshot>,
}

impl FieldsAssignment {
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The new value of `name`, if it changed.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).and_then(FieldRef::as_constant)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
