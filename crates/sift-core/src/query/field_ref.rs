use super::{Format, FormatSetting, Subquery};
use crate::{schema::ModelRef, stmt::Value};

/// What a criterion compares: a model property, a literal, or a nested
/// query, optionally transformed by a chain of format settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRef {
    pub kind: FieldKind,

    /// Innermost setting first.
    pub format: Option<Box<FormatSetting>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Property(PropertyField),
    Constant(Value),
    Subquery(Box<Subquery>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyField {
    pub model: ModelRef,
    pub name: String,

    /// Index of the lambda parameter the property was read from.
    pub position: usize,
}

impl FieldRef {
    pub fn property(model: ModelRef, name: impl Into<String>, position: usize) -> Self {
        FieldKind::Property(PropertyField {
            model,
            name: name.into(),
            position,
        })
        .into()
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        FieldKind::Constant(value.into()).into()
    }

    pub fn subquery(subquery: Subquery) -> Self {
        FieldKind::Subquery(Box::new(subquery)).into()
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, FieldKind::Property(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.kind, FieldKind::Constant(_))
    }

    pub fn as_property(&self) -> Option<&PropertyField> {
        match &self.kind {
            FieldKind::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Value> {
        match &self.kind {
            FieldKind::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Appends `format` as the new outermost setting.
    pub fn push_format(&mut self, format: Format, operand: Option<FieldRef>) {
        let setting = FormatSetting::new(format, operand);
        match &mut self.format {
            Some(inner) => inner.push_outer(setting),
            None => self.format = Some(Box::new(setting)),
        }
    }

    pub fn with_format(mut self, format: Format, operand: Option<FieldRef>) -> Self {
        self.push_format(format, operand);
        self
    }

    /// Iterates the format chain innermost first.
    pub fn formats(&self) -> impl Iterator<Item = &FormatSetting> {
        let mut next = self.format.as_deref();
        core::iter::from_fn(move || {
            let setting = next?;
            next = setting.next.as_deref();
            Some(setting)
        })
    }

    pub fn has_format(&self) -> bool {
        self.format.is_some()
    }
}

impl From<FieldKind> for FieldRef {
    fn from(kind: FieldKind) -> Self {
        Self { kind, format: None }
    }
}
