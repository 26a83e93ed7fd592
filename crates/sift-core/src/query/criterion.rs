use super::{Connector, FieldRef, Operator};

/// A single comparison: operator, one or two fields, and how it joins the
/// entry before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub op: Operator,
    pub left: FieldRef,

    /// Absent for unary operators.
    pub right: Option<FieldRef>,

    pub connector: Connector,
}

impl Criterion {
    pub fn new(op: Operator, left: FieldRef, right: FieldRef) -> Self {
        Self {
            op,
            left,
            right: Some(right),
            connector: Connector::And,
        }
    }

    pub fn unary(op: Operator, left: FieldRef) -> Self {
        debug_assert!(op.is_unary(), "`{op:?}` takes a right field");
        Self {
            op,
            left,
            right: None,
            connector: Connector::And,
        }
    }

    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }

    /// Complements the operator and flips the connector.
    pub fn negate(&mut self) {
        self.op = self.op.complement();
        self.connector = self.connector.flip();
    }
}
