//! The portable query model produced by translation.
//!
//! Everything here is a plain value owned by the caller. Rendering format
//! settings and operators into a backend command is the planner's job.

mod condition_group;
pub use condition_group::{ConditionGroup, Entry};

mod connector;
pub use connector::Connector;

mod criterion;
pub use criterion::Criterion;

mod field_ref;
pub use field_ref::{FieldKind, FieldRef, PropertyField};

mod fields_assignment;
pub use fields_assignment::{FieldsAssignment, Snapshot};

mod format;
pub use format::{Format, FormatSetting};

mod operator;
pub use operator::Operator;

mod subquery;
pub use subquery::Subquery;
