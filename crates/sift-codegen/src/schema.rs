mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod flag;
pub(crate) use flag::{FlagSet, FormatName};

mod model;
pub(crate) use model::Model;

mod relation;
pub(crate) use relation::Relation;
