#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod identity;

pub mod query;

pub mod schema;
pub use schema::{Entity, Registry};

pub mod stmt;

pub mod translate;

/// A Result type alias that uses Sift's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
