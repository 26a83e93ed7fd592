//! Translates typed predicates into condition groups a query planner can
//! lower to SQL or another store's filter syntax.
//!
//! ```
//! use sift::{stmt::{Lambda, Param}, Entity};
//!
//! #[derive(Entity)]
//! struct Order {
//!     #[key]
//!     id: i64,
//!     status: String,
//! }
//!
//! let o = Param::of::<Order>("o");
//! let filter = sift::translate(&Lambda::new([o.clone()], o.member("status").eq("Paid")))?;
//! assert_eq!(filter.len(), 1);
//! # Ok::<(), sift::Error>(())
//! ```

pub use sift_core::{identity, query, schema, stmt, translate::Translator, Error, Result};
pub use sift_core::{bail, err};

pub use sift_core::schema::{EntityState, Registry};
pub use sift_core::translate::{translate, translate_with};

pub use sift_core::schema::Entity;
pub use sift_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use sift_core::{
        query::Format,
        schema::{
            Behavior, CacheRole, DbFeature, Entity, EntityState, ModelBuilder, ModelRef, Role,
        },
    };
    pub use std::option::Option;
}
