use super::{Accessor, Behavior, CacheRole, DbFeature, ModelRef, Role};
use crate::{query::Format, stmt::Type};

#[derive(Debug, Clone)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// Position in declaration order.
    pub index: usize,

    pub roles: Role,

    pub cache_roles: CacheRole,

    pub db: DbFeature,

    pub behavior: Behavior,

    /// Declared value type. Nullable fields carry their inner type.
    pub ty: Type,

    /// True if the field can be nullable (`None` in Rust).
    pub nullable: bool,

    /// Applied innermost whenever the field is resolved in a predicate.
    pub format: Option<Format>,

    /// The related model and the field this one references there.
    pub relation: Option<(ModelRef, String)>,

    pub accessor: Accessor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl Field {
    /// Gets the property name.
    pub fn name(&self) -> &str {
        &self.name.app_name
    }

    pub fn storage_name(&self) -> &str {
        self.name.storage_name()
    }

    /// Returns `true` only if every bit of `mask` is set on the field.
    pub fn in_role(&self, mask: Role) -> bool {
        self.roles.contains(mask)
    }

    pub fn is_primary_key(&self) -> bool {
        self.in_role(Role::PRIMARY_KEY)
    }

    pub fn is_cache_key(&self) -> bool {
        self.cache_roles.contains(CacheRole::CACHE_KEY)
    }

    /// Primary-key and revision fields are always queryable.
    pub fn is_necessary(&self) -> bool {
        self.in_role(Role::PRIMARY_KEY) || self.in_role(Role::REVISION)
    }

    pub fn is_queryable(&self) -> bool {
        self.is_necessary() || !self.behavior.contains(Behavior::NOT_QUERY)
    }

    pub fn is_editable(&self) -> bool {
        !self.behavior.contains(Behavior::NOT_INSERT)
    }

    pub fn is_updatable(&self) -> bool {
        !self.behavior.contains(Behavior::NOT_UPDATE)
    }
}
