use super::{
    flag::{BEHAVIORS, CACHE_ROLES, DB_FEATURES, ROLES},
    ErrorSet, FlagSet, FormatName, Relation,
};

#[derive(Debug)]
pub(crate) struct Field {
    /// Struct field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// `#[key]` and `#[role(...)]`
    pub(crate) roles: FlagSet,

    /// `#[cache(...)]`
    pub(crate) cache: FlagSet,

    /// `#[db(...)]`
    pub(crate) db: FlagSet,

    /// Behavior flags from `#[field(...)]`
    pub(crate) behavior: FlagSet,

    /// Storage name override: `#[column("name")]`
    pub(crate) column: Option<syn::LitStr>,

    /// Default format: `#[field(format = "trim")]`
    pub(crate) format: Option<FormatName>,

    pub(crate) relation: Option<Relation>,

    /// `#[field(readonly)]`: declared without a setter
    pub(crate) readonly: bool,
}

impl Field {
    /// Returns `None` for fields marked `#[field(skip)]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            roles: FlagSet::new(),
            cache: FlagSet::new(),
            db: FlagSet::new(),
            behavior: FlagSet::new(),
            column: None,
            format: None,
            relation: None,
            readonly: false,
        };
        let mut key = false;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    key = true;
                    if let Err(err) = attr.meta.require_path_only() {
                        errs.push(err);
                    }
                    let primary_key = syn::Ident::new("primary_key", ident.span());
                    errs.check(attrs.roles.push(&primary_key, ROLES));
                }
            } else if attr.path().is_ident("role") {
                errs.check(attrs.roles.parse_into(attr, ROLES));
            } else if attr.path().is_ident("cache") {
                errs.check(attrs.cache.parse_into(attr, CACHE_ROLES));
            } else if attr.path().is_ident("db") {
                errs.check(attrs.db.parse_into(attr, DB_FEATURES));
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(attr.parse_args());
                }
            } else if attr.path().is_ident("relation") {
                if attrs.relation.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[relation] attribute",
                    ));
                } else {
                    attrs.relation = errs.check(Relation::from_ast(attr));
                }
            } else if attr.path().is_ident("field") {
                let res = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        skip = true;
                    } else if meta.path.is_ident("readonly") {
                        attrs.readonly = true;
                    } else if meta.path.is_ident("format") {
                        if attrs.format.is_some() {
                            return Err(meta.error("duplicate `format`"));
                        }
                        let lit: syn::LitStr = meta.value()?.parse()?;
                        attrs.format = Some(FormatName::from_lit(&lit)?);
                    } else if let Some(ident) = meta.path.get_ident() {
                        attrs.behavior.push(ident, BEHAVIORS)?;
                    } else {
                        return Err(meta.error("unsupported field option"));
                    }
                    Ok(())
                });
                errs.check(res);
            }
        }

        if skip {
            return match errs.collect() {
                Some(err) => Err(err),
                None => Ok(None),
            };
        }

        // A field without a setter can never be written by an update
        if attrs.readonly && !attrs.behavior.flags.iter().any(|flag| *flag == "NOT_UPDATE") {
            attrs
                .behavior
                .flags
                .push(syn::Ident::new("NOT_UPDATE", ident.span()));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Some(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        }))
    }

    /// The property name used in predicates and metadata.
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
    }
}
