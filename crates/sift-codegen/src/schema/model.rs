use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Model name used in metadata, errors and logs
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type generics
    pub(crate) generics: syn::Generics,

    /// Declared fields, in struct order
    pub(crate) fields: Vec<Field>,

    /// Field holding the `EntityState`: `#[state]`
    pub(crate) state: Option<syn::Ident>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut name = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if name.is_some() {
                        return Err(meta.error("duplicate `name`"));
                    }
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"...\"`"))
                }
            });
            errs.check(res);
        }

        let mut fields = vec![];
        let mut state = None;

        for field in &node.named {
            if let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("state")) {
                if state.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "only one field can be marked #[state]",
                    ));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    state = field.ident.clone();
                }
                continue;
            }

            if let Some(field) = errs.check(Field::from_ast(field)).flatten() {
                fields.push(field);
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            name: name.unwrap_or_else(|| ast.ident.to_string()),
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            fields,
            state,
        })
    }
}
