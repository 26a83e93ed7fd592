/// `#[relation(target = Customer, references = id)]`
#[derive(Debug)]
pub(crate) struct Relation {
    /// The related model
    pub(crate) target: syn::Path,

    /// Field of the related model this field joins on
    pub(crate) references: syn::Ident,
}

impl Relation {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        let mut target = None;
        let mut references = None;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("target") {
                if target.is_some() {
                    return Err(meta.error("duplicate `target`"));
                }
                target = Some(meta.value()?.parse::<syn::Path>()?);
            } else if meta.path.is_ident("references") {
                if references.is_some() {
                    return Err(meta.error("duplicate `references`"));
                }
                references = Some(meta.value()?.parse::<syn::Ident>()?);
            } else {
                return Err(meta.error("expected `target` or `references`"));
            }
            Ok(())
        })?;

        match (target, references) {
            (Some(target), Some(references)) => Ok(Self { target, references }),
            (None, _) => Err(syn::Error::new_spanned(attr, "missing `target = <Model>`")),
            (_, None) => Err(syn::Error::new_spanned(
                attr,
                "missing `references = <field>`",
            )),
        }
    }
}
