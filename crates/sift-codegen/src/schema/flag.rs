use syn::{punctuated::Punctuated, Token};

/// Flag names accepted by one attribute, e.g. `#[role(revision, sequence)]`.
#[derive(Debug)]
pub(crate) struct FlagSet {
    /// Constants on the runtime flag type, upper snake case.
    pub(crate) flags: Vec<syn::Ident>,
}

impl FlagSet {
    pub(crate) fn new() -> Self {
        Self { flags: vec![] }
    }

    /// Parses `#[attr(a, b, ...)]`, accepting only `(name, CONSTANT)` pairs
    /// from `known`.
    pub(crate) fn parse_into(
        &mut self,
        attr: &syn::Attribute,
        known: &[(&str, &str)],
    ) -> syn::Result<()> {
        let idents = attr.parse_args_with(Punctuated::<syn::Ident, Token![,]>::parse_terminated)?;

        for ident in idents {
            self.push(&ident, known)?;
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, ident: &syn::Ident, known: &[(&str, &str)]) -> syn::Result<()> {
        let name = ident.to_string();
        let Some((_, constant)) = known.iter().find(|(n, _)| *n == name) else {
            let expected: Vec<_> = known.iter().map(|(n, _)| *n).collect();
            return Err(syn::Error::new_spanned(
                ident,
                format!("unknown flag `{name}`; expected one of: {}", expected.join(", ")),
            ));
        };

        let constant = syn::Ident::new(constant, ident.span());
        if self.flags.contains(&constant) {
            return Err(syn::Error::new_spanned(ident, format!("duplicate flag `{name}`")));
        }
        self.flags.push(constant);
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

pub(crate) const ROLES: &[(&str, &str)] = &[
    ("primary_key", "PRIMARY_KEY"),
    ("increment", "INCREMENT"),
    ("revision", "REVISION"),
    ("sequence", "SEQUENCE"),
    ("archived", "ARCHIVED"),
    ("isolation", "ISOLATION"),
    ("created_date", "CREATED_DATE"),
    ("created_user", "CREATED_USER"),
    ("updated_date", "UPDATED_DATE"),
    ("updated_user", "UPDATED_USER"),
    ("split_value", "SPLIT_VALUE"),
];

pub(crate) const CACHE_ROLES: &[(&str, &str)] = &[
    ("key", "CACHE_KEY"),
    ("key_prefix", "CACHE_KEY_PREFIX"),
    ("ignore", "IGNORE"),
];

pub(crate) const DB_FEATURES: &[(&str, &str)] = &[
    ("not_fixed_length", "NOT_FIXED_LENGTH"),
    ("not_null", "NOT_NULL"),
    ("has_default", "HAS_DEFAULT"),
];

pub(crate) const BEHAVIORS: &[(&str, &str)] = &[
    ("not_query", "NOT_QUERY"),
    ("not_insert", "NOT_INSERT"),
    ("not_update", "NOT_UPDATE"),
];

/// A default format given as `format = "trim"`.
#[derive(Debug)]
pub(crate) struct FormatName {
    /// `Format` variant
    pub(crate) variant: syn::Ident,
}

const FORMATS: &[(&str, &str)] = &[
    ("trim", "Trim"),
    ("trim_start", "TrimStart"),
    ("trim_end", "TrimEnd"),
    ("char_length", "CharLength"),
    ("upper", "Upper"),
    ("lower", "Lower"),
];

impl FormatName {
    pub(crate) fn from_lit(lit: &syn::LitStr) -> syn::Result<Self> {
        let name = lit.value();
        match FORMATS.iter().find(|(n, _)| *n == name) {
            Some((_, variant)) => Ok(Self {
                variant: syn::Ident::new(variant, lit.span()),
            }),
            None => {
                let expected: Vec<_> = FORMATS.iter().map(|(n, _)| *n).collect();
                Err(syn::Error::new_spanned(
                    lit,
                    format!(
                        "unknown format `{name}`; expected one of: {}",
                        expected.join(", ")
                    ),
                ))
            }
        }
    }
}
