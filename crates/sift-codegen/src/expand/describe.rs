use super::Expand;
use crate::schema::{Field, FlagSet};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_describe_body(&self) -> TokenStream {
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        quote! {
            #( #fields; )*
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let sift = &self.sift;
        let ident = &field.ident;
        let name = field.name();
        let attrs = &field.attrs;

        let declare = if attrs.readonly {
            quote!(model.field_readonly(#name, |m| &m.#ident))
        } else {
            quote!(model.field(#name, |m| &m.#ident, |m| &mut m.#ident))
        };

        let roles = self.expand_flags(&attrs.roles, quote!(role), quote!(Role));
        let cache = self.expand_flags(&attrs.cache, quote!(cache), quote!(CacheRole));
        let db = self.expand_flags(&attrs.db, quote!(db), quote!(DbFeature));
        let behavior = self.expand_flags(&attrs.behavior, quote!(behavior), quote!(Behavior));

        let column = attrs.column.as_ref().map(|column| quote!(.column(#column)));

        let format = attrs.format.as_ref().map(|format| {
            let variant = &format.variant;
            quote!(.format(#sift::Format::#variant))
        });

        let relation = attrs.relation.as_ref().map(|relation| {
            let target = &relation.target;
            let references = relation.references.to_string();
            quote!(.relation(#sift::ModelRef::of::<#target>(), #references))
        });

        quote! {
            #declare
                #roles
                #cache
                #db
                #behavior
                #column
                #format
                #relation
        }
    }

    /// `.method(Flags::A | Flags::B)`, or nothing for an empty set.
    fn expand_flags(&self, set: &FlagSet, method: TokenStream, ty: TokenStream) -> TokenStream {
        if set.is_empty() {
            return TokenStream::new();
        }

        let sift = &self.sift;
        let flags = set.flags.iter().map(|flag| quote!(#sift::#ty::#flag));

        quote!(.#method(#( #flags )|*))
    }
}
