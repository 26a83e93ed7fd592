mod describe;
mod state;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for sift types
    sift: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let sift = &self.sift;
        let model_ident = &self.model.ident;
        let name = &self.model.name;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();
        let describe_body = self.expand_describe_body();
        let state_methods = self.expand_state_methods();

        wrap_in_const(quote! {
            impl #impl_generics #sift::Entity for #model_ident #ty_generics #where_clause {
                fn name() -> &'static str {
                    #name
                }

                fn describe(model: &mut #sift::ModelBuilder<Self>) {
                    #describe_body
                }

                #state_methods
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        sift: quote!(_sift::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sift as _sift;
            #code
        };
    }
}
