use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_state_methods(&self) -> TokenStream {
        let Some(state) = &self.model.state else {
            return TokenStream::new();
        };
        let sift = &self.sift;

        quote! {
            fn state(&self) -> #sift::Option<&#sift::EntityState> {
                #sift::Option::Some(&self.#state)
            }

            fn state_mut(&mut self) -> #sift::Option<&mut #sift::EntityState> {
                #sift::Option::Some(&mut self.#state)
            }
        }
    }
}
