use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.is_empty() {
        return quote! {
            compile_error!("Models must have named fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = field_names.len();

    // Make sure all the component fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // Add some derives.
    // TODO: Check if the derives are already there.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color having this model.
            pub const fn new(
                #(#field_names: crate::color::Component,)*
            ) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            /// Return the components of this model in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names,)*]
            }

            /// Return a new model with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::color::Component) -> crate::color::Component) -> Self {
                Self {
                    #(#field_names: f(self.#field_names),)*
                }
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self::new(#(value[#indices],)*)
            }
        }

        impl From<#struct_name> for [crate::color::Component; #count] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
