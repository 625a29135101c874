use proc_macro::TokenStream;
use quote::quote;

/// Returns true if the type is spelled `Component` (optionally path
/// qualified).
fn is_component(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "Component")
            .unwrap_or(false),
        _ => false,
    }
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Model channels must be named fields.")
        }
        .into();
    };

    // Every channel is public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = named
        .named
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    let all_components = field_types.iter().all(is_component);

    named.named.push(syn::parse_quote! {
        /// The alpha channel of the color, in the range `0..=1`.
        pub alpha: crate::color::Component
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    });

    let struct_name = input.ident.clone();
    let (field1, field2, field3) = (&field_names[0], &field_names[1], &field_names[2]);
    let (type1, type2, type3) = (&field_types[0], &field_types[1], &field_types[2]);

    let from_components = if all_components {
        quote! {
            /// Create a model from generic components and an alpha value.
            pub fn from_components(
                components: crate::color::Components,
                alpha: crate::color::Component,
            ) -> Self {
                Self::new(components.0, components.1, components.2, alpha)
            }
        }
    } else {
        quote! {}
    };

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub fn new(
                #field1: #type1,
                #field2: #type2,
                #field3: #type3,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }

            /// Return the three channels of this model as generic components.
            #[allow(clippy::unnecessary_cast)]
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(
                    self.#field1 as crate::color::Component,
                    self.#field2 as crate::color::Component,
                    self.#field3 as crate::color::Component,
                )
            }

            /// Return a copy of this color with the alpha channel replaced.
            pub fn with_alpha(self, alpha: crate::color::Component) -> Self {
                Self { alpha, ..self }
            }

            #from_components
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
