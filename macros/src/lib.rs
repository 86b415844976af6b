use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse::Parser, spanned::Spanned};

/// Turn a struct with exactly three component fields into a color model.
///
/// The generated model derives `Clone, Copy, Debug, PartialEq`, gets a
/// `PhantomData` field for every generic tag parameter, a `new` constructor
/// taking the three components in declaration order, `to_components` and a
/// `From<Components>` implementation.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as syn::ItemStruct);
    expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut item: syn::ItemStruct) -> syn::Result<TokenStream2> {
    let components: Vec<syn::Ident> = item
        .fields
        .iter()
        .filter_map(|field| field.ident.clone())
        .collect();

    let [c0, c1, c2] = components.as_slice() else {
        return Err(syn::Error::new(
            item.fields.span(),
            "models must have exactly 3 named fields, one for each component",
        ));
    };

    for field in item.fields.iter_mut() {
        field.vis = syn::Visibility::Public(Default::default());
    }

    item.attrs.extend(syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    })?);

    let markers = add_marker_fields(&mut item)?;

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics #name #ty_generics #where_clause {
            /// Create a new color in this model.
            pub fn new(
                #c0: crate::color::Component,
                #c1: crate::color::Component,
                #c2: crate::color::Component,
            ) -> Self {
                Self {
                    #c0,
                    #c1,
                    #c2,
                    #(#markers: std::marker::PhantomData,)*
                }
            }

            /// The components of this color, in declaration order.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#c0, self.#c1, self.#c2)
            }
        }

        impl #impl_generics From<crate::color::Components> for #name #ty_generics #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    })
}

/// Every type parameter is a zero sized tag, carried by a `_<name>` marker
/// field. Returns the names of the added fields.
fn add_marker_fields(item: &mut syn::ItemStruct) -> syn::Result<Vec<syn::Ident>> {
    let mut tags = Vec::new();
    for param in &item.generics.params {
        match param {
            syn::GenericParam::Type(ty) => tags.push(ty.ident.clone()),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "models only support type parameters",
                ))
            }
        }
    }

    let syn::Fields::Named(named) = &mut item.fields else {
        return Ok(Vec::new());
    };

    let mut markers = Vec::with_capacity(tags.len());
    for tag in tags {
        let marker = syn::Ident::new(
            &format!("_{}", tag.to_string().to_lowercase()),
            Span::call_site(),
        );
        named.named.push(syn::Field::parse_named.parse2(quote! {
            #marker: std::marker::PhantomData<#tag>
        })?);
        markers.push(marker);
    }

    Ok(markers)
}
