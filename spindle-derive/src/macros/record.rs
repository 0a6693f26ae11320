//! Derive macro for `Record`
//!
//! Generates `spindle::Record` (field metadata in declaration order) and
//! `spindle::FieldType` (so the struct can be embedded in another record).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attributes::{self, RenameRule};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record can only be derived for structs with named fields",
            ));
        }
    };

    let rule = RenameRule::from_attrs(&input.attrs)?;
    let record_name = match attributes::extract_str(&input.attrs, "record_name")? {
        Some(lit) => lit.value(),
        None => struct_name.to_string(),
    };

    let mut field_infos: Vec<TokenStream2> = Vec::with_capacity(fields.len());
    for field in fields {
        let name = attributes::column_name(field, rule)?;
        let tags = attributes::extract_tags(field)?;
        let tag_pairs = tags.iter().map(|(ns, raw)| quote! { (#ns, #raw) });
        let ty = &field.ty;
        field_infos.push(quote! {
            ::spindle::FieldInfo::new(
                #name,
                &[#(#tag_pairs),*],
                <#ty as ::spindle::FieldType>::type_info(),
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::spindle::Record for #struct_name #ty_generics #where_clause {
            const NAME: &'static str = #record_name;

            fn fields() -> ::std::vec::Vec<::spindle::FieldInfo> {
                ::std::vec![#(#field_infos),*]
            }
        }

        impl #impl_generics ::spindle::FieldType for #struct_name #ty_generics #where_clause {
            fn type_info() -> ::spindle::TypeInfo {
                ::spindle::TypeInfo::Record(<Self as ::spindle::Record>::shape())
            }
        }
    })
}
