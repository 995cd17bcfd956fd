//! Implementation of the `#[derive(OptionLike)]` macro.

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, GenericArgument, GenericParam, Generics, Ident, Member, PathArguments,
    Type, WherePredicate, parse_macro_input,
};

/// Main implementation of the `OptionLike` derive macro.
pub fn derive_option_like_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_option_like(&input.ident, &input.generics, &data_struct.fields)
                .unwrap_or_else(syn::Error::into_compile_error)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "OptionLike can only be derived for structs wrapping an Option, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "OptionLike cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_option_like(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
) -> syn::Result<TokenStream2> {
    let payload = payload_parameter(name, generics)?;
    let slot = option_field(name, fields, payload)?;

    let other_members: Vec<Member> = fields
        .members()
        .filter(|member| *member != slot)
        .collect();

    // Fields independent of the payload keep their runtime state on the
    // empty path; fields whose type names the payload cannot be carried over.
    let carried_fields = fields
        .iter()
        .zip(fields.members())
        .filter(|(_, member)| *member != slot)
        .map(|(field, member)| {
            if mentions_parameter(&field.ty, payload) {
                quote!(#member: ::core::default::Default::default())
            } else {
                quote!(#member: ::core::clone::Clone::clone(&self.#member))
            }
        });

    let rebound = format_ident!("__VacantPayload");
    let rebind_arguments = generics.params.iter().map(|parameter| match parameter {
        GenericParam::Type(type_parameter) if type_parameter.ident == *payload => quote!(#rebound),
        GenericParam::Type(type_parameter) => {
            let ident = &type_parameter.ident;
            quote!(#ident)
        }
        GenericParam::Lifetime(lifetime) => {
            let lifetime = &lifetime.lifetime;
            quote!(#lifetime)
        }
        GenericParam::Const(constant) => {
            let ident = &constant.ident;
            quote!(#ident)
        }
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::vacant::nullable::OptionLike for #name #type_generics #where_clause {
            type Inner = #payload;
            type Rebind<#rebound> = #name<#(#rebind_arguments),*>;

            #[inline]
            fn as_present(&self) -> ::core::option::Option<&#payload> {
                ::core::option::Option::as_ref(&self.#slot)
            }

            #[inline]
            fn present(value: #payload) -> Self {
                Self {
                    #slot: ::core::option::Option::Some(value),
                    #(#other_members: ::core::default::Default::default(),)*
                }
            }

            #[inline]
            fn vacant() -> Self {
                Self {
                    #slot: ::core::option::Option::None,
                    #(#other_members: ::core::default::Default::default(),)*
                }
            }

            #[inline]
            fn vacant_like<#rebound>(&self) -> Self::Rebind<#rebound> {
                #name {
                    #slot: ::core::option::Option::None,
                    #(#carried_fields,)*
                }
            }
        }
    })
}

/// Returns the payload parameter: the first type parameter, unbounded.
fn payload_parameter<'a>(name: &Ident, generics: &'a Generics) -> syn::Result<&'a Ident> {
    let Some(payload) = generics.type_params().next() else {
        return Err(syn::Error::new_spanned(
            name,
            "OptionLike requires a type parameter for the payload.",
        ));
    };

    if !payload.bounds.is_empty() {
        return Err(syn::Error::new_spanned(
            payload,
            "the OptionLike payload parameter cannot have bounds; \
             the payload type changes on every mapping.",
        ));
    }

    let bounded_in_where_clause = generics.where_clause.as_ref().is_some_and(|clause| {
        clause.predicates.iter().any(|predicate| {
            matches!(predicate, WherePredicate::Type(bound) if is_parameter(&bound.bounded_ty, &payload.ident))
        })
    });
    if bounded_in_where_clause {
        return Err(syn::Error::new_spanned(
            &generics.where_clause,
            "the OptionLike payload parameter cannot have bounds; \
             the payload type changes on every mapping.",
        ));
    }

    Ok(&payload.ident)
}

/// Finds the single field of type `Option<Payload>`.
fn option_field(name: &Ident, fields: &Fields, payload: &Ident) -> syn::Result<Member> {
    if matches!(fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            name,
            "OptionLike cannot be derived for unit structs.",
        ));
    }

    let mut candidates = fields
        .iter()
        .zip(fields.members())
        .filter(|(field, _)| is_option_of(&field.ty, payload))
        .map(|(_, member)| member);

    match (candidates.next(), candidates.next()) {
        (Some(member), None) => Ok(member),
        (None, _) => Err(syn::Error::new_spanned(
            name,
            format!("OptionLike requires a field of type `Option<{payload}>`."),
        )),
        (Some(_), Some(_)) => Err(syn::Error::new_spanned(
            name,
            format!("OptionLike requires exactly one field of type `Option<{payload}>`."),
        )),
    }
}

/// Returns `true` if `ty` is `Option<parameter>` (optionally path-qualified).
fn is_option_of(ty: &Type, parameter: &Ident) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }
    let Some(last) = type_path.path.segments.last() else {
        return false;
    };
    if last.ident != "Option" {
        return false;
    }
    let PathArguments::AngleBracketed(arguments) = &last.arguments else {
        return false;
    };
    let mut arguments = arguments.args.iter();
    match (arguments.next(), arguments.next()) {
        (Some(GenericArgument::Type(inner)), None) => is_parameter(inner, parameter),
        _ => false,
    }
}

/// Returns `true` if `parameter` appears anywhere inside `ty`.
fn mentions_parameter(ty: &Type, parameter: &Ident) -> bool {
    fn visit(tokens: TokenStream2, parameter: &Ident) -> bool {
        tokens.into_iter().any(|tree| match tree {
            TokenTree::Ident(ident) => ident == *parameter,
            TokenTree::Group(group) => visit(group.stream(), parameter),
            TokenTree::Punct(_) | TokenTree::Literal(_) => false,
        })
    }
    visit(ty.to_token_stream(), parameter)
}

fn is_parameter(ty: &Type, parameter: &Ident) -> bool {
    matches!(ty, Type::Path(type_path) if type_path.qself.is_none() && type_path.path.is_ident(parameter))
}
