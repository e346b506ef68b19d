use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Attribute, Data, DeriveInput, Expr, Fields, Result};

/// The tags of an `#[error(...)]` attribute.
#[derive(Default)]
struct Tags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    /// Reads the tags from the `#[error(...)]` attribute among `attrs`.
    fn parse(ident: &syn::Ident, attrs: &[Attribute]) -> Result<Self> {
        let attr = attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(ident.span(), "missing `#[error(...)]` attribute"))?;

        let mut tags = Tags::default();
        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut tags.message
            } else if meta.path.is_ident("labels") {
                &mut tags.labels
            } else if meta.path.is_ident("help") {
                &mut tags.help
            } else {
                return Err(meta.error("unknown tag, expected `message`, `labels` or `help`"));
            };

            if slot.is_some() {
                return Err(meta.error("duplicate tag"));
            }
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        if tags.message.is_none() {
            return Err(syn::Error::new_spanned(attr, "the `error` attribute requires a `message` tag"));
        }
        Ok(tags)
    }
}

/// Brings each named field of `self` into scope as a local of the same name.
fn bind_fields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(input.ident.span(), "`ErrorKind` can only be derived for structs"));
    };

    let ident = &input.ident;
    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            Ok(quote! {
                #[allow(unused_variables)]
                let #ident { #(#names),* } = self;
            })
        },
        Fields::Unit => Ok(TokenStream::new()),
        Fields::Unnamed(fields) => Err(syn::Error::new(
            fields.span(),
            "`ErrorKind` cannot be derived for tuple structs",
        )),
    }
}

/// Expands `#[derive(ErrorKind)]` on the given struct.
pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let Tags { message, labels, help } = Tags::parse(&input.ident, &input.attrs)?;
    let bindings = bind_fields(&input)?;

    // a kind with no labels still highlights its first span
    let labels = labels.map_or_else(|| quote! { [""] }, |labels| quote! { #labels });
    let help = help.map_or_else(
        || quote! { ::std::option::Option::None },
        |help| quote! { ::std::option::Option::Some(::std::string::ToString::to_string(&(#help))) },
    );

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics algebra_error::ErrorKind for #ident #ty_generics #where_clause {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> algebra_error::ariadne::Report<'a, (&'a str, ::std::ops::Range<usize>)> {
                #bindings
                algebra_error::build_report(src_id, spans, #message, #labels, #help)
            }
        }
    })
}
