//! Derive macros for the algebra crates.

mod error_kind;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `algebra_error::ErrorKind` for a unit struct or a struct with named fields.
///
/// The report is described by an `#[error(...)]` attribute:
///
/// ```ignore
/// use algebra_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", name),
///     labels = ["this function"],
///     help = "check the spelling",
/// )]
/// pub struct UnknownFunction {
///     name: String,
/// }
/// ```
///
/// - `message` (required): the headline of the report.
/// - `labels`: an array or other iterable of label texts, paired in order with the spans the
///   error is attached to. Defaults to one unlabelled highlight.
/// - `help`: a note telling the user how to fix the problem.
///
/// Each tag is an expression evaluated with the struct's fields bound by name.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn derive_error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error_kind::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
