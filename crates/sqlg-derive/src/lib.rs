//! Derive macros for sqlg
//!
//! Provides `#[derive(Columns)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod columns;

/// Derive the `Columns` trait for a struct.
///
/// # Example
///
/// ```ignore
/// use sqlg::Columns;
///
/// #[derive(Columns)]
/// #[sqlg(rename_all = "camelCase")]
/// struct User {
///     user_id: i64,
///     #[sqlg(column = "user_name")]
///     name: String,
///     #[sqlg(expr = "COUNT(order_id) AS orders")]
///     orders: i64,
///     #[sqlg(skip)]
///     cached: bool,
/// }
///
/// assert_eq!(User::columns(), vec!["userId", "user_name", "COUNT(order_id) AS orders"]);
/// ```
///
/// # Attributes
///
/// Field level:
/// - `#[sqlg(column = "name")]` - Select a differently named column
/// - `#[sqlg(expr = "...")]` - Select a raw expression instead (wins over `column`)
/// - `#[sqlg(skip)]` - Leave the field out
///
/// Struct level:
/// - `#[sqlg(untagged = "skip")]` - Only select fields with `column` or `expr`
///   (default `"include"` selects every field by name)
/// - `#[sqlg(rename_all = "...")]` - Case rule for untagged field names: `lowercase`,
///   `UPPERCASE`, `snake_case`, `camelCase`, `PascalCase`, `SCREAMING_SNAKE_CASE`, `kebab-case`
#[proc_macro_derive(Columns, attributes(sqlg))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    columns::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
