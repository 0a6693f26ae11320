//! Procedural macros for Spindle
//!
//! This crate provides the `Record` derive, which describes a struct's
//! fields (name, raw tags, type) to the Spindle struct walker.

mod attributes;
mod macros;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for `Record` - generates `spindle::Record` and `spindle::FieldType`
///
/// Field attributes:
/// - `#[tag(db = "nullable,size=1024", json = "...")]`: raw tag strings by namespace
/// - `#[column_name = "ID"]`: explicit column name
///
/// Struct attributes:
/// - `#[rename_all = "PascalCase" | "camelCase" | "snake_case"]`
/// - `#[record_name = "..."]`: overrides `Record::NAME`
///
/// A field of type `Box<T>` where `T: Record` contributes `T`'s columns
/// inline.
///
/// ```ignore
/// use spindle::Record;
///
/// #[derive(Record)]
/// #[rename_all = "PascalCase"]
/// struct PlayerComment {
///     #[column_name = "ID"]
///     id: i64,
///     #[tag(db = "nullable, size=99")]
///     comment: String,
///     #[tag(db = "-")]
///     scratch: String,
/// }
/// ```
#[proc_macro_derive(Record, attributes(tag, column_name, rename_all, record_name))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    macros::derive_record(input)
}
