//! The record descriptor consumed by the generator.

use crate::reflect::Reflect;
use crate::schema::{Index, PrimaryKey};

/// A record that maps onto one table.
///
/// Field metadata comes from [`Reflect`], which every `#[derive(Record)]`
/// type gets for free; the rest is declared by hand.
///
/// ```ignore
/// impl Entity for User {
///     fn table_name(&self) -> String {
///         "User".to_string()
///     }
///
///     fn primary_key(&self) -> PrimaryKey {
///         PrimaryKey::new([KeyPart::asc("ID")])
///     }
/// }
/// ```
pub trait Entity: Reflect {
    fn table_name(&self) -> String;

    fn primary_key(&self) -> PrimaryKey;

    fn indexes(&self) -> Vec<Index> {
        Vec::new()
    }
}
