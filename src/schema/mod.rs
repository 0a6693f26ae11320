//! In-memory schema model and its DDL rendering.
//!
//! - [`Column`]: one walked field with its resolved type
//! - [`KeyPart`]: a column reference with sort order
//! - [`PrimaryKey`]: key parts plus optional interleave parent
//! - [`Index`]: a secondary index declared by a descriptor
//! - [`Table`]: columns and primary key of one descriptor

pub mod column;
pub mod index;
pub mod key_part;
pub mod primary_key;
pub mod table;

pub use column::Column;
pub use index::Index;
pub use key_part::KeyPart;
pub use primary_key::PrimaryKey;
pub use table::Table;
