//! # Spindle
//!
//! Generates Cloud Spanner DDL from typed record definitions: `CREATE TABLE`
//! with interleaved primary keys, `DROP TABLE`, and `CREATE`/`DROP INDEX`.
//!
//! ```ignore
//! use spindle::{Entity, Generator, KeyPart, PrimaryKey, Record};
//!
//! #[derive(Record)]
//! #[rename_all = "PascalCase"]
//! struct Singer {
//!     #[column_name = "ID"]
//!     id: i64,
//!     #[tag(db = "size=1024")]
//!     first_name: Option<String>,
//! }
//!
//! impl Entity for Singer {
//!     fn table_name(&self) -> String {
//!         "Singer".to_string()
//!     }
//!
//!     fn primary_key(&self) -> PrimaryKey {
//!         PrimaryKey::new([KeyPart::asc("ID")])
//!     }
//! }
//!
//! let ddl = Generator::new().create_table(&Singer { id: 0, first_name: None })?;
//! ```

// Lets `#[derive(Record)]` output resolve `::spindle` inside this crate.
extern crate self as spindle;

pub mod config;
pub mod entity;
pub mod error;
pub mod format;
pub mod generator;
pub mod reflect;
pub mod resolve;
pub mod schema;
pub mod tag;
pub mod types;
pub mod walker;

pub use config::GeneratorConfig;
pub use entity::Entity;
pub use error::{Error, Result};
pub use format::{quote, semicolon};
pub use generator::{Generator, GeneratorBuilder};
pub use reflect::{FieldInfo, FieldType, Record, RecordShape, Reflect, TypeInfo};
pub use schema::{Column, Index, KeyPart, PrimaryKey, Table};
pub use spindle_derive::Record;
