use super::key_part::{render_key_parts, KeyPart};
use crate::format::quote;

/// A secondary index declared by a record descriptor.
///
/// `table_name` is not checked against the table generated alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    name: String,
    table_name: String,
    is_unique: bool,
    is_null_filtered: bool,
    key_parts: Vec<KeyPart>,
}

impl Index {
    /// A non-unique index.
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        null_filtered: bool,
        key_parts: impl IntoIterator<Item = KeyPart>,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            is_unique: false,
            is_null_filtered: null_filtered,
            key_parts: key_parts.into_iter().collect(),
        }
    }

    /// A `UNIQUE` index.
    pub fn unique(
        name: impl Into<String>,
        table_name: impl Into<String>,
        null_filtered: bool,
        key_parts: impl IntoIterator<Item = KeyPart>,
    ) -> Self {
        Self {
            is_unique: true,
            ..Self::new(name, table_name, null_filtered, key_parts)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn is_unique(&self) -> bool {
        self.is_unique
    }

    pub fn is_null_filtered(&self) -> bool {
        self.is_null_filtered
    }

    pub fn key_parts(&self) -> &[KeyPart] {
        &self.key_parts
    }

    pub fn create_index_sql(&self) -> String {
        let mut words = vec!["CREATE"];
        if self.is_unique {
            words.push("UNIQUE");
        }
        if self.is_null_filtered {
            words.push("NULL_FILTERED");
        }
        words.push("INDEX");

        format!(
            "{} {} ON {} ({})",
            words.join(" "),
            quote(&self.name),
            quote(&self.table_name),
            render_key_parts(&self.key_parts)
        )
    }

    pub fn drop_index_sql(&self) -> String {
        format!("DROP INDEX {}", quote(&self.name))
    }
}
