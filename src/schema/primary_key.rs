use std::fmt;

use super::key_part::{render_key_parts, KeyPart};
use crate::format::quote;

/// Primary key of a table, optionally interleaved in a parent table.
///
/// An empty key part list is a caller error; it renders `PRIMARY KEY ()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimaryKey {
    key_parts: Vec<KeyPart>,
    interleave_parent: Option<String>,
}

impl PrimaryKey {
    pub fn new(key_parts: impl IntoIterator<Item = KeyPart>) -> Self {
        Self {
            key_parts: key_parts.into_iter().collect(),
            interleave_parent: None,
        }
    }

    /// Primary key whose table is interleaved in `parent`.
    pub fn with_interleave(
        parent: impl Into<String>,
        key_parts: impl IntoIterator<Item = KeyPart>,
    ) -> Self {
        Self {
            key_parts: key_parts.into_iter().collect(),
            interleave_parent: Some(parent.into()),
        }
    }

    pub fn key_parts(&self) -> &[KeyPart] {
        &self.key_parts
    }

    pub fn interleave_parent(&self) -> Option<&str> {
        self.interleave_parent.as_deref()
    }

    /// The `PRIMARY KEY (...)` clause, with its interleave suffix if any.
    pub fn to_sql(&self) -> String {
        let clause = format!("PRIMARY KEY ({})", render_key_parts(&self.key_parts));
        match &self.interleave_parent {
            Some(parent) => format!("{clause}, INTERLEAVE IN PARENT {}", quote(parent)),
            None => clause,
        }
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
