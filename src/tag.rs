//! Field tag mini-grammar.
//!
//! A raw tag is a comma-separated list of modifiers, each either a bare key
//! (`nullable`) or `key=value` (`size=1024`). Segments are trimmed, and a
//! segment equal to the ignore sentinel drops the whole field no matter
//! where it appears.

use crate::error::{Error, Result};

/// Modifier marking a column nullable.
pub const NULLABLE: &str = "nullable";
/// Modifier carrying the `STRING`/`BYTES` length.
pub const SIZE: &str = "size";

/// One modifier of a tag. Bare modifiers carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub key: String,
    pub value: String,
}

/// Deduplicated modifiers of one field, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag {
    modifiers: Vec<Modifier>,
}

impl FieldTag {
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.modifiers
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    // Keys stay unique: later duplicates of a key are dropped.
    fn insert(&mut self, key: &str, value: &str) {
        if !self.contains(key) {
            self.modifiers.push(Modifier {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Resolve the modifiers the type resolver understands.
    ///
    /// `field` names the field in the error when `size` is not an integer.
    /// Unknown modifiers are kept in the tag but ignored here.
    pub fn options(&self, field: &str) -> Result<ColumnOptions> {
        let nullable = self.contains(NULLABLE);
        let size = match self.get(SIZE) {
            None => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|source| Error::TagFormat {
                field: field.to_string(),
                value: raw.to_string(),
                source,
            })?),
        };
        Ok(ColumnOptions { nullable, size })
    }
}

/// Typed view of a tag: what the column builder consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    pub nullable: bool,
    pub size: Option<i64>,
}

/// Outcome of parsing one raw tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedTag {
    /// The ignore sentinel was present; the field yields no column.
    Ignore,
    Tag(FieldTag),
}

/// Parses raw tags against a configured ignore sentinel.
#[derive(Debug, Clone)]
pub struct TagParser {
    ignore_sentinel: String,
}

impl TagParser {
    pub fn new(ignore_sentinel: impl Into<String>) -> Self {
        Self {
            ignore_sentinel: ignore_sentinel.into(),
        }
    }

    pub fn ignore_sentinel(&self) -> &str {
        &self.ignore_sentinel
    }

    pub fn parse(&self, raw: &str) -> ParsedTag {
        if raw.is_empty() {
            return ParsedTag::Tag(FieldTag::default());
        }

        let mut segments: Vec<&str> = Vec::new();
        for segment in raw.split(',').map(str::trim) {
            if segment == self.ignore_sentinel {
                return ParsedTag::Ignore;
            }
            if !segments.contains(&segment) {
                segments.push(segment);
            }
        }

        let mut tag = FieldTag::default();
        for segment in segments {
            match segment.split_once('=') {
                Some((key, value)) => tag.insert(key, value),
                None => tag.insert(segment, ""),
            }
        }
        ParsedTag::Tag(tag)
    }
}

impl Default for TagParser {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_IGNORE_SENTINEL)
    }
}
