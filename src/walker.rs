//! Flattens a record, nested records included, into an ordered column list.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::reflect::{FieldInfo, RecordShape};
use crate::schema::Column;
use crate::tag::{ParsedTag, TagParser};

/// Deepest chain of embedded records the walker follows.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Walks record fields in declaration order.
///
/// A field whose type is a pointer to a nested record contributes that
/// record's columns inline, at its own position. Every other field yields
/// one column unless its tag carries the ignore sentinel.
#[derive(Debug, Clone)]
pub struct StructWalker {
    tag_key: String,
    parser: TagParser,
}

impl StructWalker {
    pub fn new(tag_key: impl Into<String>, parser: TagParser) -> Self {
        Self {
            tag_key: tag_key.into(),
            parser,
        }
    }

    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }

    pub fn walk(&self, shape: &RecordShape) -> Result<Vec<Column>> {
        let mut columns = Vec::new();
        // Remaining fields of each open record, innermost last.
        let mut open = vec![(*shape, shape.fields().into_iter())];

        loop {
            let Some((current, fields)) = open.last_mut() else {
                break;
            };
            let current = *current;
            let Some(field) = fields.next() else {
                open.pop();
                continue;
            };

            if let Some(nested) = field.type_info.embedded_record() {
                if open.len() >= MAX_NESTING_DEPTH {
                    return Err(Error::NestingTooDeep {
                        record: nested.name(),
                        depth: open.len(),
                    });
                }
                log::trace!("{}.{}: inlining `{}`", current.name(), field.name, nested.name());
                open.push((*nested, nested.fields().into_iter()));
                continue;
            }
            if let Some(column) = self.field_column(&current, field)? {
                columns.push(column);
            }
        }

        warn_duplicates(shape, &columns);
        Ok(columns)
    }

    fn field_column(&self, shape: &RecordShape, field: FieldInfo) -> Result<Option<Column>> {
        let tag = match field.tag(&self.tag_key) {
            None => Default::default(),
            Some(raw) => match self.parser.parse(raw) {
                ParsedTag::Ignore => {
                    log::trace!("{}.{}: ignored", shape.name(), field.name);
                    return Ok(None);
                }
                ParsedTag::Tag(tag) => tag,
            },
        };
        let options = tag.options(field.name)?;
        log::trace!("{}.{}: {:?}", shape.name(), field.name, options);
        Ok(Some(Column::new(field.name, options, field.type_info)))
    }
}

// Colliding names from embedded records are kept as-is.
fn warn_duplicates(shape: &RecordShape, columns: &[Column]) {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.name()) {
            log::warn!(
                "record `{}` yields column `{}` more than once",
                shape.name(),
                column.name()
            );
        }
    }
}
