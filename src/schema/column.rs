use std::fmt;

use crate::format::quote;
use crate::reflect::TypeInfo;
use crate::resolve::{resolve, SqlType};
use crate::tag::ColumnOptions;

/// A column produced from one record field.
///
/// Nullable when the tag says so or when the field type admits NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    is_nullable: bool,
    size: Option<i64>,
    type_info: TypeInfo,
    sql_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, options: ColumnOptions, type_info: TypeInfo) -> Self {
        let SqlType { sql, nullable } = resolve(&type_info, options.size);
        Self {
            name: name.into(),
            is_nullable: options.nullable || nullable,
            size: options.size,
            type_info,
            sql_type: sql,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    /// Declared size; only `STRING` and `BYTES` columns render it.
    pub fn size(&self) -> Option<i64> {
        self.size
    }

    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    /// Column type without the nullability suffix, e.g. `STRING(1024)`.
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// Column definition as it appears inside `CREATE TABLE`.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", quote(&self.name), self.sql_type);
        if !self.is_nullable {
            sql.push_str(" NOT NULL");
        }
        sql
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
