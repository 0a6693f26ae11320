use super::{Column, Index, PrimaryKey};
use crate::format::quote;

/// Indentation of each column line inside `CREATE TABLE`.
const COLUMN_INDENT: &str = "    ";

/// One descriptor assembled into columns, primary key and indexes.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    primary_key: PrimaryKey,
    indexes: Vec<Index>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<Column>,
        primary_key: PrimaryKey,
        indexes: Vec<Index>,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            primary_key,
            indexes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    /// `CREATE TABLE` with one comma-terminated line per column, closed by
    /// the primary key clause.
    pub fn create_table_sql(&self) -> String {
        let mut lines = Vec::with_capacity(self.columns.len() + 2);
        lines.push(format!("CREATE TABLE {} (", quote(&self.name)));
        for column in &self.columns {
            lines.push(format!("{COLUMN_INDENT}{},", column.to_sql()));
        }
        lines.push(format!(") {}", self.primary_key.to_sql()));
        lines.join("\n")
    }

    pub fn drop_table_sql(&self) -> String {
        format!("DROP TABLE {}", quote(&self.name))
    }

    pub fn create_index_sqls(&self) -> Vec<String> {
        self.indexes.iter().map(Index::create_index_sql).collect()
    }

    pub fn drop_index_sqls(&self) -> Vec<String> {
        self.indexes.iter().map(Index::drop_index_sql).collect()
    }
}
