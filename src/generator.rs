//! DDL generation entry points.
//!
//! A [`Generator`] walks record descriptors into [`Table`]s and renders
//! them. Batch calls walk each descriptor on its own coroutine and fail as
//! a whole when any descriptor fails.

use may::coroutine::Builder;

use crate::config::{GeneratorConfig, DEFAULT_IGNORE_SENTINEL, DEFAULT_TAG_KEY};
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::reflect::RecordShape;
use crate::schema::{Index, PrimaryKey, Table};
use crate::tag::TagParser;
use crate::walker::StructWalker;

/// Cloud Spanner DDL generator.
#[derive(Debug, Clone)]
pub struct Generator {
    walker: StructWalker,
}

/// Builder for [`Generator`]; defaults to tag key `db` and sentinel `-`.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    tag_key: String,
    ignore_sentinel: String,
}

impl GeneratorBuilder {
    /// Tag namespace read for modifiers.
    pub fn tag_key(mut self, tag_key: impl Into<String>) -> Self {
        self.tag_key = tag_key.into();
        self
    }

    /// Modifier value that drops a field.
    pub fn ignore_sentinel(mut self, ignore_sentinel: impl Into<String>) -> Self {
        self.ignore_sentinel = ignore_sentinel.into();
        self
    }

    pub fn build(self) -> Result<Generator> {
        Ok(self.finish())
    }

    fn finish(self) -> Generator {
        Generator {
            walker: StructWalker::new(self.tag_key, TagParser::new(self.ignore_sentinel)),
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY.to_string(),
            ignore_sentinel: DEFAULT_IGNORE_SENTINEL.to_string(),
        }
    }
}

// Coroutine stack for batch workers, in words.
const WORKER_STACK_SIZE: usize = 0x8000;

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

// Everything a batch worker needs, detached from the borrowed descriptor.
struct Job {
    shape: RecordShape,
    table_name: String,
    primary_key: PrimaryKey,
    indexes: Vec<Index>,
}

impl Job {
    fn from_entity<E: Entity + ?Sized>(entity: &E) -> Self {
        Self {
            shape: entity.record_shape(),
            table_name: entity.table_name(),
            primary_key: entity.primary_key(),
            indexes: entity.indexes(),
        }
    }

    fn run(self, walker: &StructWalker) -> Result<Table> {
        let columns = walker.walk(&self.shape)?;
        log::debug!(
            "table `{}`: {} columns, {} indexes",
            self.table_name,
            columns.len(),
            self.indexes.len()
        );
        Ok(Table::new(self.table_name, columns, self.primary_key, self.indexes))
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::builder().finish()
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Self::builder()
            .tag_key(config.tag_key.clone())
            .ignore_sentinel(config.ignore_sentinel.clone())
            .build()
    }

    pub fn tag_key(&self) -> &str {
        self.walker.tag_key()
    }

    /// Walk one descriptor into its schema model.
    pub fn parse<E: Entity + ?Sized>(&self, entity: &E) -> Result<Table> {
        Job::from_entity(entity).run(&self.walker)
    }

    /// Walk descriptors concurrently; output order matches input order.
    ///
    /// Every worker runs to completion. The first failure in input order is
    /// returned and all tables are discarded.
    pub fn parse_many(&self, entities: &[&dyn Entity]) -> Result<Vec<Table>> {
        log::debug!("walking {} descriptors", entities.len());

        let mut handles = Vec::with_capacity(entities.len());
        for (index, entity) in entities.iter().enumerate() {
            let job = Job::from_entity(*entity);
            let walker = self.walker.clone();
            let builder = Builder::new()
                .name(format!("spindle-walk-{index}"))
                .stack_size(WORKER_STACK_SIZE);
            handles.push(may::go!(builder, move || job.run(&walker)).map_err(|source| {
                Error::WorkerSpawn { index, source }
            }));
        }

        // `join` parks a calling coroutine instead of its OS thread.
        let mut tables = Vec::with_capacity(handles.len());
        let mut first_error = None;
        for (index, handle) in handles.into_iter().enumerate() {
            let result = match handle {
                Ok(handle) => handle
                    .join()
                    .unwrap_or_else(|_| Err(Error::WorkerPanicked { index })),
                Err(e) => Err(e),
            };
            match result {
                Ok(table) => tables.push(table),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(tables),
        }
    }

    /// `CREATE TABLE` for one descriptor.
    pub fn create_table<E: Entity + ?Sized>(&self, entity: &E) -> Result<String> {
        Ok(self.parse(entity)?.create_table_sql())
    }

    /// `CREATE TABLE` for each descriptor, in input order.
    pub fn create_tables(&self, entities: &[&dyn Entity]) -> Result<Vec<String>> {
        let tables = self.parse_many(entities)?;
        Ok(tables.iter().map(Table::create_table_sql).collect())
    }

    /// `DROP TABLE` for one descriptor.
    pub fn drop_table<E: Entity + ?Sized>(&self, entity: &E) -> Result<String> {
        Ok(self.parse(entity)?.drop_table_sql())
    }

    /// `DROP TABLE` for each descriptor, in input order.
    pub fn drop_tables(&self, entities: &[&dyn Entity]) -> Result<Vec<String>> {
        let tables = self.parse_many(entities)?;
        Ok(tables.iter().map(Table::drop_table_sql).collect())
    }

    /// `CREATE INDEX` for each index the descriptor declares.
    pub fn create_indexes<E: Entity + ?Sized>(&self, entity: &E) -> Result<Vec<String>> {
        Ok(self.parse(entity)?.create_index_sqls())
    }

    /// `DROP INDEX` for each index the descriptor declares.
    pub fn drop_indexes<E: Entity + ?Sized>(&self, entity: &E) -> Result<Vec<String>> {
        Ok(self.parse(entity)?.drop_index_sqls())
    }
}
