//! A database handle pairing an executor with a dialect formatter.

use crate::config::DbConfig;
use crate::formatter::{Formatter, PgFormatter};
use crate::query::{AddColumnQuery, DropColumnQuery, DropTableQuery, TruncateTableQuery};
use std::fmt;
use std::sync::Arc;

/// Executor, formatter and configuration used to run statements.
///
/// # Example
///
/// ```ignore
/// use sqlstmt::{Db, ExecContext, Query, args};
///
/// let db = Db::postgres(client);
/// db.new_add_column()
///     .table("users")
///     .column_expr("age int NOT NULL DEFAULT ?", args![0])
///     .if_not_exists()
///     .exec(&db, &ExecContext::new())
///     .await?;
/// ```
pub struct Db<E> {
    executor: E,
    formatter: Arc<dyn Formatter>,
    config: DbConfig,
}

impl<E> Db<E> {
    /// Create a handle from an executor and a formatter.
    pub fn new(executor: E, formatter: impl Formatter + 'static) -> Self {
        Self {
            executor,
            formatter: Arc::new(formatter),
            config: DbConfig::default(),
        }
    }

    /// Create a handle using [`PgFormatter`].
    pub fn postgres(executor: E) -> Self {
        Self::new(executor, PgFormatter)
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: DbConfig) -> Self {
        self.config = config;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn formatter(&self) -> &dyn Formatter {
        &*self.formatter
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// A fresh render buffer sized by [`DbConfig::initial_buffer_capacity`].
    pub fn make_query_bytes(&self) -> Vec<u8> {
        Vec::with_capacity(self.config.initial_buffer_capacity)
    }

    /// Start an `ALTER TABLE ... ADD` statement.
    pub fn new_add_column(&self) -> AddColumnQuery {
        AddColumnQuery::new()
    }

    /// Start an `ALTER TABLE ... DROP COLUMN` statement.
    pub fn new_drop_column(&self) -> DropColumnQuery {
        DropColumnQuery::new()
    }

    /// Start a `DROP TABLE` statement.
    pub fn new_drop_table(&self) -> DropTableQuery {
        DropTableQuery::new()
    }

    /// Start a `TRUNCATE TABLE` statement.
    pub fn new_truncate_table(&self) -> TruncateTableQuery {
        TruncateTableQuery::new()
    }
}

impl<E> fmt::Debug for Db<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("formatter", &self.formatter.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
