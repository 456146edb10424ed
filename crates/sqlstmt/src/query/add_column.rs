//! `ALTER TABLE ... ADD` builder.

use super::base::BaseQuery;
use super::traits::Query;
use crate::error::StmtResult;
use crate::formatter::Formatter;
use crate::value::Value;

/// Builds `ALTER TABLE <table> ADD [IF NOT EXISTS ]<column definition>`.
///
/// The column definition is a raw expression (name, type and constraints) and
/// exactly one must be given.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddColumnQuery {
    base: BaseQuery,
    if_not_exists: bool,
}

impl AddColumnQuery {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    impl_table_methods!();

    // ==================== Column ====================

    /// Set the column definition, e.g. `"age int NOT NULL DEFAULT ?"`.
    pub fn column_expr(mut self, template: &str, args: impl IntoIterator<Item = Value>) -> Self {
        self.base.add_column_expr(template, args);
        self
    }

    /// Emit `IF NOT EXISTS` so an existing column is not an error.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

impl Query for AddColumnQuery {
    fn operation(&self) -> &'static str {
        "ADD COLUMN"
    }

    fn append_query(&self, fmter: &dyn Formatter, mut buf: Vec<u8>) -> StmtResult<Vec<u8>> {
        self.base.check()?;
        let column = self.base.single_column(self.operation())?;

        buf.extend_from_slice(b"ALTER TABLE ");
        self.base.append_first_table(fmter, &mut buf, self.operation())?;

        buf.extend_from_slice(b" ADD ");
        if self.if_not_exists {
            buf.extend_from_slice(b"IF NOT EXISTS ");
        }

        fmter.append(&mut buf, column)?;
        Ok(buf)
    }
}
