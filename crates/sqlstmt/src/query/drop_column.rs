//! `ALTER TABLE ... DROP COLUMN` builder.

use super::base::BaseQuery;
use super::traits::Query;
use crate::error::StmtResult;
use crate::formatter::Formatter;
use crate::value::Value;

/// Builds `ALTER TABLE <table> DROP COLUMN <column>`.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DropColumnQuery {
    base: BaseQuery,
}

impl DropColumnQuery {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    impl_table_methods!();

    // ==================== Column ====================

    /// Set the column to drop by name.
    ///
    /// The name is validated like [`Ident::parse`](crate::Ident::parse) and
    /// every segment is quoted; an invalid name is reported at render time.
    pub fn column(mut self, name: &str) -> Self {
        self.base.add_column_ident(name);
        self
    }

    /// Set the column to drop as a raw expression.
    pub fn column_expr(mut self, template: &str, args: impl IntoIterator<Item = Value>) -> Self {
        self.base.add_column_expr(template, args);
        self
    }
}

impl Query for DropColumnQuery {
    fn operation(&self) -> &'static str {
        "DROP COLUMN"
    }

    fn append_query(&self, fmter: &dyn Formatter, mut buf: Vec<u8>) -> StmtResult<Vec<u8>> {
        self.base.check()?;
        let column = self.base.single_column(self.operation())?;

        buf.extend_from_slice(b"ALTER TABLE ");
        self.base.append_first_table(fmter, &mut buf, self.operation())?;

        buf.extend_from_slice(b" DROP COLUMN ");
        fmter.append(&mut buf, column)?;
        Ok(buf)
    }
}
