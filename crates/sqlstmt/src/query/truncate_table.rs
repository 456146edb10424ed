//! `TRUNCATE TABLE` builder.

use super::base::BaseQuery;
use super::traits::Query;
use crate::error::StmtResult;
use crate::formatter::{Feature, Formatter};

/// Builds `TRUNCATE TABLE <tables>[ RESTART IDENTITY| CONTINUE IDENTITY][ CASCADE]`.
///
/// Identity and cascade clauses depend on the formatter's features.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct TruncateTableQuery {
    base: BaseQuery,
    continue_identity: bool,
    cascade: bool,
}

impl TruncateTableQuery {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    impl_table_methods!();

    // ==================== Options ====================

    /// Keep sequence values instead of restarting them.
    pub fn continue_identity(mut self) -> Self {
        self.continue_identity = true;
        self
    }

    /// Also truncate tables with foreign keys to these tables.
    pub fn cascade(mut self) -> Self {
        self.cascade = true;
        self
    }
}

impl Query for TruncateTableQuery {
    fn operation(&self) -> &'static str {
        "TRUNCATE TABLE"
    }

    fn append_query(&self, fmter: &dyn Formatter, mut buf: Vec<u8>) -> StmtResult<Vec<u8>> {
        self.base.check()?;

        buf.extend_from_slice(b"TRUNCATE TABLE ");
        self.base.append_tables(fmter, &mut buf, self.operation())?;

        if fmter.supports(Feature::TableIdentity) {
            if self.continue_identity {
                buf.extend_from_slice(b" CONTINUE IDENTITY");
            } else {
                buf.extend_from_slice(b" RESTART IDENTITY");
            }
        }
        if self.cascade && fmter.supports(Feature::TableCascade) {
            buf.extend_from_slice(b" CASCADE");
        }
        Ok(buf)
    }
}
