//! `DROP TABLE` builder.

use super::base::BaseQuery;
use super::traits::Query;
use crate::error::{StmtError, StmtResult};
use crate::formatter::{Feature, Formatter};

/// Builds `DROP TABLE [IF EXISTS ]<tables>[ CASCADE| RESTRICT]`.
///
/// `CASCADE` / `RESTRICT` are only emitted for dialects that support
/// [`Feature::TableCascade`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DropTableQuery {
    base: BaseQuery,
    if_exists: bool,
    cascade: bool,
    restrict: bool,
}

impl DropTableQuery {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    impl_table_methods!();

    // ==================== Options ====================

    /// Emit `IF EXISTS` so a missing table is not an error.
    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    /// Also drop objects that depend on the tables.
    pub fn cascade(mut self) -> Self {
        if self.restrict {
            self.base.set_err(StmtError::configuration(
                "DROP TABLE: cascade() conflicts with restrict()",
            ));
        }
        self.cascade = true;
        self
    }

    /// Refuse to drop tables that other objects depend on.
    pub fn restrict(mut self) -> Self {
        if self.cascade {
            self.base.set_err(StmtError::configuration(
                "DROP TABLE: restrict() conflicts with cascade()",
            ));
        }
        self.restrict = true;
        self
    }
}

impl Query for DropTableQuery {
    fn operation(&self) -> &'static str {
        "DROP TABLE"
    }

    fn append_query(&self, fmter: &dyn Formatter, mut buf: Vec<u8>) -> StmtResult<Vec<u8>> {
        self.base.check()?;

        buf.extend_from_slice(b"DROP TABLE ");
        if self.if_exists {
            buf.extend_from_slice(b"IF EXISTS ");
        }
        self.base.append_tables(fmter, &mut buf, self.operation())?;

        if fmter.supports(Feature::TableCascade) {
            if self.cascade {
                buf.extend_from_slice(b" CASCADE");
            } else if self.restrict {
                buf.extend_from_slice(b" RESTRICT");
            }
        }
        Ok(buf)
    }
}
