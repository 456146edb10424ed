//! Statement builders.
//!
//! Each builder embeds a [`BaseQuery`] for its tables, columns and deferred
//! error, adds its own flags, and implements [`Query`] to render itself.
//!
//! # Usage
//!
//! ```
//! use sqlstmt::{AddColumnQuery, DropTableQuery, PgFormatter, Query, args};
//!
//! let sql = AddColumnQuery::new()
//!     .table("users")
//!     .column_expr("age int NOT NULL DEFAULT ?", args![0])
//!     .if_not_exists()
//!     .to_sql(&PgFormatter)?;
//! assert_eq!(sql, r#"ALTER TABLE "users" ADD IF NOT EXISTS age int NOT NULL DEFAULT 0"#);
//!
//! let sql = DropTableQuery::new()
//!     .tables(&["sessions", "tokens"])
//!     .if_exists()
//!     .cascade()
//!     .to_sql(&PgFormatter)?;
//! assert_eq!(sql, r#"DROP TABLE IF EXISTS "sessions", "tokens" CASCADE"#);
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

/// Table-targeting setters shared by every builder with a `base: BaseQuery`
/// field.
macro_rules! impl_table_methods {
    () => {
        /// Use `M`'s table when no explicit table is configured.
        pub fn model<M: $crate::model::TableModel>(mut self) -> Self {
            self.base.set_model::<M>();
            self
        }

        /// Add a target table. Dots separate schema and table; every part is quoted.
        pub fn table(mut self, name: &str) -> Self {
            self.base.add_table($crate::expr::Expr::ident(name));
            self
        }

        /// Add several target tables.
        pub fn tables(mut self, names: &[&str]) -> Self {
            for name in names {
                self.base.add_table($crate::expr::Expr::ident(name));
            }
            self
        }

        /// Add a raw table expression. It is emitted as written, not quoted.
        pub fn table_expr(
            mut self,
            template: &str,
            args: impl IntoIterator<Item = $crate::value::Value>,
        ) -> Self {
            self.base.add_table_expr(template, args);
            self
        }

        /// Override the model's table name with a raw expression.
        pub fn model_table_expr(
            mut self,
            template: &str,
            args: impl IntoIterator<Item = $crate::value::Value>,
        ) -> Self {
            self.base.set_model_table_expr(template, args);
            self
        }

        /// The first configuration error, if any.
        pub fn err(&self) -> Option<&$crate::error::StmtError> {
            self.base.err()
        }
    };
}

mod add_column;
mod base;
mod drop_column;
mod drop_table;
mod traits;
mod truncate_table;

pub use add_column::AddColumnQuery;
pub use base::{BaseQuery, TableRef};
pub use drop_column::DropColumnQuery;
pub use drop_table::DropTableQuery;
pub use traits::Query;
pub use truncate_table::TruncateTableQuery;

#[cfg(test)]
mod tests;
