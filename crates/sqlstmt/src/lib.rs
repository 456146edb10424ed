//! # sqlstmt
//!
//! Composable SQL statement builders for schema changes.
//!
//! ## Features
//!
//! - **Fluent builders**: `AddColumnQuery`, `DropColumnQuery`, `DropTableQuery`,
//!   `TruncateTableQuery` sharing one table/column base
//! - **Deferred errors**: setters never fail; the first configuration error is
//!   returned when the statement is rendered or executed
//! - **Pluggable dialects**: a [`Formatter`] quotes identifiers and escapes
//!   literals (`PgFormatter`, `MySqlFormatter`)
//! - **Pluggable execution**: any [`Executor`] runs the rendered SQL, with
//!   cancellation and timeouts through [`ExecContext`]
//!
//! ## Example
//!
//! ```
//! use sqlstmt::{AddColumnQuery, MySqlFormatter, PgFormatter, Query, args};
//!
//! let stmt = AddColumnQuery::new()
//!     .table("users")
//!     .column_expr("age int", args![])
//!     .if_not_exists();
//!
//! assert_eq!(stmt.to_sql(&PgFormatter)?, r#"ALTER TABLE "users" ADD IF NOT EXISTS age int"#);
//! assert_eq!(stmt.to_sql(&MySqlFormatter)?, "ALTER TABLE `users` ADD IF NOT EXISTS age int");
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod exec;
pub mod expr;
pub mod formatter;
pub mod ident;
pub mod model;
pub mod query;
pub mod value;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use config::DbConfig;
pub use db::Db;
pub use error::{StmtError, StmtResult};
pub use exec::{Canceller, ExecContext, ExecResult, Executor};
pub use expr::{Expr, RawExpr};
pub use formatter::{Feature, Formatter, MySqlFormatter, PgFormatter};
pub use ident::Ident;
pub use model::TableModel;
pub use query::{
    AddColumnQuery, BaseQuery, DropColumnQuery, DropTableQuery, Query, TableRef,
    TruncateTableQuery,
};
pub use value::Value;
