//! The contract every statement builder implements.

use crate::db::Db;
use crate::error::StmtResult;
use crate::exec::{self, ExecContext, ExecResult, Executor};
use crate::formatter::Formatter;

/// A statement that renders itself into SQL and can be executed.
///
/// Implementors only provide [`operation`](Query::operation) and
/// [`append_query`](Query::append_query); rendering to a string and execution
/// are shared.
pub trait Query: Sync {
    /// Statement keyword set, e.g. `"ADD COLUMN"`.
    fn operation(&self) -> &'static str;

    /// Append the statement to `buf` and return it.
    ///
    /// Returns the first recorded configuration error before writing anything.
    /// On any failure the buffer is dropped, so no partial SQL escapes.
    fn append_query(&self, fmter: &dyn Formatter, buf: Vec<u8>) -> StmtResult<Vec<u8>>;

    /// Render the statement to a string.
    fn to_sql(&self, fmter: &dyn Formatter) -> StmtResult<String> {
        let buf = self.append_query(fmter, Vec::new())?;
        exec::into_sql(buf)
    }

    /// Render and execute the statement, ignoring returned rows.
    fn exec<E: Executor>(
        &self,
        db: &Db<E>,
        ctx: &ExecContext,
    ) -> impl std::future::Future<Output = StmtResult<ExecResult>> + Send {
        exec::run(self, db, ctx, None)
    }

    /// Render and execute the statement, appending returned rows to `dest`.
    fn exec_into<E: Executor>(
        &self,
        db: &Db<E>,
        ctx: &ExecContext,
        dest: &mut Vec<E::Row>,
    ) -> impl std::future::Future<Output = StmtResult<ExecResult>> + Send {
        exec::run(self, db, ctx, Some(dest))
    }
}
