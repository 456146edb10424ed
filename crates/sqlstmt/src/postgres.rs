//! [`Executor`] implementations for `tokio-postgres` clients and transactions.

use crate::error::StmtResult;
use crate::exec::{ExecResult, Executor};
use tokio_postgres::Row;

macro_rules! impl_pg_executor {
    ($ty:ty) => {
        impl Executor for $ty {
            type Row = Row;

            async fn run(&self, sql: &str, dest: Option<&mut Vec<Row>>) -> StmtResult<ExecResult> {
                match dest {
                    Some(dest) => {
                        let rows = <$ty>::query(self, sql, &[]).await?;
                        let count = rows.len() as u64;
                        dest.extend(rows);
                        Ok(ExecResult::new(count))
                    }
                    None => {
                        let affected = <$ty>::execute(self, sql, &[]).await?;
                        Ok(ExecResult::new(affected))
                    }
                }
            }
        }
    };
}

impl_pg_executor!(tokio_postgres::Client);
impl_pg_executor!(tokio_postgres::Transaction<'_>);
