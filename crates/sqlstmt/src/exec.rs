//! Execution: the executor contract, the execution context, and the adapter
//! that renders a statement and hands it to an executor.

use crate::db::Db;
use crate::error::{StmtError, StmtResult};
use crate::query::Query;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Runs finished SQL against a live connection.
///
/// Implementations decide what a row is and how the statement is sent; the
/// builders only hand over the SQL text and an optional row destination.
pub trait Executor: Send + Sync {
    /// Row type appended to the destination.
    type Row: Send + 'static;

    /// Execute `sql`. When `dest` is given, returned rows are appended to it.
    fn run(
        &self,
        sql: &str,
        dest: Option<&mut Vec<Self::Row>>,
    ) -> impl Future<Output = StmtResult<ExecResult>> + Send;
}

impl<E: Executor> Executor for &E {
    type Row = E::Row;

    fn run(
        &self,
        sql: &str,
        dest: Option<&mut Vec<Self::Row>>,
    ) -> impl Future<Output = StmtResult<ExecResult>> + Send {
        (**self).run(sql, dest)
    }
}

impl<E: Executor> Executor for Arc<E> {
    type Row = E::Row;

    fn run(
        &self,
        sql: &str,
        dest: Option<&mut Vec<Self::Row>>,
    ) -> impl Future<Output = StmtResult<ExecResult>> + Send {
        (**self).run(sql, dest)
    }
}

/// Outcome of a successful execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Rows affected (or returned, when rows were collected).
    pub rows_affected: u64,
}

impl ExecResult {
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}

/// Per-call execution settings: cancellation, timeout and a monitoring tag.
///
/// ```
/// use sqlstmt::ExecContext;
/// use std::time::Duration;
///
/// let (ctx, canceller) = ExecContext::cancellable();
/// let ctx = ctx.with_timeout(Duration::from_secs(5)).with_tag("migrations.add_age");
/// assert!(!ctx.is_cancelled());
/// canceller.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    cancel: Option<watch::Receiver<bool>>,
    timeout: Option<Duration>,
    tag: Option<String>,
}

impl ExecContext {
    /// A context that is never cancelled and has no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context plus the handle that cancels it.
    pub fn cancellable() -> (Self, Canceller) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            cancel: Some(rx),
            ..Self::default()
        };
        (ctx, Canceller { tx })
    }

    /// Derive a context that is also cancelled by `canceller`.
    ///
    /// Replaces any previous cancel source.
    pub fn with_cancel(mut self, canceller: &Canceller) -> Self {
        self.cancel = Some(canceller.tx.subscribe());
        self
    }

    /// Set the execution timeout. Overrides [`DbConfig::query_timeout`](crate::DbConfig).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Associate a tag for logging.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Resolves once the context is cancelled; never resolves otherwise.
    pub async fn cancelled(&self) {
        let Some(rx) = &self.cancel else {
            return std::future::pending().await;
        };
        let mut rx = rx.clone();
        // Err means every canceller was dropped without cancelling.
        let cancelled = rx.wait_for(|cancelled| *cancelled).await.is_ok();
        if !cancelled {
            std::future::pending::<()>().await;
        }
    }

    /// Drive `fut` until it finishes, the context is cancelled, or `timeout`
    /// elapses. The losing future is dropped.
    pub(crate) async fn guard<T, F>(&self, fut: F, timeout: Option<Duration>) -> StmtResult<T>
    where
        F: Future<Output = StmtResult<T>>,
    {
        let run = async {
            match timeout {
                Some(timeout) => tokio::time::timeout(timeout, fut)
                    .await
                    .unwrap_or(Err(StmtError::Timeout(timeout))),
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(StmtError::Cancelled),
            result = run => result,
        }
    }
}

/// Cancels every [`ExecContext`] derived from it.
#[derive(Debug)]
pub struct Canceller {
    tx: watch::Sender<bool>,
}

impl Canceller {
    /// Cancel all derived contexts. In-flight executions return
    /// [`StmtError::Cancelled`].
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

pub(crate) fn into_sql(buf: Vec<u8>) -> StmtResult<String> {
    String::from_utf8(buf)
        .map_err(|e| StmtError::render(format!("rendered SQL is not valid UTF-8: {e}")))
}

/// Render `query` with the database's formatter and run it.
///
/// The executor is not contacted when rendering fails or the context is
/// already cancelled.
pub(crate) async fn run<Q, E>(
    query: &Q,
    db: &Db<E>,
    ctx: &ExecContext,
    dest: Option<&mut Vec<E::Row>>,
) -> StmtResult<ExecResult>
where
    Q: Query + ?Sized,
    E: Executor,
{
    let buf = query.append_query(db.formatter(), db.make_query_bytes())?;
    let sql = into_sql(buf)?;

    if ctx.is_cancelled() {
        return Err(StmtError::Cancelled);
    }

    #[cfg(feature = "tracing")]
    log_statement(db, query.operation(), ctx, &sql);

    let timeout = ctx.timeout().or(db.config().query_timeout);
    let result = ctx.guard(db.executor().run(&sql, dest), timeout).await;

    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::debug!(
            target: "sqlstmt.sql",
            operation = query.operation(),
            tag = ctx.tag().unwrap_or("-"),
            error = %err,
            "statement failed"
        );
    }

    result
}

#[cfg(feature = "tracing")]
fn log_statement<E>(db: &Db<E>, operation: &'static str, ctx: &ExecContext, sql: &str) {
    let shown = match db.config().max_logged_sql_length {
        Some(max) if sql.len() > max => {
            std::borrow::Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max)))
        }
        _ => std::borrow::Cow::Borrowed(sql),
    };
    tracing::debug!(
        target: "sqlstmt.sql",
        operation,
        dialect = db.formatter().name(),
        tag = ctx.tag().unwrap_or("-"),
        sql = %shown,
    );
}

#[cfg(any(feature = "tracing", test))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
