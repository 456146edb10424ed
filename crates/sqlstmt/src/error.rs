//! Error types for sqlstmt

use std::sync::Arc;
use thiserror::Error;

/// Result type alias for statement building and execution.
pub type StmtResult<T> = Result<T, StmtError>;

/// Errors produced while configuring, rendering, or executing a statement.
///
/// Configuration errors are recorded by the builder and only surface when the
/// statement is rendered, so a long fluent chain needs a single check at the end.
#[derive(Debug, Clone, Error)]
pub enum StmtError {
    /// Malformed raw template, argument mismatch, or conflicting options
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The statement requires a fixed number of column expressions
    #[error("{operation} requires exactly {expected} column(s), got {got}")]
    ColumnCount {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    /// No table and no model table were configured
    #[error("{operation} does not have a table")]
    NoTable { operation: &'static str },

    /// A table or column expression failed to format
    #[error("Render error: {0}")]
    Render(String),

    /// Error returned by an executor, passed through unchanged
    #[error("Execution error: {0}")]
    Execution(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// Error returned by tokio-postgres
    #[cfg(feature = "postgres")]
    #[error("Query error: {0}")]
    Query(#[source] Arc<tokio_postgres::Error>),

    /// The execution context was cancelled before the executor returned
    #[error("Statement cancelled")]
    Cancelled,

    /// Statement timeout
    #[error("Statement timeout after {0:?}")]
    Timeout(std::time::Duration),
}

impl StmtError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Wrap an executor error
    pub fn execution<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Execution(Arc::new(err))
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this error reports a statement-shape violation
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::ColumnCount { .. } | Self::NoTable { .. })
    }

    /// Check if this is a render error
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    /// Check if this is a cancellation error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for StmtError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Query(Arc::new(err))
    }
}
