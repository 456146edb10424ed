use std::time::Duration;

/// Configuration for a [`Db`](crate::Db).
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Statement timeout. `None` means no timeout (default).
    ///
    /// An [`ExecContext`](crate::ExecContext) timeout takes precedence.
    pub query_timeout: Option<Duration>,
    /// Initial capacity of the render buffer, in bytes.
    pub initial_buffer_capacity: usize,
    /// Truncate SQL in log events (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            query_timeout: None,
            initial_buffer_capacity: 256,
            max_logged_sql_length: Some(200),
        }
    }
}

impl DbConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the statement timeout.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Set the initial render buffer capacity.
    pub fn with_initial_buffer_capacity(mut self, capacity: usize) -> Self {
        self.initial_buffer_capacity = capacity;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_sql_truncation(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}
