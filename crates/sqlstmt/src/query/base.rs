//! State shared by every statement builder.

use crate::error::{StmtError, StmtResult};
use crate::expr::Expr;
use crate::formatter::Formatter;
use crate::ident::Ident;
use crate::model::TableModel;
use crate::value::Value;

/// Tables, columns and the first configuration error of a statement.
///
/// Statement builders embed a `BaseQuery` and forward their fluent setters to
/// it. Setters never fail: the first error is kept and returned when the
/// statement is rendered, later errors are dropped.
#[derive(Debug, Clone, Default)]
pub struct BaseQuery {
    tables: Vec<Expr>,
    model_table_name: Option<Expr>,
    model_table: Option<Ident>,
    columns: Vec<Expr>,
    err: Option<StmtError>,
}

impl BaseQuery {
    /// Create an empty base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err` unless an error is already recorded.
    pub fn set_err(&mut self, err: StmtError) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// The recorded configuration error, if any.
    pub fn err(&self) -> Option<&StmtError> {
        self.err.as_ref()
    }

    /// Return the recorded error as `Err`.
    pub fn check(&self) -> StmtResult<()> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    // ==================== Tables ====================

    /// Use `M::TABLE_NAME` when no explicit table is configured.
    pub fn set_model<M: TableModel>(&mut self) {
        self.model_table = Some(Ident::unchecked(M::TABLE_NAME));
    }

    /// Append a table expression.
    pub fn add_table(&mut self, table: Expr) {
        self.tables.push(table);
    }

    /// Append a raw table expression; template errors are recorded.
    pub fn add_table_expr(&mut self, template: &str, args: impl IntoIterator<Item = Value>) {
        match Expr::raw(template, args) {
            Ok(expr) => self.tables.push(expr),
            Err(err) => self.set_err(err),
        }
    }

    /// Override the model's table name. The last call wins.
    pub fn set_model_table_expr(&mut self, template: &str, args: impl IntoIterator<Item = Value>) {
        match Expr::raw(template, args) {
            Ok(expr) => self.model_table_name = Some(expr),
            Err(err) => self.set_err(err),
        }
    }

    /// Configured tables in insertion order.
    pub fn tables(&self) -> &[Expr] {
        &self.tables
    }

    /// The table a single-table statement targets.
    ///
    /// Explicit tables win, then the model table override, then the model's
    /// table name.
    pub fn first_table(&self, operation: &'static str) -> StmtResult<TableRef<'_>> {
        if let Some(table) = self.tables.first() {
            return Ok(TableRef::Expr(table));
        }
        self.model_table_ref()
            .ok_or(StmtError::NoTable { operation })
    }

    fn model_table_ref(&self) -> Option<TableRef<'_>> {
        if let Some(expr) = &self.model_table_name {
            return Some(TableRef::Expr(expr));
        }
        self.model_table.as_ref().map(TableRef::Ident)
    }

    /// Append the first table.
    pub fn append_first_table(
        &self,
        fmter: &dyn Formatter,
        buf: &mut Vec<u8>,
        operation: &'static str,
    ) -> StmtResult<()> {
        self.first_table(operation)?.append(fmter, buf)
    }

    /// Append every table, separated by `, `.
    pub fn append_tables(
        &self,
        fmter: &dyn Formatter,
        buf: &mut Vec<u8>,
        operation: &'static str,
    ) -> StmtResult<()> {
        if self.tables.is_empty() {
            return self.append_first_table(fmter, buf, operation);
        }
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                buf.extend_from_slice(b", ");
            }
            fmter.append(buf, table)?;
        }
        Ok(())
    }

    // ==================== Columns ====================

    /// Append a column expression.
    pub fn add_column(&mut self, column: Expr) {
        self.columns.push(column);
    }

    /// Append a validated column name; parse errors are recorded.
    pub fn add_column_ident(&mut self, name: &str) {
        match Ident::parse(name) {
            Ok(ident) => self.columns.push(Expr::Ident(ident)),
            Err(err) => self.set_err(err),
        }
    }

    /// Append a raw column expression; template errors are recorded.
    pub fn add_column_expr(&mut self, template: &str, args: impl IntoIterator<Item = Value>) {
        match Expr::raw(template, args) {
            Ok(expr) => self.columns.push(expr),
            Err(err) => self.set_err(err),
        }
    }

    /// Configured columns in insertion order.
    pub fn columns(&self) -> &[Expr] {
        &self.columns
    }

    /// The only column, or `ColumnCount` if there is not exactly one.
    pub fn single_column(&self, operation: &'static str) -> StmtResult<&Expr> {
        match self.columns.as_slice() {
            [column] => Ok(column),
            columns => Err(StmtError::ColumnCount {
                operation,
                expected: 1,
                got: columns.len(),
            }),
        }
    }
}

/// A resolved table target.
#[derive(Debug, Clone, Copy)]
pub enum TableRef<'a> {
    Expr(&'a Expr),
    Ident(&'a Ident),
}

impl TableRef<'_> {
    /// Append the table through the formatter.
    pub fn append(self, fmter: &dyn Formatter, buf: &mut Vec<u8>) -> StmtResult<()> {
        match self {
            TableRef::Expr(expr) => fmter.append(buf, expr),
            TableRef::Ident(ident) => fmter.append_ident_path(buf, ident),
        }
    }
}
