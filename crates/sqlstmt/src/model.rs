//! Table metadata attached to statements through `model::<M>()`.

/// A type that maps to a database table.
///
/// Builders use the table name when no explicit table is configured.
///
/// ```
/// use sqlstmt::{AddColumnQuery, PgFormatter, Query, TableModel, args};
///
/// struct User;
///
/// impl TableModel for User {
///     const TABLE_NAME: &'static str = "users";
/// }
///
/// let sql = AddColumnQuery::new()
///     .model::<User>()
///     .column_expr("age int", args![])
///     .to_sql(&PgFormatter)?;
/// assert_eq!(sql, r#"ALTER TABLE "users" ADD age int"#);
/// # Ok::<(), sqlstmt::StmtError>(())
/// ```
pub trait TableModel {
    /// Table name, optionally schema-qualified (`"public.users"`).
    const TABLE_NAME: &'static str;
}
