//! Rendering tests for the statement builders.

use crate::args;
use crate::error::StmtError;
use crate::formatter::{MySqlFormatter, PgFormatter};
use crate::model::TableModel;
use crate::query::{AddColumnQuery, DropColumnQuery, DropTableQuery, Query, TruncateTableQuery};
use crate::value::Value;

struct Post;

impl TableModel for Post {
    const TABLE_NAME: &'static str = "posts";
}

// ==================== ADD COLUMN ====================

#[test]
fn add_column_basic() {
    let q = AddColumnQuery::new()
        .table("t")
        .column_expr("age int", args![]);
    assert_eq!(q.to_sql(&PgFormatter).unwrap(), r#"ALTER TABLE "t" ADD age int"#);
}

#[test]
fn add_column_if_not_exists() {
    let q = AddColumnQuery::new()
        .table("t")
        .column_expr("age int", args![])
        .if_not_exists();
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE "t" ADD IF NOT EXISTS age int"#
    );
}

#[test]
fn add_column_guard_position_is_fixed() {
    let guard_first = AddColumnQuery::new()
        .if_not_exists()
        .column_expr("age int", args![])
        .table("t");
    let guard_last = AddColumnQuery::new()
        .table("t")
        .column_expr("age int", args![])
        .if_not_exists();
    assert_eq!(
        guard_first.to_sql(&PgFormatter).unwrap(),
        guard_last.to_sql(&PgFormatter).unwrap()
    );
}

#[test]
fn add_column_operation() {
    assert_eq!(AddColumnQuery::new().operation(), "ADD COLUMN");
}

#[test]
fn add_column_requires_exactly_one_column() {
    let none = AddColumnQuery::new().table("t");
    let err = none.to_sql(&PgFormatter).unwrap_err();
    assert!(matches!(
        err,
        StmtError::ColumnCount {
            operation: "ADD COLUMN",
            expected: 1,
            got: 0
        }
    ));

    let two = AddColumnQuery::new()
        .table("t")
        .column_expr("a int", args![])
        .column_expr("b int", args![]);
    let err = two.to_sql(&PgFormatter).unwrap_err();
    assert!(matches!(err, StmtError::ColumnCount { got: 2, .. }));
    assert_eq!(err.to_string(), "ADD COLUMN requires exactly 1 column(s), got 2");
}

#[test]
fn add_column_without_table() {
    let q = AddColumnQuery::new().column_expr("age int", args![]);
    let err = q.to_sql(&PgFormatter).unwrap_err();
    assert!(matches!(err, StmtError::NoTable { operation: "ADD COLUMN" }));
    assert!(err.is_structural());
}

#[test]
fn add_column_column_count_checked_before_table() {
    let err = AddColumnQuery::new().to_sql(&PgFormatter).unwrap_err();
    assert!(matches!(err, StmtError::ColumnCount { got: 0, .. }));
}

#[test]
fn add_column_first_error_wins() {
    let q = AddColumnQuery::new()
        .table_expr("? ?", args!["only one"])
        .column_expr("age int", args![1])
        .table("t")
        .column_expr("name text", args![]);

    let err = q.to_sql(&PgFormatter).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("references argument 1"));
    assert!(q.err().is_some());
}

#[test]
fn add_column_error_beats_structural_checks() {
    // No table and no column, but the template error is reported.
    let q = AddColumnQuery::new().model_table_expr("?", args![]);
    let err = q.to_sql(&PgFormatter).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn add_column_uses_only_the_first_table() {
    let q = AddColumnQuery::new()
        .tables(&["a", "b"])
        .column_expr("c int", args![]);
    assert_eq!(q.to_sql(&PgFormatter).unwrap(), r#"ALTER TABLE "a" ADD c int"#);
}

#[test]
fn add_column_raw_table_is_not_quoted() {
    let q = AddColumnQuery::new()
        .table_expr("public.users", args![])
        .column_expr("? jsonb DEFAULT ?", args![Value::ident("meta"), "{}"]);
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE public.users ADD "meta" jsonb DEFAULT '{}'"#
    );
}

#[test]
fn add_column_schema_qualified_table() {
    let q = AddColumnQuery::new()
        .table("public.users")
        .column_expr("age int", args![]);
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE "public"."users" ADD age int"#
    );
    assert_eq!(
        q.to_sql(&MySqlFormatter).unwrap(),
        "ALTER TABLE `public`.`users` ADD age int"
    );
}

#[test]
fn add_column_from_model() {
    let q = AddColumnQuery::new()
        .model::<Post>()
        .column_expr("views bigint", args![]);
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE "posts" ADD views bigint"#
    );

    let q = q.model_table_expr("posts_archive", args![]);
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        "ALTER TABLE posts_archive ADD views bigint"
    );
}

#[test]
fn add_column_render_error_on_bad_identifier() {
    let q = AddColumnQuery::new()
        .table("")
        .column_expr("age int", args![]);
    let err = q.to_sql(&PgFormatter).unwrap_err();
    assert!(err.is_render());
}

#[test]
fn add_column_rejects_nul_in_table_name() {
    let q = AddColumnQuery::new()
        .table("a\0b")
        .column_expr("x int", args![]);
    assert!(q.to_sql(&PgFormatter).unwrap_err().is_render());
    assert!(q.to_sql(&MySqlFormatter).unwrap_err().is_render());
}

#[test]
fn add_column_render_error_in_column() {
    let q = AddColumnQuery::new()
        .table("t")
        .column_expr("ratio float DEFAULT ?", args![f64::INFINITY]);
    assert!(q.to_sql(&PgFormatter).is_ok());
    assert!(q.to_sql(&MySqlFormatter).unwrap_err().is_render());
}

#[test]
fn add_column_appends_to_existing_buffer() {
    let q = AddColumnQuery::new()
        .table("t")
        .column_expr("age int", args![]);
    let buf = q.append_query(&PgFormatter, b"-- migration\n".to_vec()).unwrap();
    assert_eq!(buf, b"-- migration\nALTER TABLE \"t\" ADD age int");
}

#[test]
fn add_column_render_is_repeatable() {
    let q = AddColumnQuery::new()
        .table("t")
        .column_expr("name text DEFAULT ?", args!["n/a"]);
    let first = q.to_sql(&PgFormatter).unwrap();
    let second = q.to_sql(&PgFormatter).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, r#"ALTER TABLE "t" ADD name text DEFAULT 'n/a'"#);
}

// ==================== DROP COLUMN ====================

#[test]
fn drop_column_basic() {
    let q = DropColumnQuery::new().table("users").column("age");
    assert_eq!(q.operation(), "DROP COLUMN");
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE "users" DROP COLUMN "age""#
    );
}

#[test]
fn drop_column_expr() {
    let q = DropColumnQuery::new()
        .model::<Post>()
        .column_expr("IF EXISTS ?", args![Value::ident("legacy")]);
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE "posts" DROP COLUMN IF EXISTS "legacy""#
    );
}

#[test]
fn drop_column_requires_exactly_one_column() {
    let q = DropColumnQuery::new().table("users").column("a").column("b");
    assert!(matches!(
        q.to_sql(&PgFormatter).unwrap_err(),
        StmtError::ColumnCount {
            operation: "DROP COLUMN",
            got: 2,
            ..
        }
    ));
}

#[test]
fn drop_column_validates_the_name() {
    let q = DropColumnQuery::new()
        .table("users")
        .column(r#""Legacy Age""#);
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"ALTER TABLE "users" DROP COLUMN "Legacy Age""#
    );

    let q = DropColumnQuery::new()
        .table("users")
        .column("age; DROP TABLE users");
    let err = q.to_sql(&PgFormatter).unwrap_err();
    assert!(err.is_configuration());
    assert!(q.err().is_some());
}

// ==================== DROP TABLE ====================

#[test]
fn drop_table_basic() {
    let q = DropTableQuery::new().table("users");
    assert_eq!(q.operation(), "DROP TABLE");
    assert_eq!(q.to_sql(&PgFormatter).unwrap(), r#"DROP TABLE "users""#);
}

#[test]
fn drop_table_options() {
    let q = DropTableQuery::new()
        .tables(&["a", "b"])
        .table_expr("c", args![])
        .if_exists()
        .restrict();
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"DROP TABLE IF EXISTS "a", "b", c RESTRICT"#
    );
}

#[test]
fn drop_table_cascade_requires_feature() {
    let q = DropTableQuery::new().table("a").cascade();
    assert_eq!(q.to_sql(&PgFormatter).unwrap(), r#"DROP TABLE "a" CASCADE"#);
    assert_eq!(q.to_sql(&MySqlFormatter).unwrap(), "DROP TABLE `a`");
}

#[test]
fn drop_table_conflicting_options() {
    let q = DropTableQuery::new().table("a").cascade().restrict();
    let err = q.to_sql(&PgFormatter).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("conflicts"));
}

#[test]
fn drop_table_without_table() {
    let err = DropTableQuery::new().to_sql(&PgFormatter).unwrap_err();
    assert!(matches!(err, StmtError::NoTable { operation: "DROP TABLE" }));
}

#[test]
fn drop_table_from_model() {
    let q = DropTableQuery::new().model::<Post>().if_exists();
    assert_eq!(q.to_sql(&PgFormatter).unwrap(), r#"DROP TABLE IF EXISTS "posts""#);
}

// ==================== TRUNCATE TABLE ====================

#[test]
fn truncate_table_restarts_identity_by_default() {
    let q = TruncateTableQuery::new().table("events");
    assert_eq!(q.operation(), "TRUNCATE TABLE");
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"TRUNCATE TABLE "events" RESTART IDENTITY"#
    );
}

#[test]
fn truncate_table_options() {
    let q = TruncateTableQuery::new()
        .tables(&["a", "b"])
        .continue_identity()
        .cascade();
    assert_eq!(
        q.to_sql(&PgFormatter).unwrap(),
        r#"TRUNCATE TABLE "a", "b" CONTINUE IDENTITY CASCADE"#
    );
    assert_eq!(q.to_sql(&MySqlFormatter).unwrap(), "TRUNCATE TABLE `a`, `b`");
}

#[test]
fn truncate_table_without_table() {
    let err = TruncateTableQuery::new().to_sql(&PgFormatter).unwrap_err();
    assert!(matches!(
        err,
        StmtError::NoTable {
            operation: "TRUNCATE TABLE"
        }
    ));
}
