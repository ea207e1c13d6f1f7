mod common;

use sea_query::{Alias, IntoCondition};
use sql_registry::database::enums::database_error::DatabaseError;
use sql_registry::database::enums::statement_kind::StatementKind;
use sql_registry::database::structs::registry::Registry;

#[tokio::test]
async fn test_select_one_on_every_dialect() {
    for engine in ["mysql", "postgres", "sqlite3"] {
        let connection = common::create_test_connection(engine);
        let statement = connection.select(["1"]);
        assert_eq!(connection.build_sql(&statement).unwrap(), "SELECT 1", "engine {}", engine);
    }
}

#[tokio::test]
async fn test_identifier_quoting_follows_dialect() {
    let mysql = common::create_test_connection("mysql");
    let postgres = common::create_test_connection("postgres");
    let sqlite = common::create_test_connection("sqlite3");

    let mut statement = mysql.select(["id"]);
    statement.from(mysql.table("users")).and_where(mysql.eq("id", 1));
    assert_eq!(mysql.build_sql(&statement).unwrap(), "SELECT `id` FROM `users` WHERE `id` = 1");

    assert_eq!(
        postgres.build_sql(&statement).unwrap(),
        "SELECT \"id\" FROM \"users\" WHERE \"id\" = 1"
    );
    assert_eq!(
        sqlite.build_sql(&statement).unwrap(),
        "SELECT \"id\" FROM \"users\" WHERE \"id\" = 1"
    );
}

#[tokio::test]
async fn test_select_columns() {
    let connection = common::create_test_connection("mysql");

    let mut statement = connection.select(["*"]);
    statement.from(connection.table("users"));
    assert_eq!(connection.build_sql(&statement).unwrap(), "SELECT * FROM `users`");

    let mut statement = connection.select(["users.id", "COUNT(*) AS total"]);
    statement.from(connection.table("app.users"));
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT `users`.`id`, COUNT(*) AS total FROM `app`.`users`"
    );
}

#[tokio::test]
async fn test_and_or_conditions() {
    let connection = common::create_test_connection("mysql");

    let mut statement = connection.select(["id"]);
    statement
        .from(connection.table("users"))
        .cond_where(connection.and([connection.gte("age", 18), connection.eq("name", "alice")]));
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT `id` FROM `users` WHERE `age` >= 18 AND `name` = 'alice'"
    );

    let mut statement = connection.select(["id"]);
    statement
        .from(connection.table("users"))
        .cond_where(connection.or([connection.eq("status", "active"), connection.eq("status", "trial")]));
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT `id` FROM `users` WHERE `status` = 'active' OR `status` = 'trial'"
    );
}

#[tokio::test]
async fn test_nested_conditions() {
    let connection = common::create_test_connection("sqlite3");

    let either = connection.or([connection.eq("role", "admin"), connection.eq("role", "owner")]);
    let mut statement = connection.select(["id"]);
    statement
        .from(connection.table("users"))
        .cond_where(connection.and([either, connection.lt("age", 65).into_condition()]));
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT \"id\" FROM \"users\" WHERE (\"role\" = 'admin' OR \"role\" = 'owner') AND \"age\" < 65"
    );
}

#[tokio::test]
async fn test_comparison_operators() {
    let connection = common::create_test_connection("postgres");

    let mut statement = connection.select(["id"]);
    statement
        .from(connection.table("orders"))
        .and_where(connection.gt("total", 10))
        .and_where(connection.lte("total", 100))
        .and_where(connection.neq("state", "void"));
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT \"id\" FROM \"orders\" WHERE \"total\" > 10 AND \"total\" <= 100 AND \"state\" <> 'void'"
    );
}

#[tokio::test]
async fn test_null_comparisons() {
    let connection = common::create_test_connection("mysql");

    let mut statement = connection.select(["id"]);
    statement
        .from(connection.table("users"))
        .and_where(connection.eq("deleted_at", Option::<String>::None))
        .and_where(connection.neq("email", Option::<String>::None));
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT `id` FROM `users` WHERE `deleted_at` IS NULL AND `email` IS NOT NULL"
    );
}

#[tokio::test]
async fn test_expr_interpolates_values() {
    let connection = common::create_test_connection("postgres");

    let mut statement = connection.select(["id"]);
    statement
        .from(connection.table("users"))
        .and_where(connection.expr("age BETWEEN ? AND ?", [18, 30]).unwrap());
    assert_eq!(
        connection.build_sql(&statement).unwrap(),
        "SELECT \"id\" FROM \"users\" WHERE age BETWEEN 18 AND 30"
    );

    assert!(matches!(
        connection.expr("age > ?", Vec::<i32>::new()),
        Err(DatabaseError::BuildFailed(_))
    ));
}

#[tokio::test]
async fn test_insert_update_delete() {
    let connection = common::create_test_connection("mysql");

    let mut insert = connection.insert_into("users");
    insert
        .columns([Alias::new("name"), Alias::new("age")])
        .values_panic(["alice".into(), 30.into()]);
    assert_eq!(
        connection.build_sql(&insert).unwrap(),
        "INSERT INTO `users` (`name`, `age`) VALUES ('alice', 30)"
    );

    let mut update = connection.update("users");
    update.value(Alias::new("age"), 31).and_where(connection.eq("id", 1));
    assert_eq!(
        connection.build_sql(&update).unwrap(),
        "UPDATE `users` SET `age` = 31 WHERE `id` = 1"
    );

    let mut delete = connection.delete_from("users");
    delete.and_where(connection.eq("id", 1));
    assert_eq!(connection.build_sql(&delete).unwrap(), "DELETE FROM `users` WHERE `id` = 1");
}

#[tokio::test]
async fn test_raw_statements() {
    let connection = common::create_test_connection("sqlite3");

    let select = connection.select_by_sql("SELECT * FROM users WHERE name = ?", ["alice"]);
    assert_eq!(select.kind(), StatementKind::Select);
    assert_eq!(
        connection.build_sql(&select).unwrap(),
        "SELECT * FROM users WHERE name = 'alice'"
    );

    let mut insert = connection.insert_by_sql("INSERT INTO users (name, age) VALUES (?, ?)", ["bob"]);
    insert.bind(41);
    assert_eq!(insert.kind(), StatementKind::Insert);
    assert_eq!(
        connection.build_sql(&insert).unwrap(),
        "INSERT INTO users (name, age) VALUES ('bob', 41)"
    );

    let update = connection.update_by_sql("UPDATE users SET age = age + 1", Vec::<i32>::new());
    assert_eq!(update.kind(), StatementKind::Update);
    assert_eq!(connection.build_sql(&update).unwrap(), "UPDATE users SET age = age + 1");

    let delete = connection.delete_by_sql("DELETE FROM users WHERE id = ?", [7]);
    assert_eq!(delete.kind(), StatementKind::Delete);
    assert_eq!(connection.build_sql(&delete).unwrap(), "DELETE FROM users WHERE id = 7");
}

#[tokio::test]
async fn test_raw_statement_value_mismatch() {
    let connection = common::create_test_connection("mysql");
    let statement = connection.select_by_sql("SELECT ? + ?", [1]);
    match connection.build_sql(&statement) {
        Err(DatabaseError::BuildFailed(message)) => assert!(!message.is_empty()),
        other => panic!("expected BuildFailed, got {:?}", other),
    }
}

#[tokio::test]
#[should_panic(expected = "unable to build sql")]
async fn test_must_build_sql_panics_on_failure() {
    let connection = common::create_test_connection("sqlite3");
    let statement = connection.delete_by_sql("DELETE FROM users WHERE id = ?", Vec::<i32>::new());
    connection.must_build_sql(&statement);
}

#[tokio::test]
async fn test_rendered_sql_executes_on_sqlite() {
    let dir = common::create_temp_dir();
    let registry = Registry::new();
    registry
        .open("sqlite3", &common::sqlite_file_source(&dir, "users.db"), common::no_options())
        .unwrap();

    let connection = registry.must_get("sqlite3");
    let pool = connection.pool().sqlite().unwrap();

    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, age INTEGER NOT NULL)")
        .execute(pool)
        .await
        .unwrap();

    let mut insert = connection.insert_into("users");
    insert
        .columns([Alias::new("name"), Alias::new("age")])
        .values_panic(["alice".into(), 30.into()])
        .values_panic(["bob".into(), 17.into()]);
    sqlx::query(&connection.must_build_sql(&insert)).execute(pool).await.unwrap();

    let mut select = connection.select(["name", "age"]);
    select
        .from(connection.table("users"))
        .and_where(connection.gte("age", 18));
    let rows: Vec<(String, i64)> = sqlx::query_as(&connection.must_build_sql(&select))
        .fetch_all(pool)
        .await
        .unwrap();
    assert_eq!(rows, vec![(String::from("alice"), 30)]);

    connection.ping().await.unwrap();
    registry.close_all().await;
}
