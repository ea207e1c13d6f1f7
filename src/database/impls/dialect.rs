use sea_query::{
    MysqlQueryBuilder,
    PostgresQueryBuilder,
    QueryBuilder,
    QueryStatementWriter,
    SqliteQueryBuilder,
    Value
};
use crate::database::enums::dialect::Dialect;

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySQL => "MySQL",
            Dialect::PostgreSQL => "PgSQL",
            Dialect::SQLite3 => "SQLite",
        }
    }

    pub fn identifier_quote(&self) -> char {
        match self {
            Dialect::MySQL => '`',
            Dialect::PostgreSQL | Dialect::SQLite3 => '"',
        }
    }

    pub fn render<S: QueryStatementWriter>(&self, statement: &S) -> String {
        match self {
            Dialect::MySQL => statement.to_string(MysqlQueryBuilder),
            Dialect::PostgreSQL => statement.to_string(PostgresQueryBuilder),
            Dialect::SQLite3 => statement.to_string(SqliteQueryBuilder),
        }
    }

    pub fn value_to_string(&self, value: &Value) -> String {
        match self {
            Dialect::MySQL => MysqlQueryBuilder.value_to_string(value),
            Dialect::PostgreSQL => PostgresQueryBuilder.value_to_string(value),
            Dialect::SQLite3 => SqliteQueryBuilder.value_to_string(value),
        }
    }
}
