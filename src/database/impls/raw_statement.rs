use sea_query::Value;
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::dialect::Dialect;
use crate::database::enums::statement_kind::StatementKind;
use crate::database::helpers::interpolate;
use crate::database::structs::raw_statement::RawStatement;

impl RawStatement {
    pub fn new<I, V>(kind: StatementKind, sql: &str, values: I) -> RawStatement
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        RawStatement {
            kind,
            sql: sql.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Binds one more value to the next unfilled placeholder.
    pub fn bind<V: Into<Value>>(&mut self, value: V) -> &mut Self {
        self.values.push(value.into());
        self
    }

    pub fn interpolate(&self, dialect: Dialect) -> Result<String, DatabaseError> {
        interpolate(dialect, &self.sql, &self.values)
    }
}
