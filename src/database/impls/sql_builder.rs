use sea_query::{
    DeleteStatement,
    InsertStatement,
    SelectStatement,
    UpdateStatement
};
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::dialect::Dialect;
use crate::database::enums::statement_kind::StatementKind;
use crate::database::structs::raw_statement::RawStatement;
use crate::database::traits::sql_builder::SqlBuilder;

impl SqlBuilder for SelectStatement {
    fn to_sql(&self, dialect: Dialect) -> Result<String, DatabaseError> {
        Ok(dialect.render(self))
    }

    fn statement_kind(&self) -> StatementKind {
        StatementKind::Select
    }
}

impl SqlBuilder for InsertStatement {
    fn to_sql(&self, dialect: Dialect) -> Result<String, DatabaseError> {
        Ok(dialect.render(self))
    }

    fn statement_kind(&self) -> StatementKind {
        StatementKind::Insert
    }
}

impl SqlBuilder for UpdateStatement {
    fn to_sql(&self, dialect: Dialect) -> Result<String, DatabaseError> {
        Ok(dialect.render(self))
    }

    fn statement_kind(&self) -> StatementKind {
        StatementKind::Update
    }
}

impl SqlBuilder for DeleteStatement {
    fn to_sql(&self, dialect: Dialect) -> Result<String, DatabaseError> {
        Ok(dialect.render(self))
    }

    fn statement_kind(&self) -> StatementKind {
        StatementKind::Delete
    }
}

impl SqlBuilder for RawStatement {
    fn to_sql(&self, dialect: Dialect) -> Result<String, DatabaseError> {
        self.interpolate(dialect)
    }

    fn statement_kind(&self) -> StatementKind {
        self.kind
    }
}
