use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::dialect::Dialect;
use crate::database::enums::statement_kind::StatementKind;

/// A statement that can be rendered to final SQL text.
///
/// Implemented for the `sea-query` statements handed out by
/// [`Connection`](crate::database::structs::connection::Connection) and for
/// [`RawStatement`](crate::database::structs::raw_statement::RawStatement).
pub trait SqlBuilder {
    /// Renders with every bound value inlined as a literal of `dialect`.
    fn to_sql(&self, dialect: Dialect) -> Result<String, DatabaseError>;

    fn statement_kind(&self) -> StatementKind;
}
