use sea_query::Value;
use crate::database::enums::statement_kind::StatementKind;

/// SQL text plus the values bound to its `?` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStatement {
    pub(crate) kind: StatementKind,
    pub(crate) sql: String,
    pub(crate) values: Vec<Value>,
}
