use crate::database::enums::statement_kind::StatementKind;

impl StatementKind {
    /// Event name reported when a statement of this kind is rendered.
    pub fn build_event(&self) -> &'static str {
        match self {
            StatementKind::Select => "build_sql.select",
            StatementKind::Insert => "build_sql.insert",
            StatementKind::Update => "build_sql.update",
            StatementKind::Delete => "build_sql.delete",
        }
    }
}
