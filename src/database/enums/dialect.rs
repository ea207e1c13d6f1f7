/// Quoting, placeholder and literal rules of one SQL flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    MySQL,
    PostgreSQL,
    SQLite3,
}
