//! Database enumeration types.

/// Supported engine identifiers (mysql, postgres, sqlite3).
pub mod database_drivers;

/// Errors raised by the registry and the statement facade.
pub mod database_error;

/// Native connection pools, one variant per engine.
pub mod database_pool;

/// SQL dialects resolved from an engine.
pub mod dialect;

/// Statement kinds of hand-written SQL.
pub mod statement_kind;
