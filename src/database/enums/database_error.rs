//! Error type of the registry and the statement facade.
//!
//! Fallible operations (`open`, `get`, `build_sql`) return [`DatabaseError`];
//! the `must_*` variants panic with its message instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Engine string outside `mysql`, `postgres`, `sqlite3`.
    #[error("unsupported engine {0:?}")]
    UnsupportedEngine(String),

    /// `open` called twice for the same name.
    #[error("duplicate db instance {0:?}")]
    DuplicateInstance(String),

    /// `get` called for a name that was never opened.
    #[error("db instance for {0:?} not found")]
    InstanceNotFound(String),

    /// The driver rejected the connection source.
    #[error("unable to open {engine} connection: {source}")]
    ConnectionOpenFailed {
        engine: String,
        #[source]
        source: sqlx::Error,
    },

    /// Rendering a statement to SQL text failed.
    #[error("unable to build sql: {0}")]
    BuildFailed(String),
}
