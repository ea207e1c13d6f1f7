//! Database traits.

/// Instrumentation hook of a connection.
pub mod event_receiver;

/// Rendering of a statement into SQL text for a dialect.
pub mod sql_builder;
