//! Database structures.

/// An opened connection: native pool, dialect and instrumentation.
pub mod connection;

/// Event receiver that forwards to the `log` facade.
pub mod log_event_receiver;

/// Event receiver that drops everything.
pub mod null_event_receiver;

/// Hand-written SQL with `?` placeholders.
pub mod raw_statement;

/// Name to connection map guarded by a read/write lock.
pub mod registry;

/// State held behind the registry lock.
pub mod registry_state;
