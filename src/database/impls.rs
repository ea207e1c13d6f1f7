//! Implementation blocks for the database types.

pub mod connection;
pub mod database_drivers;
pub mod database_pool;
pub mod dialect;
pub mod log_event_receiver;
pub mod null_event_receiver;
pub mod raw_statement;
pub mod registry;
pub mod registry_state;
pub mod sql_builder;
pub mod statement_kind;
