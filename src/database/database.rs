//! The process-wide registry.
//!
//! Thin wrappers over one lazily created [`Registry`]; code that prefers
//! explicit wiring can build its own `Registry` and pass it around instead.

use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::connection::{Connection, ConnectionOption};
use crate::database::structs::registry::Registry;

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub fn open<I>(engine: &str, source: &str, options: I) -> Result<(), DatabaseError>
where
    I: IntoIterator<Item = Option<ConnectionOption>>,
{
    REGISTRY.open(engine, source, options)
}

pub fn get(engine: &str) -> Result<Arc<Connection>, DatabaseError> {
    REGISTRY.get(engine)
}

pub fn must_get(engine: &str) -> Arc<Connection> {
    REGISTRY.must_get(engine)
}

pub fn set_default_engine(engine: &str) {
    REGISTRY.set_default_engine(engine)
}

pub fn default_engine() -> String {
    REGISTRY.default_engine()
}
