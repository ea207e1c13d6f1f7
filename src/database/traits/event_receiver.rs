use std::collections::BTreeMap;
use crate::database::enums::database_error::DatabaseError;

/// Receives what a connection does: opens, rendering timings and failures.
#[cfg_attr(test, mockall::automock)]
pub trait EventReceiver: Send + Sync {
    fn event(&self, name: &str);

    fn event_kv(&self, name: &str, kvs: &BTreeMap<String, String>);

    fn event_err(&self, name: &str, err: &DatabaseError);

    fn timing(&self, name: &str, nanoseconds: u64);
}
