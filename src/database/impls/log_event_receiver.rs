use std::collections::BTreeMap;
use log::{debug, error, trace};
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::log_event_receiver::LogEventReceiver;
use crate::database::traits::event_receiver::EventReceiver;

const LOG_PREFIX: &str = "[SQL]";

impl EventReceiver for LogEventReceiver {
    fn event(&self, name: &str) {
        debug!("{} {}", LOG_PREFIX, name);
    }

    fn event_kv(&self, name: &str, kvs: &BTreeMap<String, String>) {
        let pairs: Vec<String> = kvs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        debug!("{} {} {}", LOG_PREFIX, name, pairs.join(" "));
    }

    fn event_err(&self, name: &str, err: &DatabaseError) {
        error!("{} {} failed: {}", LOG_PREFIX, name, err);
    }

    fn timing(&self, name: &str, nanoseconds: u64) {
        trace!("{} {} took {}ns", LOG_PREFIX, name, nanoseconds);
    }
}
