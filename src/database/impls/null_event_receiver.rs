use std::collections::BTreeMap;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::null_event_receiver::NullEventReceiver;
use crate::database::traits::event_receiver::EventReceiver;

impl EventReceiver for NullEventReceiver {
    fn event(&self, _name: &str) {}

    fn event_kv(&self, _name: &str, _kvs: &BTreeMap<String, String>) {}

    fn event_err(&self, _name: &str, _err: &DatabaseError) {}

    fn timing(&self, _name: &str, _nanoseconds: u64) {}
}
