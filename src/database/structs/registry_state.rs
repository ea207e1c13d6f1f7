use std::collections::BTreeMap;
use std::sync::Arc;
use crate::database::structs::connection::Connection;

#[derive(Default)]
pub struct RegistryState {
    pub(crate) default_engine: String,
    pub(crate) instances: BTreeMap<String, Arc<Connection>>,
}
