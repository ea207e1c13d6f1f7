use std::sync::Arc;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_pool::DatabasePool;
use crate::database::enums::dialect::Dialect;
use crate::database::traits::event_receiver::EventReceiver;

pub struct Connection {
    pub(crate) engine: DatabaseDrivers,
    pub(crate) dialect: Dialect,
    pub(crate) pool: DatabasePool,
    pub(crate) events: Arc<dyn EventReceiver>,
}

/// Applied to a freshly built [`Connection`] before it is published.
pub type ConnectionOption = Box<dyn FnOnce(&mut Connection) + Send>;
