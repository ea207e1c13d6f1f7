use std::sync::Arc;
use log::{info, warn};
use parking_lot::RwLock;
use crate::database::enums::database_error::DatabaseError;
use crate::database::structs::connection::{Connection, ConnectionOption};
use crate::database::structs::registry::Registry;
use crate::database::structs::registry_state::RegistryState;

const LOG_PREFIX: &str = "[REGISTRY]";

impl Registry {
    pub fn new() -> Registry {
        Registry {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Sets the engine used when callers pass an empty name.
    ///
    /// Meant to be called once at startup, before connections are opened or
    /// fetched from other threads. The value sits behind the registry lock, so
    /// a concurrent change is not a data race, but readers running at the same
    /// time may resolve either the old or the new name.
    pub fn set_default_engine(&self, engine: &str) {
        self.state.write().default_engine = engine.to_string();
    }

    pub fn default_engine(&self) -> String {
        self.state.read().default_engine.clone()
    }

    /// Opens a connection for `engine` and stores it under that name.
    ///
    /// Fails without touching the registry when the name is already taken,
    /// the engine is unsupported or the driver rejects `source`.
    #[tracing::instrument(level = "debug", skip(self, source, options))]
    pub fn open<I>(&self, engine: &str, source: &str, options: I) -> Result<(), DatabaseError>
    where
        I: IntoIterator<Item = Option<ConnectionOption>>,
    {
        let mut state = self.state.write();
        let name = state.resolve(engine);

        if state.instances.contains_key(&name) {
            warn!("{} Instance {:?} is already open", LOG_PREFIX, name);
            return Err(DatabaseError::DuplicateInstance(name));
        }

        let connection = Connection::new(&name, source, options)?;
        info!("{} Opened {} connection ({})", LOG_PREFIX, name, connection.dialect().name());
        state.instances.insert(name, Arc::new(connection));

        Ok(())
    }

    pub fn get(&self, engine: &str) -> Result<Arc<Connection>, DatabaseError> {
        let state = self.state.read();
        let name = state.resolve(engine);
        match state.instances.get(&name) {
            Some(connection) => Ok(connection.clone()),
            None => Err(DatabaseError::InstanceNotFound(name)),
        }
    }

    /// Like [`Registry::get`], panicking when the instance is missing.
    pub fn must_get(&self, engine: &str) -> Arc<Connection> {
        match self.get(engine) {
            Ok(connection) => connection,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn contains(&self, engine: &str) -> bool {
        let state = self.state.read();
        state.instances.contains_key(&state.resolve(engine))
    }

    /// Registered names, sorted.
    pub fn engines(&self) -> Vec<String> {
        self.state.read().instances.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().instances.is_empty()
    }

    /// Closes every pool. Entries stay registered.
    pub async fn close_all(&self) {
        let connections: Vec<(String, Arc<Connection>)> = {
            let state = self.state.read();
            state
                .instances
                .iter()
                .map(|(name, connection)| (name.clone(), connection.clone()))
                .collect()
        };
        for (name, connection) in connections {
            info!("{} Closing {} connection", LOG_PREFIX, name);
            connection.close().await;
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}
