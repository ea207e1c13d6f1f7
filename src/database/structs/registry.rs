use parking_lot::RwLock;
use crate::database::structs::registry_state::RegistryState;

pub struct Registry {
    pub(crate) state: RwLock<RegistryState>,
}
