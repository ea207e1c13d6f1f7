use crate::database::structs::registry_state::RegistryState;

impl RegistryState {
    /// An empty engine name stands for the default engine.
    pub fn resolve(&self, engine: &str) -> String {
        if engine.is_empty() {
            return self.default_engine.clone();
        }
        engine.to_string()
    }
}
