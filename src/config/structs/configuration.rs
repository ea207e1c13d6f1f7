use serde::{Deserialize, Serialize};
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_engine: Option<DatabaseDrivers>,
    #[serde(default)]
    pub databases: Vec<DatabaseConfig>,
}
