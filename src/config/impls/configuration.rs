use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            default_engine: Some(DatabaseDrivers::sqlite3),
            databases: vec!(
                DatabaseConfig {
                    engine: DatabaseDrivers::sqlite3,
                    source: String::from("sqlite://data.db"),
                    log_events: false,
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        Ok(toml::to_string(self)?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`.
    ///
    /// With `create` set, a missing or broken file is replaced by the default
    /// configuration and an error is still returned so the caller can stop
    /// and let the user edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let saved = Configuration::init()
                    .to_toml()
                    .and_then(|config_toml| Configuration::save_file(path, config_toml));
                return match saved {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        eprintln!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {}", error);
            return Err(error);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        parse_log_level(self.log_level.as_str())?;

        let mut seen = BTreeSet::new();
        for database in &self.databases {
            if !seen.insert(database.engine) {
                return Err(CustomError::new(&format!(
                    "[DB: {}] configured more than once",
                    database.engine
                )));
            }
            if database.source.trim().is_empty() {
                return Err(CustomError::new(&format!(
                    "[DB: {}] source is empty",
                    database.engine
                )));
            }
        }

        if let Some(engine) = self.default_engine {
            if !seen.contains(&engine) {
                return Err(CustomError::new(&format!(
                    "default engine {} has no [[databases]] entry",
                    engine
                )));
            }
        }

        Ok(())
    }
}
