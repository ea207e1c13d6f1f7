use std::fmt;
use std::str::FromStr;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::dialect::Dialect;

pub const MYSQL: &str = "mysql";
pub const POSTGRESQL: &str = "postgres";
pub const SQLITE3: &str = "sqlite3";

impl DatabaseDrivers {
    pub const ALL: [DatabaseDrivers; 3] = [
        DatabaseDrivers::mysql,
        DatabaseDrivers::postgres,
        DatabaseDrivers::sqlite3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseDrivers::mysql => MYSQL,
            DatabaseDrivers::postgres => POSTGRESQL,
            DatabaseDrivers::sqlite3 => SQLITE3,
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            DatabaseDrivers::mysql => Dialect::MySQL,
            DatabaseDrivers::postgres => Dialect::PostgreSQL,
            DatabaseDrivers::sqlite3 => Dialect::SQLite3,
        }
    }
}

impl FromStr for DatabaseDrivers {
    type Err = DatabaseError;

    fn from_str(engine: &str) -> Result<Self, Self::Err> {
        match engine {
            MYSQL => Ok(DatabaseDrivers::mysql),
            POSTGRESQL => Ok(DatabaseDrivers::postgres),
            SQLITE3 => Ok(DatabaseDrivers::sqlite3),
            _ => Err(DatabaseError::UnsupportedEngine(engine.to_string())),
        }
    }
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
