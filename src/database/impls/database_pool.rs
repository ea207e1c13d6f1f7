use std::str::FromStr;
use std::time::Duration;
use tokio::runtime::Handle;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, MySql, Pool, Postgres, Sqlite};
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::database_pool::DatabasePool;

const SLOW_STATEMENT: Duration = Duration::from_secs(1);

impl DatabasePool {
    /// Parses `source` and builds a pool without connecting.
    ///
    /// The first connection is made on first use. The pool spawns its
    /// maintenance task on the current Tokio runtime, so calling this outside
    /// one fails with `ConnectionOpenFailed`.
    pub fn open(engine: DatabaseDrivers, source: &str) -> Result<DatabasePool, DatabaseError> {
        let failed = |source: Error| DatabaseError::ConnectionOpenFailed {
            engine: engine.to_string(),
            source,
        };

        Handle::try_current().map_err(|error| failed(Error::Configuration(Box::new(error))))?;

        match engine {
            DatabaseDrivers::mysql => {
                let options = MySqlConnectOptions::from_str(source)
                    .map_err(failed)?
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, SLOW_STATEMENT);
                Ok(DatabasePool::MySql(MySqlPoolOptions::new().connect_lazy_with(options)))
            }
            DatabaseDrivers::postgres => {
                let options = PgConnectOptions::from_str(source)
                    .map_err(failed)?
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, SLOW_STATEMENT);
                Ok(DatabasePool::Postgres(PgPoolOptions::new().connect_lazy_with(options)))
            }
            DatabaseDrivers::sqlite3 => {
                let options = SqliteConnectOptions::from_str(source)
                    .map_err(failed)?
                    .create_if_missing(true)
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, SLOW_STATEMENT);
                Ok(DatabasePool::Sqlite(SqlitePoolOptions::new().connect_lazy_with(options)))
            }
        }
    }

    pub fn mysql(&self) -> Option<&Pool<MySql>> {
        match self {
            DatabasePool::MySql(pool) => Some(pool),
            _ => None,
        }
    }

    pub fn postgres(&self) -> Option<&Pool<Postgres>> {
        match self {
            DatabasePool::Postgres(pool) => Some(pool),
            _ => None,
        }
    }

    pub fn sqlite(&self) -> Option<&Pool<Sqlite>> {
        match self {
            DatabasePool::Sqlite(pool) => Some(pool),
            _ => None,
        }
    }

    /// Runs `SELECT 1`, connecting first if the pool is still empty.
    pub async fn ping(&self) -> Result<(), Error> {
        match self {
            DatabasePool::MySql(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            DatabasePool::Postgres(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            DatabasePool::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        }
    }

    pub async fn close(&self) {
        match self {
            DatabasePool::MySql(pool) => pool.close().await,
            DatabasePool::Postgres(pool) => pool.close().await,
            DatabasePool::Sqlite(pool) => pool.close().await,
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            DatabasePool::MySql(pool) => pool.is_closed(),
            DatabasePool::Postgres(pool) => pool.is_closed(),
            DatabasePool::Sqlite(pool) => pool.is_closed(),
        }
    }
}
