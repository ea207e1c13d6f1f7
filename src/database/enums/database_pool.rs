use sqlx::{
    MySql,
    Pool,
    Postgres,
    Sqlite
};

/// The native handle owned by a connection.
#[derive(Debug, Clone)]
pub enum DatabasePool {
    MySql(Pool<MySql>),
    Postgres(Pool<Postgres>),
    Sqlite(Pool<Sqlite>),
}
