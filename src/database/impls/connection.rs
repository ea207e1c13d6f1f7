use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use sea_query::{
    Asterisk,
    ColumnRef,
    Condition,
    DeleteStatement,
    Expr,
    InsertStatement,
    IntoCondition,
    Query,
    SelectStatement,
    SimpleExpr,
    TableRef,
    UpdateStatement,
    Value
};
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::database_error::DatabaseError;
use crate::database::enums::database_pool::DatabasePool;
use crate::database::enums::dialect::Dialect;
use crate::database::enums::statement_kind::StatementKind;
use crate::database::helpers::{column_ref, interpolate, is_identifier, is_null_value, quote_identifier, table_ref};
use crate::database::structs::connection::{Connection, ConnectionOption};
use crate::database::structs::log_event_receiver::LogEventReceiver;
use crate::database::structs::null_event_receiver::NullEventReceiver;
use crate::database::structs::raw_statement::RawStatement;
use crate::database::traits::event_receiver::EventReceiver;
use crate::database::traits::sql_builder::SqlBuilder;

impl Connection {
    /// Resolves the dialect of `engine`, opens its pool and applies
    /// `options` in order, skipping `None`.
    #[tracing::instrument(level = "debug", skip(source, options))]
    pub fn new<I>(engine: &str, source: &str, options: I) -> Result<Connection, DatabaseError>
    where
        I: IntoIterator<Item = Option<ConnectionOption>>,
    {
        let engine = DatabaseDrivers::from_str(engine)?;
        let pool = DatabasePool::open(engine, source)?;

        let mut connection = Connection {
            engine,
            dialect: engine.dialect(),
            pool,
            events: Arc::new(NullEventReceiver),
        };
        for option in options.into_iter().flatten() {
            option(&mut connection);
        }

        let mut kvs = BTreeMap::new();
        kvs.insert(String::from("engine"), engine.to_string());
        kvs.insert(String::from("dialect"), connection.dialect.name().to_string());
        connection.events.event_kv("open", &kvs);

        Ok(connection)
    }

    pub fn with_event_receiver(receiver: Arc<dyn EventReceiver>) -> ConnectionOption {
        Box::new(move |connection: &mut Connection| {
            connection.events = receiver;
        })
    }

    pub fn with_log_events() -> ConnectionOption {
        Connection::with_event_receiver(Arc::new(LogEventReceiver))
    }

    pub fn engine(&self) -> DatabaseDrivers {
        self.engine
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The native pool, for executing what [`Connection::build_sql`] renders.
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    pub fn events(&self) -> &Arc<dyn EventReceiver> {
        &self.events
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.pool.ping().await
    }

    pub async fn close(&self) {
        self.pool.close().await;
        self.events.event("close");
    }

    pub fn table(&self, name: &str) -> TableRef {
        table_ref(name)
    }

    pub fn column(&self, name: &str) -> ColumnRef {
        column_ref(name)
    }

    pub fn quote_identifier(&self, identifier: &str) -> String {
        quote_identifier(self.dialect, identifier)
    }

    pub fn insert_into(&self, table: &str) -> InsertStatement {
        Query::insert().into_table(table_ref(table)).to_owned()
    }

    pub fn insert_by_sql<I, V>(&self, sql: &str, values: I) -> RawStatement
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        RawStatement::new(StatementKind::Insert, sql, values)
    }

    /// `*` selects everything, plain or dotted identifiers are quoted, and any
    /// other column (functions, aliases) is written as given.
    pub fn select<I, S>(&self, columns: I) -> SelectStatement
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut statement = Query::select();
        for column in columns {
            let column = column.as_ref();
            if column == "*" {
                statement.column(Asterisk);
            } else if is_identifier(column) {
                statement.column(column_ref(column));
            } else {
                statement.expr(Expr::cust(column));
            }
        }
        statement
    }

    pub fn select_by_sql<I, V>(&self, sql: &str, values: I) -> RawStatement
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        RawStatement::new(StatementKind::Select, sql, values)
    }

    pub fn update(&self, table: &str) -> UpdateStatement {
        Query::update().table(table_ref(table)).to_owned()
    }

    pub fn update_by_sql<I, V>(&self, sql: &str, values: I) -> RawStatement
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        RawStatement::new(StatementKind::Update, sql, values)
    }

    pub fn delete_from(&self, table: &str) -> DeleteStatement {
        Query::delete().from_table(table_ref(table)).to_owned()
    }

    pub fn delete_by_sql<I, V>(&self, sql: &str, values: I) -> RawStatement
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        RawStatement::new(StatementKind::Delete, sql, values)
    }

    /// A raw SQL fragment with `?` placeholders, interpolated for this
    /// connection's dialect.
    pub fn expr<I, V>(&self, sql: &str, values: I) -> Result<SimpleExpr, DatabaseError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Ok(Expr::cust(interpolate(self.dialect, sql, &values)?))
    }

    pub fn and<I, C>(&self, conditions: I) -> Condition
    where
        I: IntoIterator<Item = C>,
        C: IntoCondition,
    {
        conditions
            .into_iter()
            .fold(Condition::all(), |all, condition| all.add(condition.into_condition()))
    }

    pub fn or<I, C>(&self, conditions: I) -> Condition
    where
        I: IntoIterator<Item = C>,
        C: IntoCondition,
    {
        conditions
            .into_iter()
            .fold(Condition::any(), |any, condition| any.add(condition.into_condition()))
    }

    /// `column = value`, or `column IS NULL` for a null value.
    pub fn eq<V: Into<Value>>(&self, column: &str, value: V) -> SimpleExpr {
        let value = value.into();
        if is_null_value(&value) {
            return Expr::col(column_ref(column)).is_null();
        }
        Expr::col(column_ref(column)).eq(value)
    }

    /// `column <> value`, or `column IS NOT NULL` for a null value.
    pub fn neq<V: Into<Value>>(&self, column: &str, value: V) -> SimpleExpr {
        let value = value.into();
        if is_null_value(&value) {
            return Expr::col(column_ref(column)).is_not_null();
        }
        Expr::col(column_ref(column)).ne(value)
    }

    pub fn gt<V: Into<Value>>(&self, column: &str, value: V) -> SimpleExpr {
        Expr::col(column_ref(column)).gt(value.into())
    }

    pub fn gte<V: Into<Value>>(&self, column: &str, value: V) -> SimpleExpr {
        Expr::col(column_ref(column)).gte(value.into())
    }

    pub fn lt<V: Into<Value>>(&self, column: &str, value: V) -> SimpleExpr {
        Expr::col(column_ref(column)).lt(value.into())
    }

    pub fn lte<V: Into<Value>>(&self, column: &str, value: V) -> SimpleExpr {
        Expr::col(column_ref(column)).lte(value.into())
    }

    /// Renders `builder` for this connection's dialect with all values
    /// inlined.
    pub fn build_sql<B: SqlBuilder + ?Sized>(&self, builder: &B) -> Result<String, DatabaseError> {
        let started = Instant::now();
        let event = builder.statement_kind().build_event();
        match builder.to_sql(self.dialect) {
            Ok(sql) => {
                self.events.timing(event, started.elapsed().as_nanos() as u64);
                Ok(sql)
            }
            Err(error) => {
                self.events.event_err(event, &error);
                Err(error)
            }
        }
    }

    /// Like [`Connection::build_sql`], panicking when rendering fails.
    pub fn must_build_sql<B: SqlBuilder + ?Sized>(&self, builder: &B) -> String {
        match self.build_sql(builder) {
            Ok(sql) => sql,
            Err(error) => panic!("{}", error),
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("engine", &self.engine)
            .field("dialect", &self.dialect)
            .finish_non_exhaustive()
    }
}
