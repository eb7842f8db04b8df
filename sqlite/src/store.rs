//! rusqlite-backed store

use recordlist_core::{
    Fields, Record, RecordHydrator, RecordListError, Result, RowStore, Statement, Value,
    recordlist_trace_query, validate_identifier,
};
use rusqlite::{Connection, ToSql, named_params};
use std::path::Path;

/// Executes id scans and per-id hydration against one SQLite connection.
///
/// ```
/// use recordlist_core::{OrderBy, QueryComposer, RowStore, Value};
/// use recordlist_sqlite::SqliteStore;
///
/// let store = SqliteStore::open_in_memory().unwrap();
/// store
///     .connection()
///     .execute_batch("create table t (id integer primary key); insert into t values (2), (1);")
///     .unwrap();
///
/// let stmt = QueryComposer::new()
///     .compose_unconditional("t", &OrderBy::default())
///     .unwrap();
/// assert_eq!(store.select_ids(&stmt).unwrap(), [Value::Integer(1), Value::Integer(2)]);
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Connection::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn into_inner(self) -> Connection {
        self.conn
    }

    fn scan(&self, statement: &Statement) -> rusqlite::Result<Vec<Value>> {
        let named: Vec<(&str, &dyn ToSql)> = statement
            .params()
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect();

        let mut stmt = self.conn.prepare(statement.sql())?;
        let ids = stmt.query_map(named.as_slice(), |row| row.get::<_, Value>("id"))?;
        ids.collect()
    }

    fn fetch(&self, sql: &str, id: &Value) -> rusqlite::Result<Option<Fields>> {
        let mut stmt = self.conn.prepare(sql)?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.query(named_params! { ":id": id })?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let mut fields = Fields::with_capacity(names.len());
        for (i, name) in names.into_iter().enumerate() {
            fields.insert(name, row.get::<_, Value>(i)?);
        }
        Ok(Some(fields))
    }
}

impl From<Connection> for SqliteStore {
    fn from(conn: Connection) -> Self {
        Self::new(conn)
    }
}

impl RowStore for SqliteStore {
    fn select_ids(&self, statement: &Statement) -> Result<Vec<Value>> {
        recordlist_trace_query!(statement.sql(), statement.params().len());
        self.scan(statement)
            .map_err(|e| RecordListError::execution(e.to_string(), statement.sql()))
    }
}

impl RecordHydrator for SqliteStore {
    fn hydrate(&self, table: &str, id: &Value) -> Result<Option<Record>> {
        validate_identifier(table)?;
        let sql = format!("select * from {table} where id = :id limit 1");
        recordlist_trace_query!(sql, 1);

        match self.fetch(&sql, id) {
            Ok(Some(fields)) => Record::new(table, fields).map(Some),
            Ok(None) => Ok(None),
            Err(e) => Err(RecordListError::execution(e.to_string(), sql)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordlist_core::{OrderBy, Predicate, QueryComposer, RawWhere};

    fn store() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .connection()
            .execute_batch(
                "create table accounts (
                    id integer primary key,
                    name text not null,
                    status text,
                    region text,
                    balance real
                );
                insert into accounts (id, name, status, region, balance) values
                    (1, 'Ada', 'active', 'west', 10.5),
                    (2, 'Brian', 'closed', 'west', null),
                    (3, 'Cleo', 'active', 'east', 0),
                    (4, 'Dev', 'active', 'west', 99);",
            )
            .unwrap();
        store
    }

    fn ints(ids: &[i64]) -> Vec<Value> {
        ids.iter().copied().map(Value::Integer).collect()
    }

    #[test]
    fn scans_with_bound_predicate() {
        let store = store();
        let predicate = Predicate::new()
            .where_eq("status", "active")
            .where_eq("region", "west");
        let stmt = QueryComposer::new()
            .compose_filtered("accounts", &predicate, &OrderBy::default())
            .unwrap();
        assert_eq!(store.select_ids(&stmt).unwrap(), ints(&[1, 4]));
    }

    #[test]
    fn scans_in_requested_order() {
        let store = store();
        let stmt = QueryComposer::new()
            .compose_unconditional("accounts", &OrderBy::desc("name").unwrap())
            .unwrap();
        assert_eq!(store.select_ids(&stmt).unwrap(), ints(&[4, 3, 2, 1]));
    }

    #[test]
    fn raw_where_binds_values() {
        let store = store();
        let raw = RawWhere::new("balance >= :min").bind("min", 10);
        let stmt = QueryComposer::new()
            .compose_raw_where("accounts", &raw, &OrderBy::default())
            .unwrap();
        assert_eq!(store.select_ids(&stmt).unwrap(), ints(&[1, 4]));
    }

    #[test]
    fn failed_scan_reports_statement() {
        let store = store();
        let stmt = QueryComposer::new()
            .compose_unconditional("missing_table", &OrderBy::default())
            .unwrap();
        let err = store.select_ids(&stmt).unwrap_err();
        assert_eq!(err.sql(), Some("select id from missing_table order by id"));
        assert!(matches!(err, RecordListError::Execution { .. }));
    }

    #[test]
    fn hydrates_every_column_in_order() {
        let store = store();
        let record = store.hydrate("accounts", &Value::Integer(2)).unwrap().unwrap();
        assert_eq!(record.table_name(), "accounts");
        assert_eq!(
            record.field_names().collect::<Vec<_>>(),
            ["id", "name", "status", "region", "balance"]
        );
        assert_eq!(record.get("name"), Some(&Value::from("Brian")));
        assert_eq!(record.get("balance"), Some(&Value::Null));
    }

    #[test]
    fn hydration_miss_is_none() {
        let store = store();
        assert!(store.hydrate("accounts", &Value::Integer(42)).unwrap().is_none());
    }

    #[test]
    fn hydration_rejects_bad_table_names() {
        let store = store();
        assert!(matches!(
            store.hydrate("accounts where 1", &Value::Integer(1)),
            Err(RecordListError::InvalidIdentifier(_))
        ));
    }
}
