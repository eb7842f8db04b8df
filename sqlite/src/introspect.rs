//! SQLite database introspection
//!
//! Reads user tables and their columns from `sqlite_master` and
//! `pragma_table_info` and turns them into a [`Schema`] allow-list.

use crate::store::SqliteStore;
use recordlist_core::{Result, Schema, is_valid_identifier};
use rusqlite::Connection;

/// Query to get all user tables
pub const TABLES_QUERY: &str = r#"
    SELECT name
    FROM sqlite_master
    WHERE type = 'table'
      AND name NOT LIKE 'sqlite\_%' ESCAPE '\'
    ORDER BY name COLLATE NOCASE
"#;

/// Query to get the columns of one table, in declaration order
pub const COLUMNS_QUERY: &str = r#"
    SELECT name
    FROM pragma_table_info(?1)
    ORDER BY cid
"#;

/// Builds a [`Schema`] from every user table of `conn`.
///
/// Tables without an `id` column cannot be loaded by id and are left out, as
/// are tables or columns whose names are not plain identifiers.
pub fn introspect(conn: &Connection) -> Result<Schema> {
    let tables: Vec<String> = {
        let mut stmt = conn.prepare(TABLES_QUERY)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    let mut schema = Schema::new();
    let mut columns_stmt = conn.prepare(COLUMNS_QUERY)?;
    for table in tables {
        if !is_valid_identifier(&table) {
            continue;
        }
        let columns: Vec<String> = columns_stmt
            .query_map([&table], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<_>>()?;
        if !columns.iter().any(|c| c == "id") {
            continue;
        }
        schema.add_table(&table, columns.into_iter().filter(|c| is_valid_identifier(c)))?;
    }
    Ok(schema)
}

impl SqliteStore {
    /// Introspects this store's connection. See [`introspect`].
    pub fn introspect(&self) -> Result<Schema> {
        introspect(self.connection())
    }
}
