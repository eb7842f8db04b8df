#![allow(dead_code)]

use recordlist::sqlite::SqliteStore;

pub const ACCOUNT_ROWS: usize = 5;

/// Five accounts (three active) and three regions, inserted out of id order.
pub fn setup_db() -> SqliteStore {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "create table accounts (
            id integer primary key,
            name text not null,
            status text not null,
            region text not null,
            balance real
        );
        insert into accounts (id, name, status, region, balance) values
            (4, 'Dev', 'active', 'west', 99),
            (1, 'Ada', 'active', 'west', 10.5),
            (5, 'Eve', 'closed', 'east', null),
            (3, 'Cleo', 'active', 'east', 0),
            (2, 'Brian', 'closed', 'west', 12);

        create table regions (
            id integer primary key,
            name text not null
        );
        insert into regions (id, name) values (7, 'West'), (3, 'North'), (9, 'East');",
    )
    .unwrap();
    SqliteStore::from(conn)
}

pub fn ids<S>(collection: &recordlist::RecordCollection<'_, S>) -> Vec<i64> {
    collection
        .iter()
        .map(|record| record.id().as_i64().unwrap())
        .collect()
}
