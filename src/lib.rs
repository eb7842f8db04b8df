//! # recordlist
//!
//! Predicate-driven record collections over a SQL row store.
//!
//! A [`RecordCollection`] is bound to one table. Loading it runs a single
//! `select id` scan, then hydrates every id into a fully populated
//! [`Record`] through the store, in scan order. The loaded set can be
//! narrowed in memory with [`RecordCollection::filter`] and projected into
//! HTML, JSON, lookups and choice maps.
//!
//! ## Quick Start
//!
//! ```rust
//! use recordlist::prelude::*;
//! use recordlist::sqlite::SqliteStore;
//!
//! # fn main() -> recordlist::Result<()> {
//! let store = SqliteStore::open_in_memory()?;
//! store.connection().execute_batch(
//!     "create table regions (id integer primary key, name text);
//!      insert into regions values (1, 'West'), (2, 'East');",
//! )?;
//!
//! let mut regions = RecordCollection::new(&store, "regions")?;
//! regions.load("name")?;
//!
//! assert_eq!(regions.as_json()?, r#"[{"id":2,"name":"East"},{"id":1,"name":"West"}]"#);
//! assert_eq!(regions.record_number_by_field("name", "West"), Some(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Stores
//!
//! Collections load through any type implementing both [`RowStore`] and
//! [`RecordHydrator`]. The `rusqlite` feature (on by default) provides
//! [`sqlite::SqliteStore`].

mod collection;
pub mod config;
pub mod projection;

pub use collection::{LoadOutcome, RecordCollection};
pub use config::{CollectionConfig, ConfigError, MissingRecordPolicy};
pub use projection::{Choices, HtmlSelect};

/// Result type for recordlist operations
pub use recordlist_core::Result;

/// Error types
pub mod error {
    pub use recordlist_core::error::RecordListError;
}

pub use recordlist_core::{
    Direction, Fields, OrderBy, Placeholder, Predicate, QueryComposer, RawWhere, Record,
    RecordHydrator, RecordListError, RowStore, Schema, Statement, TableSchema, Value,
    is_valid_identifier, validate_identifier,
};

/// SQLite row store backed by rusqlite.
#[cfg(feature = "rusqlite")]
pub mod sqlite {
    pub use recordlist_sqlite::SqliteStore;
    pub use recordlist_sqlite::introspect::introspect;
}

/// Common imports.
pub mod prelude {
    pub use crate::collection::{LoadOutcome, RecordCollection};
    pub use crate::config::{CollectionConfig, MissingRecordPolicy};
    pub use crate::projection::{Choices, HtmlSelect};
    pub use recordlist_core::{
        OrderBy, Predicate, RawWhere, Record, RecordHydrator, RecordListError, RowStore, Value,
    };
}
