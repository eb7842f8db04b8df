//! SQLite row store for recordlist, backed by rusqlite.
//!
//! [`SqliteStore`] implements both [`RowStore`](recordlist_core::RowStore) and
//! [`RecordHydrator`](recordlist_core::RecordHydrator), and can introspect the
//! database into a [`Schema`](recordlist_core::Schema) allow-list.

pub mod introspect;
pub mod store;

pub use store::SqliteStore;
