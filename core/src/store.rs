//! The two store contracts a collection loads through.
//!
//! A load runs one id scan through [`RowStore`] and then asks the
//! [`RecordHydrator`] for each id in turn. No batching or caching happens
//! between the two.

use crate::error::Result;
use crate::record::Record;
use crate::statement::Statement;
use crate::value::Value;

/// Executes id-scan statements.
pub trait RowStore {
    /// Runs `statement` and returns the `id` column of every result row, in
    /// result order.
    fn select_ids(&self, statement: &Statement) -> Result<Vec<Value>>;
}

/// Loads one row by primary key.
pub trait RecordHydrator {
    /// Returns the row of `table` whose `id` equals `id` with every column
    /// populated, or `None` if there is no such row.
    fn hydrate(&self, table: &str, id: &Value) -> Result<Option<Record>>;
}

impl<T: RowStore + ?Sized> RowStore for &T {
    fn select_ids(&self, statement: &Statement) -> Result<Vec<Value>> {
        (**self).select_ids(statement)
    }
}

impl<T: RecordHydrator + ?Sized> RecordHydrator for &T {
    fn hydrate(&self, table: &str, id: &Value) -> Result<Option<Record>> {
        (**self).hydrate(table, id)
    }
}
