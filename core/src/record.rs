//! A single hydrated row.

use crate::error::{RecordListError, Result};
use crate::value::Value;
use indexmap::IndexMap;

/// Column values of one row, keyed by column name in column order.
pub type Fields = IndexMap<String, Value>;

/// One fully populated row of a named table.
///
/// A record always carries an `id` field; construction fails without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    table: String,
    fields: Fields,
}

impl Record {
    pub fn new(table: impl Into<String>, fields: Fields) -> Result<Self> {
        let table = table.into();
        if !fields.contains_key("id") {
            return Err(RecordListError::MissingId { table });
        }
        Ok(Self { table, fields })
    }

    /// Builds a record from `(column, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(table: impl Into<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::new(table, fields)
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn id(&self) -> &Value {
        // Presence is checked in `new`.
        &self.fields["id"]
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
