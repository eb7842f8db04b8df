//! Known tables and columns, used as an identifier allow-list.

use crate::error::{RecordListError, Result};
use crate::ident::validate_identifier;
use indexmap::IndexMap;

/// Columns of one table, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<String>,
}

impl TableSchema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// The set of tables a composer may reference.
///
/// Every table must declare an `id` column, since the id scan selects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tables: IndexMap<String, TableSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Schema::add_table`].
    pub fn with_table<I, C>(mut self, name: &str, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.add_table(name, columns)?;
        Ok(self)
    }

    /// Registers a table, replacing any previous definition with the same name.
    pub fn add_table<I, C>(&mut self, name: &str, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        validate_identifier(name)?;
        let mut seen: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            validate_identifier(&column)?;
            if !seen.contains(&column) {
                seen.push(column);
            }
        }
        if !seen.iter().any(|c| c == "id") {
            return Err(RecordListError::MissingId {
                table: name.to_owned(),
            });
        }
        self.tables.insert(
            name.to_owned(),
            TableSchema {
                name: name.to_owned(),
                columns: seen,
            },
        );
        Ok(())
    }

    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableSchema> {
        self.tables.values()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Looks up a table, failing with [`RecordListError::UnknownTable`].
    pub fn check_table(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .get(name)
            .ok_or_else(|| RecordListError::UnknownTable(name.to_owned()))
    }

    /// Fails unless `column` is declared on `table`.
    pub fn check_column(&self, table: &str, column: &str) -> Result<()> {
        if self.check_table(table)?.has_column(column) {
            Ok(())
        } else {
            Err(RecordListError::UnknownColumn {
                table: table.to_owned(),
                column: column.to_owned(),
            })
        }
    }
}
