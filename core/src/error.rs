use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordListError {
    /// A table, column or parameter name is not a plain SQL identifier
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Table is not part of the known schema
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Column is not part of the known schema for its table
    #[error("Unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },

    /// Order-by clause could not be parsed
    #[error("Invalid order by clause: {0:?}")]
    InvalidOrderBy(String),

    /// The store failed to execute a statement
    #[error("Execution error: {message} ({sql})")]
    Execution { message: String, sql: String },

    /// A scanned row or hydrated record carries no `id`
    #[error("Row from table {table} has no id column")]
    MissingId { table: String },

    /// An id returned by the scan could not be hydrated
    #[error("No record in {table} with id {id}")]
    RecordNotFound { table: String, id: String },

    /// The hydrator returned a record belonging to another table
    #[error("Expected a record of table {expected}, found {found}")]
    TableMismatch { expected: String, found: String },

    /// The hydrator returned a record whose id differs from the scanned one
    #[error("Expected record {expected} of table {table}, found {found}")]
    IdMismatch {
        table: String,
        expected: String,
        found: String,
    },

    /// Error serializing records
    #[error("JSON error: {0}")]
    Json(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

impl RecordListError {
    /// Wraps a store failure together with the statement that caused it.
    pub fn execution(message: impl Into<String>, sql: impl Into<String>) -> Self {
        RecordListError::Execution {
            message: message.into(),
            sql: sql.into(),
        }
    }

    /// Returns the offending statement for store failures.
    pub fn sql(&self) -> Option<&str> {
        match self {
            RecordListError::Execution { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

/// Result type for record list operations
pub type Result<T> = std::result::Result<T, RecordListError>;
