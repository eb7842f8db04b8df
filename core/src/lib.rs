//! Core types for predicate-driven record loading.
//!
//! This crate has no database driver of its own. It provides the pieces a
//! driver and a collection share:
//!
//! - [`Value`], [`Record`] and [`Predicate`] for row data and equality filters
//! - [`QueryComposer`], [`OrderBy`], [`RawWhere`] and [`Statement`] for building
//!   the id scan
//! - [`Schema`] for allow-listing tables and columns
//! - [`RowStore`] and [`RecordHydrator`], the contracts a driver implements

pub mod composer;
pub mod error;
pub mod ident;
pub mod order_by;
mod placeholder;
pub mod predicate;
pub mod record;
pub mod schema;
pub mod statement;
pub mod store;
pub mod tracing;
pub mod value;

pub use composer::QueryComposer;
pub use error::{RecordListError, Result};
pub use ident::{is_valid_identifier, validate_identifier};
pub use order_by::{Direction, OrderBy, OrderTerm};
pub use placeholder::Placeholder;
pub use predicate::Predicate;
pub use record::{Fields, Record};
pub use schema::{Schema, TableSchema};
pub use statement::{RawWhere, Statement};
pub use store::{RecordHydrator, RowStore};
pub use value::Value;
