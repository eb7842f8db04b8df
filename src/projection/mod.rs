//! Read-only projections of loaded records.
//!
//! Each projection is a plain function over a record slice, so it can be used
//! on any `&[Record]`. [`RecordCollection`](crate::RecordCollection) exposes
//! the same operations as methods.

pub mod choices;
pub mod html;
pub mod json;
pub mod lookup;

pub use choices::{Choices, as_choices};
pub use html::{HtmlSelect, as_html_select};
pub use json::as_json;
pub use lookup::{record_by_field, record_number_by_field};

use crate::collection::RecordCollection;
use recordlist_core::{Record, Result, Value};

impl<S> RecordCollection<'_, S> {
    /// Renders a `<select>` element with one option per record.
    pub fn as_html_select(&self, select: &HtmlSelect<'_>) -> String {
        as_html_select(self.records(), select)
    }

    /// Serializes every record's fields as a JSON array of objects.
    pub fn as_json(&self) -> Result<String> {
        as_json(self.records())
    }

    /// The first record whose `field` equals `value`.
    pub fn record_by_field(&self, field: &str, value: impl Into<Value>) -> Option<&Record> {
        record_by_field(self.records(), field, &value.into())
    }

    /// Position of the first record whose `field` equals `value`.
    pub fn record_number_by_field(&self, field: &str, value: impl Into<Value>) -> Option<usize> {
        record_number_by_field(self.records(), field, &value.into())
    }

    /// Maps each record's `value_field` to its `description_field`.
    pub fn as_choices(&self, value_field: &str, description_field: &str) -> Choices {
        as_choices(self.records(), value_field, description_field)
    }
}
