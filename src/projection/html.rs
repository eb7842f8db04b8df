//! `<select>` rendering.
//!
//! Output is CRLF-separated, one element per line:
//!
//! ```text
//! <select name='region_id' id='region_id' class=wide>
//! <option value=0>Select one...</option>
//! <option value="7" selected="selected">West</option>
//! </select>
//! ```

use recordlist_core::{Record, Value};
use std::fmt::Write;

const CRLF: &str = "\r\n";

/// Options for [`as_html_select`].
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlSelect<'a> {
    name: &'a str,
    label_field: &'a str,
    selected: Option<Value>,
    add_first: bool,
    class: Option<&'a str>,
}

impl<'a> HtmlSelect<'a> {
    /// A select named `name` (used for both `name` and `id`) whose option
    /// labels come from `label_field`.
    ///
    /// Nothing is selected until [`selected`](Self::selected) is called, so a
    /// record with id 0 is not pre-selected. Pass `selected(0)` to get that.
    pub fn new(name: &'a str, label_field: &'a str) -> Self {
        Self {
            name,
            label_field,
            selected: None,
            add_first: false,
            class: None,
        }
    }

    /// Marks the option(s) whose record id equals `id` as selected.
    pub fn selected(mut self, id: impl Into<Value>) -> Self {
        self.selected = Some(id.into());
        self
    }

    /// Prepends an unselected `Select one...` option with value 0.
    pub fn add_first(mut self, add_first: bool) -> Self {
        self.add_first = add_first;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class).filter(|c| !c.is_empty());
        self
    }
}

/// Renders one `<option>` per record, valued by id and labelled by the
/// configured field. A record without that field gets an empty label.
///
/// Every record whose id equals the selected id is marked, so duplicate ids
/// yield more than one selected option.
pub fn as_html_select(records: &[Record], select: &HtmlSelect<'_>) -> String {
    let mut h = String::new();
    let name = escape(select.name);

    let _ = write!(h, "<select name='{name}' id='{name}'");
    if let Some(class) = select.class {
        if class.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            let _ = write!(h, " class={class}");
        } else {
            let _ = write!(h, " class=\"{}\"", escape(class));
        }
    }
    h.push('>');
    h.push_str(CRLF);

    if select.add_first {
        h.push_str("<option value=0>Select one...</option>");
        h.push_str(CRLF);
    }

    for record in records {
        let id = record.id();
        let _ = write!(h, "<option value=\"{}\"", escape(&id.to_string()));
        if select.selected.as_ref() == Some(id) {
            h.push_str(" selected=\"selected\"");
        }
        let label = record
            .get(select.label_field)
            .map(Value::to_string)
            .unwrap_or_default();
        let _ = write!(h, ">{}</option>", escape(&label));
        h.push_str(CRLF);
    }

    h.push_str("</select>");
    h.push_str(CRLF);
    h
}

/// Escapes text for use in element content and quoted attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::fixtures::region;

    #[test]
    fn exactly_one_selected_option() {
        let records = [region(3, "North"), region(7, "West"), region(9, "East")];
        let html = as_html_select(&records, &HtmlSelect::new("region_id", "name").selected(7));

        let selected: Vec<_> = html
            .split("\r\n")
            .filter(|line| line.contains("selected=\"selected\""))
            .collect();
        assert_eq!(selected, ["<option value=\"7\" selected=\"selected\">West</option>"]);
    }

    #[test]
    fn full_markup() {
        let records = [region(1, "A"), region(2, "B")];
        let html = as_html_select(
            &records,
            &HtmlSelect::new("region_id", "name")
                .selected(2)
                .add_first(true)
                .class("wide"),
        );
        assert_eq!(
            html,
            "<select name='region_id' id='region_id' class=wide>\r\n\
             <option value=0>Select one...</option>\r\n\
             <option value=\"1\">A</option>\r\n\
             <option value=\"2\" selected=\"selected\">B</option>\r\n\
             </select>\r\n"
        );
    }

    #[test]
    fn nothing_selected_by_default() {
        let records = [region(0, "Zero")];
        let html = as_html_select(&records, &HtmlSelect::new("r", "name"));
        assert_eq!(
            html,
            "<select name='r' id='r'>\r\n<option value=\"0\">Zero</option>\r\n</select>\r\n"
        );
    }

    #[test]
    fn zero_id_selected_on_request() {
        let records = [region(0, "Zero"), region(1, "One")];
        let html = as_html_select(&records, &HtmlSelect::new("r", "name").selected(0));
        assert!(html.contains("<option value=\"0\" selected=\"selected\">Zero</option>"));
        assert_eq!(html.matches("selected=").count(), 1);
    }

    #[test]
    fn duplicate_ids_are_all_marked() {
        let records = [region(4, "A"), region(4, "B")];
        let html = as_html_select(&records, &HtmlSelect::new("r", "name").selected(4));
        assert_eq!(html.matches("selected=\"selected\"").count(), 2);
    }

    #[test]
    fn escapes_labels_and_attributes() {
        let records = [region(1, "<b>Tom & Jerry's</b>")];
        let html = as_html_select(&records, &HtmlSelect::new("a'b", "name").class("x y"));
        assert!(html.starts_with("<select name='a&#39;b' id='a&#39;b' class=\"x y\">\r\n"));
        assert!(html.contains(">&lt;b&gt;Tom &amp; Jerry&#39;s&lt;/b&gt;</option>"));
    }

    #[test]
    fn missing_label_field_renders_empty() {
        let records = [region(1, "A")];
        let html = as_html_select(&records, &HtmlSelect::new("r", "code"));
        assert!(html.contains("<option value=\"1\"></option>"));
    }

    #[test]
    fn empty_collection() {
        let html = as_html_select(&[], &HtmlSelect::new("r", "name").add_first(true));
        assert_eq!(
            html,
            "<select name='r' id='r'>\r\n<option value=0>Select one...</option>\r\n</select>\r\n"
        );
    }
}
