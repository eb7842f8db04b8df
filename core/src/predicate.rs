//! Conjunctive equality predicates.

use crate::record::Record;
use crate::value::Value;
use indexmap::IndexMap;

/// Ordered `field = value` pairs, all of which must hold.
///
/// Entry order decides the order of the generated `and` clauses and of the
/// bound parameters. Setting a field twice replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    entries: IndexMap<String, Value>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `field = value`.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// True when every entry equals the record's field of the same name.
    ///
    /// A field the record does not have never matches. An empty predicate
    /// matches every record.
    pub fn matches(&self, record: &Record) -> bool {
        self.entries
            .iter()
            .all(|(field, want)| record.get(field) == Some(want))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Predicate {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut predicate = Predicate::new();
        for (k, v) in iter {
            predicate.insert(k, v);
        }
        predicate
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Predicate {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::from_pairs(
            "accounts",
            [
                ("id", Value::from(1)),
                ("status", "active".into()),
                ("score", Value::Real(10.0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn keeps_insertion_order_and_replaces_in_place() {
        let predicate = Predicate::new()
            .where_eq("status", "active")
            .where_eq("region", "west")
            .where_eq("status", "closed");
        let entries: Vec<_> = predicate.iter().collect();
        assert_eq!(
            entries,
            [
                ("status", &Value::from("closed")),
                ("region", &Value::from("west"))
            ]
        );
    }

    #[test]
    fn matching() {
        let record = record();
        assert!(Predicate::new().matches(&record));
        assert!(Predicate::from([("status", "active")]).matches(&record));
        assert!(Predicate::new().where_eq("score", 10).matches(&record));
        assert!(!Predicate::new().where_eq("status", "active").where_eq("id", 2).matches(&record));
        assert!(!Predicate::new().where_eq("region", Value::Null).matches(&record));
        assert!(!Predicate::new().where_eq("id", "1").matches(&record));
    }
}
