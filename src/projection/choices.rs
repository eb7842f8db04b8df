use indexmap::IndexMap;
use recordlist_core::{Record, Value};

/// Ordered `value -> description` pairs for option-list renderers.
///
/// Keys keep the position of their first occurrence; a later record with the
/// same key replaces the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    entries: IndexMap<Value, Value>,
}

impl Choices {
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn into_inner(self) -> IndexMap<Value, Value> {
        self.entries
    }
}

impl IntoIterator for Choices {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds the choice map from each record's `value_field` and
/// `description_field`. Records lacking either field are left out.
pub fn as_choices(records: &[Record], value_field: &str, description_field: &str) -> Choices {
    let mut entries = IndexMap::with_capacity(records.len());
    for record in records {
        if let (Some(value), Some(description)) =
            (record.get(value_field), record.get(description_field))
        {
            entries.insert(value.clone(), description.clone());
        }
    }
    Choices { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::fixtures::region;

    #[test]
    fn last_duplicate_wins() {
        let records = [region(1, "A"), region(1, "Z")];
        let choices = as_choices(&records, "id", "name");
        assert_eq!(choices.len(), 1);
        assert_eq!(choices.get(&Value::Integer(1)), Some(&Value::from("Z")));
    }

    #[test]
    fn keeps_first_position_of_a_key() {
        let records = [region(1, "A"), region(2, "B"), region(1, "C")];
        let pairs: Vec<_> = as_choices(&records, "id", "name").into_iter().collect();
        assert_eq!(
            pairs,
            [
                (Value::Integer(1), Value::from("C")),
                (Value::Integer(2), Value::from("B")),
            ]
        );
    }

    #[test]
    fn any_column_can_be_the_key() {
        let records = [region(1, "A"), region(2, "B")];
        let choices = as_choices(&records, "name", "id");
        assert_eq!(choices.keys().collect::<Vec<_>>(), [&Value::from("A"), &Value::from("B")]);
        assert!(as_choices(&records, "code", "name").is_empty());
    }
}
