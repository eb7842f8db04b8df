use recordlist_core::{Record, Value};

/// Returns the first record, in order, whose `field` equals `value`.
pub fn record_by_field<'a>(records: &'a [Record], field: &str, value: &Value) -> Option<&'a Record> {
    records.iter().find(|record| record.get(field) == Some(value))
}

/// Returns the zero-based position of the first record whose `field` equals `value`.
pub fn record_number_by_field(records: &[Record], field: &str, value: &Value) -> Option<usize> {
    records.iter().position(|record| record.get(field) == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::fixtures::region;

    #[test]
    fn first_match_wins() {
        let records = [region(1, "A"), region(2, "B"), region(3, "B")];
        let found = record_by_field(&records, "name", &Value::from("B")).unwrap();
        assert_eq!(found.id(), &Value::Integer(2));
        assert_eq!(record_number_by_field(&records, "name", &Value::from("B")), Some(1));
    }

    #[test]
    fn first_record_is_not_confused_with_no_match() {
        let records = [region(1, "A"), region(2, "B")];
        assert_eq!(record_number_by_field(&records, "name", &Value::from("A")), Some(0));
        assert_eq!(record_number_by_field(&records, "name", &Value::from("Z")), None);
        assert!(record_by_field(&records, "name", &Value::from("Z")).is_none());
    }

    #[test]
    fn unknown_field_never_matches() {
        let records = [region(1, "A")];
        assert!(record_by_field(&records, "code", &Value::Null).is_none());
    }

    #[test]
    fn ids_compare_numerically() {
        let records = [region(1, "A"), region(2, "B")];
        assert_eq!(record_number_by_field(&records, "id", &Value::Real(2.0)), Some(1));
        assert_eq!(record_number_by_field(&records, "id", &Value::from("2")), None);
    }
}
