//! Identifier checks for table, column and parameter names.
//!
//! Names are spliced into SQL text, so only plain ASCII identifiers are
//! accepted: a letter or underscore followed by letters, digits or underscores.

use crate::error::{RecordListError, Result};

/// Returns true if `s` is a plain SQL identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns `name` unchanged if it is a plain SQL identifier.
pub fn validate_identifier(name: &str) -> Result<&str> {
    if is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(RecordListError::InvalidIdentifier(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["id", "region_id", "_private", "Table2"] {
            assert!(is_valid_identifier(name), "{name}");
        }
    }

    #[test]
    fn rejects_anything_that_could_carry_sql() {
        for name in ["", "2fast", "name desc", "id;drop table x", "a-b", "\"quoted\"", "naïve"] {
            assert!(!is_valid_identifier(name), "{name}");
        }
        assert!(matches!(
            validate_identifier("users--"),
            Err(RecordListError::InvalidIdentifier(name)) if name == "users--"
        ));
    }
}
