//! Order-by clauses for the id scan.

use crate::error::{RecordListError, Result};
use crate::ident::is_valid_identifier;
use std::fmt;
use std::str::FromStr;

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// One `column [asc|desc]` term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: String,
    /// `None` leaves the direction to the database default (ascending).
    pub direction: Option<Direction>,
}

/// A validated, comma-separated list of sort terms.
///
/// ```
/// use recordlist_core::OrderBy;
///
/// let order: OrderBy = "name DESC, id".parse().unwrap();
/// assert_eq!(order.to_string(), "name desc, id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    terms: Vec<OrderTerm>,
}

impl OrderBy {
    /// Parses `col`, `col asc`, `col desc` and comma-separated lists of those.
    pub fn parse(clause: &str) -> Result<Self> {
        let invalid = || RecordListError::InvalidOrderBy(clause.to_owned());

        let mut terms = Vec::new();
        for part in clause.split(',') {
            let mut words = part.split_whitespace();
            let column = words.next().ok_or_else(invalid)?;
            if !is_valid_identifier(column) {
                return Err(invalid());
            }
            let direction = match words.next() {
                None => None,
                Some(word) if word.eq_ignore_ascii_case("asc") => Some(Direction::Asc),
                Some(word) if word.eq_ignore_ascii_case("desc") => Some(Direction::Desc),
                Some(_) => return Err(invalid()),
            };
            if words.next().is_some() {
                return Err(invalid());
            }
            terms.push(OrderTerm {
                column: column.to_owned(),
                direction,
            });
        }
        Ok(Self { terms })
    }

    /// Creates an ascending ORDER BY clause: "column asc"
    pub fn asc(column: &str) -> Result<Self> {
        Self::single(column, Some(Direction::Asc))
    }

    /// Creates a descending ORDER BY clause: "column desc"
    pub fn desc(column: &str) -> Result<Self> {
        Self::single(column, Some(Direction::Desc))
    }

    fn single(column: &str, direction: Option<Direction>) -> Result<Self> {
        if !is_valid_identifier(column) {
            return Err(RecordListError::InvalidOrderBy(column.to_owned()));
        }
        Ok(Self {
            terms: vec![OrderTerm {
                column: column.to_owned(),
                direction,
            }],
        })
    }

    /// Appends another term, e.g. a tie-breaker.
    pub fn then(mut self, other: OrderBy) -> Self {
        self.terms.extend(other.terms);
        self
    }

    pub fn terms(&self) -> &[OrderTerm] {
        &self.terms
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|term| term.column.as_str())
    }
}

impl Default for OrderBy {
    /// `order by id`
    fn default() -> Self {
        Self {
            terms: vec![OrderTerm {
                column: "id".to_owned(),
                direction: None,
            }],
        }
    }
}

impl FromStr for OrderBy {
    type Err = RecordListError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for OrderBy {
    type Error = RecordListError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&term.column)?;
            if let Some(direction) = term.direction {
                write!(f, " {}", direction.as_str())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_column() {
        let order = OrderBy::parse("id").unwrap();
        assert_eq!(order.to_string(), "id");
        assert_eq!(order, OrderBy::default());
    }

    #[test]
    fn directions_are_normalized() {
        let order = OrderBy::parse("  name   DESC ,region asc").unwrap();
        assert_eq!(order.to_string(), "name desc, region asc");
        assert_eq!(order.columns().collect::<Vec<_>>(), ["name", "region"]);
    }

    #[test]
    fn builders() {
        let order = OrderBy::desc("created").unwrap().then(OrderBy::asc("id").unwrap());
        assert_eq!(order.to_string(), "created desc, id asc");
    }

    #[test]
    fn rejects_expressions() {
        for clause in ["", "id,", "random()", "id desc nulls last", "1", "id; delete from t"] {
            assert!(
                matches!(OrderBy::parse(clause), Err(RecordListError::InvalidOrderBy(_))),
                "{clause:?}"
            );
        }
    }
}
