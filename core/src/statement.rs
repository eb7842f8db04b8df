//! Composed id-scan statements and raw where fragments.

use crate::placeholder::Placeholder;
use crate::value::Value;
use std::fmt;

/// SQL text plus its named parameter bindings, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<(String, Value)>,
}

impl Statement {
    pub(crate) fn new(sql: String, params: Vec<(String, Value)>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// `(":name", value)` pairs, in the order their clauses appear.
    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        let placeholder = Placeholder::named(name).render();
        self.params
            .iter()
            .find(|(n, _)| *n == placeholder)
            .map(|(_, v)| v)
    }

    pub fn into_parts(self) -> (String, Vec<(String, Value)>) {
        (self.sql, self.params)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// A caller-written boolean expression embedded verbatim after `where`.
///
/// Values never go into the fragment text; reference them as `:name`
/// placeholders and bind them with [`RawWhere::bind`].
///
/// ```
/// use recordlist_core::RawWhere;
///
/// let raw = RawWhere::new("age > :min and status <> :status")
///     .bind("min", 30)
///     .bind("status", "closed");
/// assert_eq!(raw.fragment(), "age > :min and status <> :status");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawWhere {
    fragment: String,
    params: Vec<(String, Value)>,
}

impl RawWhere {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            params: Vec::new(),
        }
    }

    /// Binds `value` to the `:name` placeholder. Rebinding a name replaces its value.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.params.push((name, value)),
        }
        self
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Bound values keyed by bare parameter name.
    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    pub fn is_blank(&self) -> bool {
        self.fragment.trim().is_empty()
    }
}

impl From<&str> for RawWhere {
    fn from(fragment: &str) -> Self {
        RawWhere::new(fragment)
    }
}

impl From<String> for RawWhere {
    fn from(fragment: String) -> Self {
        RawWhere::new(fragment)
    }
}
