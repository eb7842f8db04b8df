use core::fmt;

/// A named SQL parameter placeholder, rendered as `:name`.
///
/// # Examples
/// ```
/// use recordlist_core::Placeholder;
///
/// assert_eq!(Placeholder::named("status").to_string(), ":status");
/// ```
#[derive(Debug, Clone, Hash, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The semantic name of the parameter (used for binding by name).
    pub name: &'a str,
}

impl<'a> Placeholder<'a> {
    /// Creates a named placeholder.
    pub const fn named(name: &'a str) -> Self {
        Placeholder { name }
    }

    /// The placeholder as it appears in SQL text and in the binding list.
    pub fn render(&self) -> String {
        format!(":{}", self.name)
    }
}

impl fmt::Display for Placeholder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.name)
    }
}
