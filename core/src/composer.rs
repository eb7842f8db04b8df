//! Builds the `select id` statements that drive a load.
//!
//! Three shapes are produced, all selecting only `id`:
//!
//! - `select id from <table> order by <order>`
//! - `select id from <table> where <f1> = :f1 and <f2> = :f2 order by <order>`
//! - `select id from <table> where <raw fragment> order by <order>`
//!
//! Table, column and parameter names must be plain identifiers. When the
//! composer holds a [`Schema`], they must also be declared there. Values are
//! only ever bound, never spliced into the text.

use crate::error::Result;
use crate::ident::validate_identifier;
use crate::order_by::OrderBy;
use crate::placeholder::Placeholder;
use crate::predicate::Predicate;
use crate::schema::Schema;
use crate::statement::{RawWhere, Statement};

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryComposer<'a> {
    schema: Option<&'a Schema>,
}

impl<'a> QueryComposer<'a> {
    /// A composer that only checks identifier syntax.
    pub const fn new() -> Self {
        Self { schema: None }
    }

    /// A composer that also requires every name to be declared in `schema`.
    pub const fn with_schema(schema: &'a Schema) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    pub const fn schema(&self) -> Option<&'a Schema> {
        self.schema
    }

    pub fn compose_unconditional(&self, table: &str, order_by: &OrderBy) -> Result<Statement> {
        self.check_table(table)?;
        self.check_order_by(table, order_by)?;
        Ok(Statement::new(
            format!("select id from {table} order by {order_by}"),
            Vec::new(),
        ))
    }

    /// An empty predicate composes the unconditional statement.
    pub fn compose_filtered(
        &self,
        table: &str,
        predicate: &Predicate,
        order_by: &OrderBy,
    ) -> Result<Statement> {
        if predicate.is_empty() {
            return self.compose_unconditional(table, order_by);
        }
        self.check_table(table)?;
        self.check_order_by(table, order_by)?;

        let mut clauses = Vec::with_capacity(predicate.len());
        let mut params = Vec::with_capacity(predicate.len());
        for (field, value) in predicate.iter() {
            self.check_column(table, field)?;
            let placeholder = Placeholder::named(field);
            clauses.push(format!("{field} = {placeholder}"));
            params.push((placeholder.render(), value.clone()));
        }

        Ok(Statement::new(
            format!(
                "select id from {table} where {} order by {order_by}",
                clauses.join(" and ")
            ),
            params,
        ))
    }

    /// The fragment goes in verbatim; only its bound parameter names are checked.
    /// A blank fragment composes the unconditional statement.
    pub fn compose_raw_where(
        &self,
        table: &str,
        raw: &RawWhere,
        order_by: &OrderBy,
    ) -> Result<Statement> {
        if raw.is_blank() {
            return self.compose_unconditional(table, order_by);
        }
        self.check_table(table)?;
        self.check_order_by(table, order_by)?;

        let params = raw
            .params()
            .iter()
            .map(|(name, value)| {
                validate_identifier(name)?;
                Ok((Placeholder::named(name).render(), value.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Statement::new(
            format!(
                "select id from {table} where {} order by {order_by}",
                raw.fragment()
            ),
            params,
        ))
    }

    fn check_table(&self, table: &str) -> Result<()> {
        validate_identifier(table)?;
        if let Some(schema) = self.schema {
            schema.check_table(table)?;
        }
        Ok(())
    }

    fn check_column(&self, table: &str, column: &str) -> Result<()> {
        validate_identifier(column)?;
        if let Some(schema) = self.schema {
            schema.check_column(table, column)?;
        }
        Ok(())
    }

    fn check_order_by(&self, table: &str, order_by: &OrderBy) -> Result<()> {
        order_by
            .columns()
            .try_for_each(|column| self.check_column(table, column))
    }
}
