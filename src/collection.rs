//! Record collections: load by id scan, hydrate per id, narrow in memory.

use crate::config::{CollectionConfig, MissingRecordPolicy};
use recordlist_core::{
    OrderBy, Predicate, QueryComposer, RawWhere, Record, RecordHydrator, RecordListError, Result,
    RowStore, Schema, Statement, recordlist_trace_error, recordlist_trace_load,
    recordlist_trace_skip, validate_identifier,
};

/// What a successful load produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The scan matched no rows (or every id was skipped).
    Empty,
    /// This many records were hydrated.
    Loaded(usize),
}

impl LoadOutcome {
    fn from_count(count: usize) -> Self {
        if count == 0 {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Loaded(count)
        }
    }

    pub const fn count(self) -> usize {
        match self {
            LoadOutcome::Empty => 0,
            LoadOutcome::Loaded(count) => count,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, LoadOutcome::Empty)
    }
}

/// An ordered list of records from one table.
///
/// Every load starts from an empty list, runs one `select id` scan and then
/// hydrates each id through the store, keeping scan order. A load either
/// replaces the whole list or, on error, leaves it empty. [`filter`] only
/// ever removes records.
///
/// [`filter`]: RecordCollection::filter
///
/// ```
/// use recordlist::{Predicate, RecordCollection};
/// use recordlist::sqlite::SqliteStore;
///
/// # fn main() -> recordlist::Result<()> {
/// let store = SqliteStore::open_in_memory()?;
/// store.connection().execute_batch(
///     "create table regions (id integer primary key, name text, status text);
///      insert into regions values (1, 'West', 'active'), (2, 'East', 'closed');",
/// )?;
///
/// let mut regions = RecordCollection::new(&store, "regions")?;
/// regions.load_by_fields_matching(&Predicate::new().where_eq("status", "active"), "id")?;
/// assert_eq!(regions.len(), 1);
/// assert_eq!(
///     regions.last_sql(),
///     "select id from regions where status = :status order by id"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecordCollection<'s, S> {
    store: &'s S,
    table: String,
    schema: Option<Schema>,
    default_order_by: OrderBy,
    on_missing_record: MissingRecordPolicy,
    records: Vec<Record>,
    last_sql: String,
}

impl<'s, S> RecordCollection<'s, S>
where
    S: RowStore + RecordHydrator,
{
    /// Creates an empty collection bound to `table`.
    pub fn new(store: &'s S, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_identifier(&table)?;
        Ok(Self {
            store,
            table,
            schema: None,
            default_order_by: OrderBy::default(),
            on_missing_record: MissingRecordPolicy::default(),
            records: Vec::new(),
            last_sql: String::new(),
        })
    }

    /// Creates an empty collection using the order, missing-record policy and
    /// allow-list from `config`.
    pub fn with_config(store: &'s S, table: impl Into<String>, config: &CollectionConfig) -> Result<Self> {
        let mut collection = Self::new(store, table)?
            .with_default_order_by(config.default_order_by().clone())
            .with_missing_record_policy(config.on_missing_record());
        if let Some(schema) = config.schema() {
            collection = collection.with_schema(schema.clone())?;
        }
        Ok(collection)
    }

    /// Restricts every composed statement to the tables and columns of `schema`.
    pub fn with_schema(mut self, schema: Schema) -> Result<Self> {
        schema.check_table(&self.table)?;
        self.schema = Some(schema);
        Ok(self)
    }

    pub fn with_default_order_by(mut self, order_by: OrderBy) -> Self {
        self.default_order_by = order_by;
        self
    }

    pub fn with_missing_record_policy(mut self, policy: MissingRecordPolicy) -> Self {
        self.on_missing_record = policy;
        self
    }

    fn composer(&self) -> QueryComposer<'_> {
        match &self.schema {
            Some(schema) => QueryComposer::with_schema(schema),
            None => QueryComposer::new(),
        }
    }

    /// Loads every row of the table, ordered by `order_by` (e.g. `"id"` or `"name desc"`).
    pub fn load(&mut self, order_by: &str) -> Result<LoadOutcome> {
        let statement = OrderBy::parse(order_by)
            .and_then(|order| self.composer().compose_unconditional(&self.table, &order));
        self.read_from_store(statement)
    }

    /// Loads every row using the configured default order.
    pub fn load_default(&mut self) -> Result<LoadOutcome> {
        let statement = self
            .composer()
            .compose_unconditional(&self.table, &self.default_order_by);
        self.read_from_store(statement)
    }

    /// Loads the rows matching a caller-written where fragment.
    ///
    /// The fragment is trusted SQL; values belong in bound parameters.
    pub fn load_with_where(&mut self, raw: impl Into<RawWhere>, order_by: &str) -> Result<LoadOutcome> {
        let raw = raw.into();
        let statement = OrderBy::parse(order_by)
            .and_then(|order| self.composer().compose_raw_where(&self.table, &raw, &order));
        self.read_from_store(statement)
    }

    /// Loads the rows whose columns equal every entry of `predicate`.
    pub fn load_by_fields_matching(
        &mut self,
        predicate: &Predicate,
        order_by: &str,
    ) -> Result<LoadOutcome> {
        let statement = OrderBy::parse(order_by)
            .and_then(|order| self.composer().compose_filtered(&self.table, predicate, &order));
        self.read_from_store(statement)
    }

    fn read_from_store(&mut self, statement: Result<Statement>) -> Result<LoadOutcome> {
        self.records.clear();
        self.last_sql.clear();

        let statement = statement?;
        self.last_sql.push_str(statement.sql());

        match self.hydrate_all(&statement) {
            Ok(records) => {
                self.records = records;
                recordlist_trace_load!(self.table, self.records.len());
                Ok(LoadOutcome::from_count(self.records.len()))
            }
            Err(err) => {
                recordlist_trace_error!(self.last_sql, err);
                Err(err)
            }
        }
    }

    fn hydrate_all(&self, statement: &Statement) -> Result<Vec<Record>> {
        let ids = self.store.select_ids(statement)?;

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self.store.hydrate(&self.table, &id)? {
                Some(record) if record.table_name() != self.table => {
                    return Err(RecordListError::TableMismatch {
                        expected: self.table.clone(),
                        found: record.table_name().to_owned(),
                    });
                }
                Some(record) if record.id() != &id => {
                    return Err(RecordListError::IdMismatch {
                        table: self.table.clone(),
                        expected: id.to_string(),
                        found: record.id().to_string(),
                    });
                }
                Some(record) => records.push(record),
                None => match self.on_missing_record {
                    MissingRecordPolicy::Abort => {
                        return Err(RecordListError::RecordNotFound {
                            table: self.table.clone(),
                            id: id.to_string(),
                        });
                    }
                    MissingRecordPolicy::Skip => {
                        recordlist_trace_skip!(self.table, id);
                    }
                },
            }
        }
        Ok(records)
    }
}

impl<S> RecordCollection<'_, S> {
    /// Keeps only the records whose fields equal every entry of `predicate`.
    ///
    /// Relative order is preserved and removed records are gone for good.
    /// An empty predicate keeps everything.
    pub fn filter(&mut self, predicate: &Predicate) {
        self.records.retain(|record| predicate.matches(record));
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The statement text of the most recent load, empty before the first one.
    pub fn last_sql(&self) -> &str {
        &self.last_sql
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a, S> IntoIterator for &'a RecordCollection<'_, S> {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
