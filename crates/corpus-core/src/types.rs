//! Core data types for the record collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CleanError, CleanResult};

/// A single field value of a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Free text.
    Text(String),
}

impl Value {
    /// Check if the value is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the value as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Read the value as a number, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    /// Render the value as a grouping key. Missing values have no key.
    pub fn group_key(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Float(f) if f.is_nan() => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }

    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// One row of the corpus: an ordered mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Get a required text field.
    ///
    /// Missing fields and non-text values are a hard failure; text rules are
    /// never applied to coerced values.
    pub fn text(&self, field: &str) -> CleanResult<&str> {
        match self.fields.get(field) {
            Some(Value::Text(s)) => Ok(s),
            Some(other) => Err(CleanError::malformed(
                field,
                format!("expected text, found {}", other.kind()),
            )),
            None => Err(CleanError::malformed(field, "field is missing")),
        }
    }

    /// Get a text field that may legitimately be null or absent.
    pub fn optional_text(&self, field: &str) -> CleanResult<Option<&str>> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Text(s)) => Ok(Some(s)),
            Some(other) => Err(CleanError::malformed(
                field,
                format!("expected text or null, found {}", other.kind()),
            )),
        }
    }

    /// Get a numeric field, treating absent, null, and NaN as missing.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.fields.get(field).and_then(Value::as_f64)
    }

    /// Get the grouping key of this record, if it has one.
    pub fn group_key(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(Value::group_key)
    }

    /// Iterate over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Rows of a collection grouped by a key field.
#[derive(Debug)]
pub struct Grouped<'a> {
    /// Rows per distinct key, in key order.
    pub groups: BTreeMap<String, Vec<&'a Record>>,
    /// Number of rows without a key (absent or null).
    pub ungrouped: usize,
}

/// The full corpus: an ordered collection of records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection from records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the rows.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Consume the collection and return its rows.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Append a row.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Keep the rows for which `predicate` returns true, as a new collection.
    ///
    /// The first predicate error aborts the whole filter; a failing row is
    /// never treated as a rejected one.
    pub fn try_filter<F>(&self, mut predicate: F) -> CleanResult<Self>
    where
        F: FnMut(&Record) -> CleanResult<bool>,
    {
        let mut kept = Vec::with_capacity(self.records.len());
        for record in &self.records {
            if predicate(record)? {
                kept.push(record.clone());
            }
        }
        Ok(Self { records: kept })
    }

    /// Rewrite every row, producing a new collection.
    pub fn try_map<F>(&self, mut transform: F) -> CleanResult<Self>
    where
        F: FnMut(Record) -> CleanResult<Record>,
    {
        let records = self
            .records
            .iter()
            .cloned()
            .map(&mut transform)
            .collect::<CleanResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    /// Group rows by the value of `field`.
    pub fn group_by(&self, field: &str) -> Grouped<'_> {
        let mut groups: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
        let mut ungrouped = 0;
        for record in &self.records {
            match record.group_key(field) {
                Some(key) => groups.entry(key).or_default().push(record),
                None => ungrouped += 1,
            }
        }
        Grouped { groups, ungrouped }
    }

    /// Collect a required text column.
    pub fn texts(&self, field: &str) -> CleanResult<Vec<&str>> {
        self.records.iter().map(|r| r.text(field)).collect()
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for RecordCollection {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for RecordCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Inclusive integer range used for random counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    /// Lower bound (inclusive).
    pub min: usize,
    /// Upper bound (inclusive).
    pub max: usize,
}

impl SampleRange {
    /// Create a validated range.
    pub fn new(min: usize, max: usize) -> CleanResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check that `min <= max`.
    pub fn validate(&self) -> CleanResult<()> {
        if self.min > self.max {
            return Err(CleanError::config(format!(
                "invalid range: min {} exceeds max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Check whether `n` lies in the range.
    pub fn contains(&self, n: usize) -> bool {
        (self.min..=self.max).contains(&n)
    }
}
