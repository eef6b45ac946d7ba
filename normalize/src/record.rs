use std::ops::{Deref, DerefMut};

use crate::schema::{COLUMN_COUNT, Column};

/// A field sequence did not have one field per column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("got {got} fields, expected {expected}")]
pub struct RowShapeError {
    pub got: usize,
    pub expected: usize,
}

/// One results row, with a value for every [Column].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record([String; COLUMN_COUNT]);

impl Record {
    pub fn get(&self, column: Column) -> &str {
        &self.0[column.index()]
    }

    /// Values in schema order.
    pub fn values(&self) -> &[String; COLUMN_COUNT] {
        &self.0
    }

    /// (column, value) pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::all().zip(self.0.iter().map(String::as_str))
    }
}

impl TryFrom<Vec<String>> for Record {
    type Error = RowShapeError;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        let got = fields.len();
        <[String; COLUMN_COUNT]>::try_from(fields)
            .map(Record)
            .map_err(|_| RowShapeError {
                got,
                expected: COLUMN_COUNT,
            })
    }
}

/// The records of one document, in page order then line order.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ResultTable(pub Vec<Record>);

impl Deref for ResultTable {
    type Target = Vec<Record>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ResultTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Record> for ResultTable {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        ResultTable(iter.into_iter().collect())
    }
}
