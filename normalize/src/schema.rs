//! The fixed column schema of a race results table.

use strum::{EnumCount, IntoEnumIterator};

/// One column of a results row. The declaration order is the order of the
/// fields in a source line and in the CSV output.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumCount,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Rank,
    ClassPos,
    Class,
    CarNumber,
    Driver,
    Vehicle,
    Tire,
    Time,
    CorrectionFactor,
    CorrectedTime,
    DiffFromFirst,
    CorrectedDiffFromFirst,
    RtpPoints,
}

/// Number of fields in a valid results row.
pub const COLUMN_COUNT: usize = Column::COUNT;

impl Column {
    /// All columns, in schema order.
    pub fn all() -> impl Iterator<Item = Column> {
        Column::iter()
    }

    /// Literal column name, as written in the CSV header.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Position of the column within a row.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Column names in schema order, i.e. the CSV header row.
pub fn header() -> [&'static str; COLUMN_COUNT] {
    let mut names = [""; COLUMN_COUNT];
    for col in Column::all() {
        names[col.index()] = col.name();
    }
    names
}
