//! Read-side row representation.

use std::collections::BTreeMap;

/// One cell read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadItem {
    /// Identifier of the row the cell belongs to.
    pub row: String,
    /// Fully qualified column name, `family:qualifier`.
    pub column: String,
    pub value: Vec<u8>,
}

impl ReadItem {
    pub fn new(row: impl Into<String>, column: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            row: row.into(),
            column: column.into(),
            value: value.into(),
        }
    }
}

/// A decoded row as seen by the mapper: cells grouped by family.
pub trait RowSource {
    /// Families of the row with their cells, in iteration order.
    fn families(&self) -> Box<dyn Iterator<Item = (&str, &[ReadItem])> + '_>;

    fn is_empty(&self) -> bool {
        self.families().all(|(_, cells)| cells.is_empty())
    }
}

/// In-memory row, families ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    families: BTreeMap<String, Vec<ReadItem>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell to `family`.
    pub fn push(&mut self, family: impl Into<String>, item: ReadItem) {
        self.families.entry(family.into()).or_default().push(item);
    }

    /// Append a cell for `family:qualifier` of row `key`.
    pub fn with_cell(
        mut self,
        key: &str,
        family: &str,
        qualifier: &str,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        let column = format!("{}:{}", family, qualifier);
        self.push(family, ReadItem::new(key, column, value));
        self
    }

    /// Cells of one family.
    pub fn family(&self, family: &str) -> Option<&[ReadItem]> {
        self.families.get(family).map(Vec::as_slice)
    }

    /// Row identifier of the first cell.
    pub fn key(&self) -> Option<&str> {
        self.families
            .values()
            .flat_map(|cells| cells.iter())
            .map(|cell| cell.row.as_str())
            .next()
    }
}

impl RowSource for Row {
    fn families(&self) -> Box<dyn Iterator<Item = (&str, &[ReadItem])> + '_> {
        Box::new(
            self.families
                .iter()
                .map(|(family, cells)| (family.as_str(), cells.as_slice())),
        )
    }
}

impl From<BTreeMap<String, Vec<ReadItem>>> for Row {
    fn from(families: BTreeMap<String, Vec<ReadItem>>) -> Self {
        Self { families }
    }
}

/// An absent row behaves like an empty one.
impl<T: RowSource> RowSource for Option<T> {
    fn families(&self) -> Box<dyn Iterator<Item = (&str, &[ReadItem])> + '_> {
        match self {
            Some(row) => row.families(),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<T: RowSource + ?Sized> RowSource for &T {
    fn families(&self) -> Box<dyn Iterator<Item = (&str, &[ReadItem])> + '_> {
        (**self).families()
    }
}
