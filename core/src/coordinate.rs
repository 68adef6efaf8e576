//! Coordinates and field tag parsing.
//!
//! A field tag has the form `"<name>"`, `"<name>,<opt>,..."`, `",<opt>"` or is
//! empty. `<name>` is `family:column`, `family:$$` (the whole family as a map),
//! or `-`/empty to exclude the field. The `rowkey` option binds the field to the
//! row identifier regardless of `<name>`.

use std::fmt;

/// Reserved coordinate token and tag option for the row key.
pub const ROW_KEY: &str = "rowkey";

/// Separates family and column in a coordinate.
pub const FAMILY_COLUMN_DELIMITER: char = ':';

/// Column marker binding a field to an entire family.
pub const FAMILY_MAP_MARKER: &str = "$$";

/// Tag name excluding a field.
pub const SKIP_MARKER: &str = "-";

/// Separates the tag name from its options.
pub const TAG_OPTION_DELIMITER: char = ',';

/// The logical address a record field is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coordinate {
    /// The row identifier.
    RowKey,
    /// Every cell of `family`, keyed by column qualifier.
    FamilyMap { family: String },
    /// A single `family:column` cell.
    Column { family: String, column: String },
    /// A tag name that is not exactly two `:`-separated segments.
    Malformed(String),
}

impl Coordinate {
    /// Parse a tag name into a coordinate.
    pub fn parse(name: &str) -> Self {
        if name == ROW_KEY {
            return Coordinate::RowKey;
        }
        let mut parts = name.split(FAMILY_COLUMN_DELIMITER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(family), Some(FAMILY_MAP_MARKER), None) => Coordinate::FamilyMap {
                family: family.to_string(),
            },
            (Some(family), Some(column), None) => Coordinate::Column {
                family: family.to_string(),
                column: column.to_string(),
            },
            _ => Coordinate::Malformed(name.to_string()),
        }
    }

    /// Coordinate that claims a whole family.
    pub fn family_map(family: impl Into<String>) -> Self {
        Coordinate::FamilyMap {
            family: family.into(),
        }
    }

    /// Coordinate for a single column.
    pub fn column(family: impl Into<String>, column: impl Into<String>) -> Self {
        Coordinate::Column {
            family: family.into(),
            column: column.into(),
        }
    }

    /// Family this coordinate belongs to, if any.
    pub fn family(&self) -> Option<&str> {
        match self {
            Coordinate::FamilyMap { family } | Coordinate::Column { family, .. } => Some(family),
            Coordinate::RowKey | Coordinate::Malformed(_) => None,
        }
    }

    /// Returns true if a family filter keeps this coordinate.
    ///
    /// An absent or empty filter keeps everything and the row key is never
    /// filtered. A malformed coordinate is judged by its first segment.
    pub fn admitted_by(&self, family_filter: Option<&str>) -> bool {
        let Some(filter) = family_filter.filter(|f| !f.is_empty()) else {
            return true;
        };
        match self {
            Coordinate::RowKey => true,
            Coordinate::Malformed(raw) => raw.split(FAMILY_COLUMN_DELIMITER).next() == Some(filter),
            Coordinate::FamilyMap { .. } | Coordinate::Column { .. } => {
                self.family() == Some(filter)
            }
        }
    }

    pub fn is_row_key(&self) -> bool {
        matches!(self, Coordinate::RowKey)
    }

    pub fn is_family_map(&self) -> bool {
        matches!(self, Coordinate::FamilyMap { .. })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::RowKey => f.write_str(ROW_KEY),
            Coordinate::FamilyMap { family } => {
                write!(f, "{}{}{}", family, FAMILY_COLUMN_DELIMITER, FAMILY_MAP_MARKER)
            }
            Coordinate::Column { family, column } => {
                write!(f, "{}{}{}", family, FAMILY_COLUMN_DELIMITER, column)
            }
            Coordinate::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Returns the column qualifier of a fully qualified column name.
///
/// `"cf3:x"` yields `"x"`; a name without a family prefix is returned as is.
pub fn qualifier(column: &str) -> &str {
    column
        .split_once(FAMILY_COLUMN_DELIMITER)
        .map(|(_, qualifier)| qualifier)
        .unwrap_or(column)
}

/// A parsed field tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTag<'t> {
    /// First tag segment.
    pub name: &'t str,
    /// Remaining comma-separated segments.
    pub options: Vec<&'t str>,
}

impl<'t> FieldTag<'t> {
    pub fn parse(tag: &'t str) -> Self {
        let mut segments = tag.split(TAG_OPTION_DELIMITER);
        let name = segments.next().unwrap_or_default();
        Self {
            name,
            options: segments.collect(),
        }
    }

    /// Returns true if the given option is present.
    pub fn has(&self, option: &str) -> bool {
        self.options.iter().any(|o| *o == option)
    }

    /// Resolve the tag to a coordinate, or `None` if the field is excluded.
    pub fn resolve(&self) -> Option<Coordinate> {
        if self.has(ROW_KEY) {
            return Some(Coordinate::RowKey);
        }
        if self.name.is_empty() || self.name == SKIP_MARKER {
            return None;
        }
        Some(Coordinate::parse(self.name))
    }
}
