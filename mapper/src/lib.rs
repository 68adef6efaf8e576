//! cellmap Mapper
//!
//! Maps annotated records to and from rows of a wide-column store.
//!
//! Responsibilities:
//! - Populate a record from a row's cells (`populate`)
//! - Produce the set-cell mutation and row key for a record (`build_mutation`)
//! - Carry the mapping configuration (`MapperConfig`)
//!
//! # Example
//!
//! ```
//! use cellmap_mapper::{record, Row, Timestamp};
//!
//! #[derive(Default)]
//! struct Person {
//!     key: String,
//!     name: String,
//!     age: i32,
//! }
//!
//! record!(Person {
//!     key => ",rowkey",
//!     name => "p:name",
//!     age => "p:age",
//! });
//!
//! let row = Row::new()
//!     .with_cell("r1", "p", "name", "Ada")
//!     .with_cell("r1", "p", "age", 38i32.to_be_bytes().to_vec());
//! let mut person = Person::default();
//! cellmap_mapper::populate(&row, &mut person).unwrap();
//! assert_eq!(person.key, "r1");
//!
//! let rm = cellmap_mapper::build_mutation(&mut person, Timestamp::from_micros(0)).unwrap();
//! assert_eq!(rm.key, "r1");
//! assert_eq!(rm.mutation.len(), 2);
//! ```
//!
//! # Module Structure
//!
//! - `row` - read-side cells and the `RowSource` trait
//! - `mutation` - write-side entries, `MutationSink` and timestamps
//! - `config` - `MapperConfig`
//! - `mapper` - the `Mapper` itself

mod config;
mod mapper;
mod mutation;
mod row;

pub use cellmap_core::{Coordinate, Kind, MapError, MapResult, Slot, Value};
pub use cellmap_record::{record, FieldDecl, Record, SlotPolicy};
pub use config::MapperConfig;
pub use mapper::{Mapper, WriteSummary};
pub use mutation::{Mutation, MutationSink, RowMutation, SetCell, Timestamp};
pub use row::{ReadItem, Row, RowSource};

/// Populate `record` from `row` with the default configuration.
pub fn populate<S, R>(row: &S, record: &mut R) -> MapResult<()>
where
    S: RowSource + ?Sized,
    R: Record,
{
    Mapper::default().populate(row, record)
}

/// Build the mutation for `record` with the default configuration.
pub fn build_mutation<R: Record>(record: &mut R, timestamp: Timestamp) -> MapResult<RowMutation> {
    Mapper::default().build_mutation(record, timestamp)
}
