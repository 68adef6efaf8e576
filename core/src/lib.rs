//! cellmap core types
//!
//! This crate provides the foundational types shared by the cellmap crates:
//! - Coordinates and field tag parsing (`family:column`, `family:$$`, `rowkey`)
//! - Field kinds and owned values
//! - Field slots (borrowed, typed access to a record's fields)
//! - Common error types

mod coordinate;
mod error;
mod slot;
mod value;

pub use coordinate::*;
pub use error::*;
pub use slot::*;
pub use value::*;
