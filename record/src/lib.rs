//! cellmap Record
//!
//! Field metadata and the per-call coordinate index.
//!
//! Responsibilities:
//! - Describe record types through a static field table (`Record`, `record!`)
//! - Parse and cache per-type coordinate layouts
//! - Build a coordinate -> slot index over a live record instance
//!
//! # Module Structure
//!
//! - `record` - the `Record` trait, `FieldDecl` and the `record!` macro
//! - `layout` - parsed per-type layouts, slot policy and index options
//! - `index` - `CoordinateIndex` and `build_index`

mod index;
mod layout;
mod record;

pub use cellmap_core::Slot;
pub use index::{build_index, CoordinateIndex, IndexEntry, IndexedSlot};
pub use layout::{IndexOptions, Layout, LayoutEntry, LayoutOptions, SlotPolicy};
pub use record::{FieldDecl, Record};
