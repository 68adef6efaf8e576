//! Coordinate index: coordinate -> field slots of one record instance.

use std::any::type_name;
use std::collections::HashMap;
use std::sync::Arc;

use cellmap_core::{Coordinate, MapError, MapResult, Slot, ROW_KEY};

use crate::{IndexOptions, Layout, Record};

/// A field slot together with the path of the field it points into.
#[derive(Debug)]
pub struct IndexedSlot<'a> {
    pub path: Arc<str>,
    pub slot: Slot<'a>,
}

/// All slots registered under one coordinate.
#[derive(Debug)]
pub struct IndexEntry<'a> {
    coordinate: Coordinate,
    slots: Vec<IndexedSlot<'a>>,
}

impl<'a> IndexEntry<'a> {
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn slots(&self) -> &[IndexedSlot<'a>] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [IndexedSlot<'a>] {
        &mut self.slots
    }

    /// Number of fields sharing this coordinate.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Coordinate index of one record instance, valid for a single mapping call.
///
/// Entries keep the declaration order of their first field.
#[derive(Debug, Default)]
pub struct CoordinateIndex<'a> {
    entries: Vec<IndexEntry<'a>>,
    positions: HashMap<String, usize>,
}

impl<'a> CoordinateIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot under `coordinate`.
    pub fn insert(&mut self, coordinate: Coordinate, path: Arc<str>, slot: Slot<'a>) {
        let key = coordinate.to_string();
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                self.entries.push(IndexEntry {
                    coordinate,
                    slots: Vec::new(),
                });
                self.positions.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[position].slots.push(IndexedSlot { path, slot });
    }

    /// Look up a coordinate by its string form (`family:column`, `family:$$`, `rowkey`).
    pub fn get(&self, coordinate: &str) -> Option<&IndexEntry<'a>> {
        self.positions.get(coordinate).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, coordinate: &str) -> Option<&mut IndexEntry<'a>> {
        match self.positions.get(coordinate) {
            Some(&i) => Some(&mut self.entries[i]),
            None => None,
        }
    }

    pub fn contains(&self, coordinate: &str) -> bool {
        self.positions.contains_key(coordinate)
    }

    /// Returns true if a field is bound to the row key.
    pub fn has_row_key(&self) -> bool {
        self.contains(ROW_KEY)
    }

    pub fn entries(&self) -> &[IndexEntry<'a>] {
        &self.entries
    }

    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the coordinate index of `record`.
///
/// The type's layout comes from the process-wide cache; slots are taken fresh
/// from the instance on every call. Fields outside `options.family_filter` are
/// left out of the index.
pub fn build_index<'a, R: Record>(
    record: &'a mut R,
    options: &IndexOptions,
) -> MapResult<CoordinateIndex<'a>> {
    let layout = Layout::of::<R>(options.layout_options())?;
    let filter = options.family_filter.as_deref();
    let slots = record.slots();
    if slots.len() != layout.len() {
        return Err(MapError::invalid_target(format!(
            "{} declares {} fields but exposes {} slots",
            type_name::<R>(),
            layout.len(),
            slots.len()
        )));
    }

    let mut index = CoordinateIndex::new();
    for (entry, slot) in layout.entries().iter().zip(slots) {
        match &entry.coordinate {
            Some(coordinate) if coordinate.admitted_by(filter) => {
                index.insert(coordinate.clone(), entry.path.clone(), slot);
            }
            _ => {}
        }
    }
    Ok(index)
}
