//! Row <-> record assembly.
//!
//! Both directions build a fresh coordinate index over the record for every
//! call, then walk either the row's cells (read) or the index (write).

use std::any::type_name;
use std::collections::HashMap;

use cellmap_codec::{decode, decode_map, encode};
use cellmap_core::{qualifier, Coordinate, MapError, MapResult, Slot, Value, ROW_KEY};
use cellmap_record::{build_index, CoordinateIndex, Record, SlotPolicy};
use tracing::{debug, trace};

use crate::config::MapperConfig;
use crate::mutation::{Mutation, MutationSink, RowMutation, Timestamp};
use crate::row::RowSource;

/// What a write pass produced besides the entries themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Row key taken from the record, empty if none.
    pub key: String,
    /// Sum of the value lengths of all entries.
    pub size: usize,
    /// Number of entries handed to the sink.
    pub entries: usize,
}

/// Maps records to and from rows.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Populate `record` from the cells of `row`.
    ///
    /// An empty row is a no-op. On error, fields decoded before the failing cell
    /// keep their new values.
    pub fn populate<S, R>(&self, row: &S, record: &mut R) -> MapResult<()>
    where
        S: RowSource + ?Sized,
        R: Record,
    {
        if row.is_empty() {
            return Ok(());
        }
        let mut index = build_index(record, &self.config.index_options())?;
        let mut assign_key = index.has_row_key();
        let mut decoded = 0usize;

        for (family, cells) in row.families() {
            // The row key comes from whichever cell is seen first.
            if assign_key {
                if let Some(first) = cells.first() {
                    assign_row_key(&mut index, &first.row)?;
                    assign_key = false;
                }
            }

            let family_map = Coordinate::family_map(family).to_string();
            if let Some(entry) = index.get_mut(&family_map) {
                for target in entry.slots_mut() {
                    let columns = cells
                        .iter()
                        .map(|cell| (qualifier(&cell.column), cell.value.as_slice()));
                    decode_map(&mut target.slot, columns)?;
                }
                decoded += cells.len();
                continue;
            }

            for cell in cells {
                let Some(entry) = index.get_mut(&cell.column) else {
                    continue;
                };
                if entry.coordinate().is_row_key() || entry.coordinate().is_family_map() {
                    continue;
                }
                for target in entry.slots_mut() {
                    decode(&mut target.slot, &cell.value)?;
                }
                decoded += 1;
            }
        }

        debug!(
            record = type_name::<R>(),
            cells = decoded,
            "populated record from row"
        );
        Ok(())
    }

    /// Build the mutation for `record` with every entry at `timestamp`.
    pub fn build_mutation<R: Record>(
        &self,
        record: &mut R,
        timestamp: Timestamp,
    ) -> MapResult<RowMutation> {
        let mut mutation = Mutation::new();
        let summary = self.write_mutation(record, timestamp, &mut mutation)?;
        Ok(RowMutation {
            key: summary.key,
            mutation,
            size: summary.size,
        })
    }

    /// Stream the mutation entries for `record` into `sink`.
    ///
    /// Zero-valued fields are not written. On error the sink may already hold
    /// entries for earlier coordinates.
    pub fn write_mutation<R, K>(
        &self,
        record: &mut R,
        timestamp: Timestamp,
        sink: &mut K,
    ) -> MapResult<WriteSummary>
    where
        R: Record,
        K: MutationSink + ?Sized,
    {
        let index = build_index(record, &self.config.index_options())?;
        let mut summary = WriteSummary::default();

        for entry in index.entries() {
            let coordinate = entry.coordinate();
            match coordinate {
                Coordinate::RowKey => continue,
                Coordinate::Malformed(raw) => {
                    trace!(coordinate = %raw, "skipping malformed coordinate");
                    continue;
                }
                _ => {}
            }
            if let [first, second, ..] = entry.slots() {
                // Only reachable under the fan-out policy.
                debug_assert_eq!(self.config.slot_policy, SlotPolicy::FanOut);
                return Err(MapError::duplicate_coordinate(
                    coordinate.to_string(),
                    &*first.path,
                    &*second.path,
                ));
            }
            let Some(target) = entry.slots().first() else {
                continue;
            };
            if target.slot.is_zero() {
                continue;
            }

            match coordinate {
                Coordinate::FamilyMap { family } => {
                    let map = map_of(&target.slot).ok_or_else(|| {
                        MapError::unsupported_type(target.slot.kind().type_name())
                    })?;
                    let mut columns: Vec<&String> = map.keys().collect();
                    columns.sort();
                    for column in columns {
                        let value = map[column].as_bytes().to_vec();
                        summary.size += value.len();
                        summary.entries += 1;
                        sink.set(family, column, timestamp, value);
                    }
                }
                Coordinate::Column { family, column } => {
                    let value = encode(&target.slot)?;
                    summary.size += value.len();
                    summary.entries += 1;
                    sink.set(family, column, timestamp, value);
                }
                Coordinate::RowKey | Coordinate::Malformed(_) => {}
            }
        }

        summary.key = extract_row_key(&index)?;
        debug!(
            record = type_name::<R>(),
            entries = summary.entries,
            size = summary.size,
            has_key = !summary.key.is_empty(),
            "built row mutation"
        );
        Ok(summary)
    }
}

fn assign_row_key(index: &mut CoordinateIndex<'_>, key: &str) -> MapResult<()> {
    if let Some(entry) = index.get_mut(ROW_KEY) {
        for target in entry.slots_mut() {
            decode(&mut target.slot, key.as_bytes())?;
        }
    }
    Ok(())
}

/// First non-empty row key encoding among the row key slots.
fn extract_row_key(index: &CoordinateIndex<'_>) -> MapResult<String> {
    let Some(entry) = index.get(ROW_KEY) else {
        return Ok(String::new());
    };
    for target in entry.slots() {
        let bytes = encode(&target.slot)?;
        if !bytes.is_empty() {
            return String::from_utf8(bytes).map_err(|e| {
                MapError::invalid_row_key(format!("field '{}': {}", target.path, e))
            });
        }
    }
    Ok(String::new())
}

fn map_of<'s>(slot: &'s Slot<'_>) -> Option<&'s HashMap<String, String>> {
    match slot {
        Slot::Map(map) => Some(&**map),
        Slot::View(Value::Map(map)) => Some(map),
        _ => None,
    }
}
