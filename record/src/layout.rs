//! Per-type coordinate layouts.
//!
//! A layout is the parsed form of a record type's field table: one optional
//! coordinate per flattened field. Layouts depend only on the type, the slot
//! policy and strictness, so they are built once and shared through a
//! process-wide cache holding at most four layouts per record type. The family
//! filter is applied per call by [`build_index`](crate::build_index). Slots are
//! never cached.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use cellmap_core::{Coordinate, FieldTag, MapError, MapResult};
use serde::{Deserialize, Serialize};

use crate::{FieldDecl, Record};

/// How a coordinate claimed by more than one field is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// Every coordinate belongs to exactly one field.
    #[default]
    Exclusive,
    /// Fields sharing a coordinate all receive the decoded value. Writing a
    /// shared non-rowkey coordinate is rejected.
    FanOut,
}

/// Options that shape a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexOptions {
    /// Only index fields of this family (the row key is always indexed).
    pub family_filter: Option<String>,
    /// Coordinate reuse policy.
    pub slot_policy: SlotPolicy,
    /// Reject scalar coordinates that are not exactly `family:column`.
    pub strict_coordinates: bool,
}

impl IndexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family_filter(mut self, family: impl Into<String>) -> Self {
        self.family_filter = Some(family.into());
        self
    }

    pub fn with_slot_policy(mut self, policy: SlotPolicy) -> Self {
        self.slot_policy = policy;
        self
    }

    pub fn with_strict_coordinates(mut self, strict: bool) -> Self {
        self.strict_coordinates = strict;
        self
    }

    /// The part of the options that shapes a cached layout.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            slot_policy: self.slot_policy,
            strict_coordinates: self.strict_coordinates,
        }
    }
}

/// Options a layout is built and cached under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutOptions {
    pub slot_policy: SlotPolicy,
    pub strict_coordinates: bool,
}

/// One flattened field of a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Dotted field path.
    pub path: Arc<str>,
    /// Resolved coordinate, or `None` when the field is excluded.
    pub coordinate: Option<Coordinate>,
}

/// Parsed field table of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<LayoutEntry>,
}

type LayoutKey = (TypeId, LayoutOptions);

fn cache() -> &'static RwLock<HashMap<LayoutKey, Arc<Layout>>> {
    static LAYOUTS: OnceLock<RwLock<HashMap<LayoutKey, Arc<Layout>>>> = OnceLock::new();
    LAYOUTS.get_or_init(|| RwLock::new(HashMap::new()))
}

impl Layout {
    /// Build a layout from field declarations.
    ///
    /// Duplicate and strictness checks cover every field of the type.
    pub fn build(decls: &[FieldDecl], options: LayoutOptions) -> MapResult<Self> {
        let mut claimed: HashMap<Coordinate, Arc<str>> = HashMap::new();
        let mut entries = Vec::with_capacity(decls.len());

        for decl in decls {
            let path: Arc<str> = Arc::from(decl.path.as_str());
            let coordinate = FieldTag::parse(decl.tag).resolve();

            if let Some(coordinate) = &coordinate {
                if options.strict_coordinates {
                    if let Coordinate::Malformed(raw) = coordinate {
                        return Err(MapError::malformed_coordinate(&*path, raw.as_str()));
                    }
                }
                if let Some(first) = claimed.get(coordinate) {
                    match (options.slot_policy, coordinate) {
                        (SlotPolicy::Exclusive, Coordinate::RowKey) => {
                            return Err(MapError::duplicate_row_key(&**first, &*path));
                        }
                        (SlotPolicy::Exclusive, _) => {
                            return Err(MapError::duplicate_coordinate(
                                coordinate.to_string(),
                                &**first,
                                &*path,
                            ));
                        }
                        (SlotPolicy::FanOut, _) => {}
                    }
                } else {
                    claimed.insert(coordinate.clone(), path.clone());
                }
            }

            entries.push(LayoutEntry { path, coordinate });
        }

        Ok(Self { entries })
    }

    /// Cached layout of record type `R` under `options`.
    pub fn of<R: Record>(options: LayoutOptions) -> MapResult<Arc<Self>> {
        let key = (TypeId::of::<R>(), options);
        {
            let layouts = cache().read().unwrap_or_else(|e| e.into_inner());
            if let Some(layout) = layouts.get(&key) {
                return Ok(layout.clone());
            }
        }

        let layout = Arc::new(Self::build(&R::fields(), options)?);
        tracing::trace!(
            record = type_name::<R>(),
            fields = layout.len(),
            "cached record layout"
        );
        let mut layouts = cache().write().unwrap_or_else(|e| e.into_inner());
        Ok(layouts.entry(key).or_insert(layout).clone())
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
