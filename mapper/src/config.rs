//! Mapper configuration.

use cellmap_record::{IndexOptions, SlotPolicy};
use serde::{Deserialize, Serialize};

/// Configuration for a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// What happens when several fields claim the same coordinate.
    pub slot_policy: SlotPolicy,
    /// Fail on tags that are not exactly `family:column` instead of skipping
    /// them on write.
    pub strict_coordinates: bool,
    /// Only map fields of this family.
    pub family_filter: Option<String>,
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_policy(mut self, policy: SlotPolicy) -> Self {
        self.slot_policy = policy;
        self
    }

    pub fn with_strict_coordinates(mut self, strict: bool) -> Self {
        self.strict_coordinates = strict;
        self
    }

    pub fn with_family_filter(mut self, family: impl Into<String>) -> Self {
        self.family_filter = Some(family.into());
        self
    }

    /// Shorthand for the fan-out slot policy.
    pub fn fan_out() -> Self {
        Self::default().with_slot_policy(SlotPolicy::FanOut)
    }

    pub(crate) fn index_options(&self) -> IndexOptions {
        IndexOptions {
            family_filter: self.family_filter.clone(),
            slot_policy: self.slot_policy,
            strict_coordinates: self.strict_coordinates,
        }
    }
}
