//! Per-slot data as handed over by the extraction layer.

use serde::{Deserialize, Serialize};

use crate::part::{PartRef, WeightedPart};

/// The resolved delta for one slot.
///
/// `None` means "no change to emit for this slot"; `Some` carries the
/// ordered part list, null entries preserved in place.
pub type SlotDelta = Option<Vec<Option<PartRef>>>;

/// One named slot's data for one record.
///
/// Built once per record per slot by the extraction layer and never
/// mutated afterwards. Entry order is authoring order: it carries no
/// meaning for equality but must survive into emitted output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotData {
    /// Whether this slot participates in part selection at all.
    pub enabled: bool,
    /// The weighted part pool, in authoring order. Duplicates allowed.
    pub parts: Vec<WeightedPart>,
}

impl SlotData {
    /// Creates an enabled slot with the given part pool.
    #[must_use]
    pub fn enabled(parts: Vec<WeightedPart>) -> Self {
        Self {
            enabled: true,
            parts,
        }
    }

    /// Creates a disabled slot. Its part pool is ignored by resolution.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            parts: Vec::new(),
        }
    }

    /// Extracts the ordered part reference list, preserving order,
    /// duplicates, and null entries.
    #[must_use]
    pub fn part_list(&self) -> Vec<Option<PartRef>> {
        self.parts.iter().map(|entry| entry.part.clone()).collect()
    }
}
