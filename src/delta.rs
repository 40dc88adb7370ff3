//! The per-record output document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mode::ReplacementMode;
use crate::part::PartRef;

/// The resolved delta document for one record: the record's final mode and
/// the non-empty slot deltas, in canonical slot order.
///
/// Serializes with the slot map flattened beside `mode`, matching the dump
/// layout consumed downstream:
///
/// ```json
/// {
///   "mode": "Additive",
///   "grip": ["GD_Weap.Grip.D"],
///   "sight": [null, "GD_Weap.Sight.A"]
/// }
/// ```
///
/// Null part entries are serialized as JSON `null` and never omitted, so
/// positional meaning survives reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartListDelta {
    /// How the emitted slot lists relate to the base record.
    pub mode: ReplacementMode,
    /// Slot-category name to emitted part list, canonical order.
    #[serde(flatten)]
    pub slots: IndexMap<String, Vec<Option<PartRef>>>,
}

impl PartListDelta {
    /// Creates an empty document with the given mode.
    #[must_use]
    pub fn new(mode: ReplacementMode) -> Self {
        Self {
            mode,
            slots: IndexMap::new(),
        }
    }

    /// Returns the emitted list for a slot, if that slot produced one.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&[Option<PartRef>]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    /// Returns true if no slot produced a delta.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a document from JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` parse failures.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
