//! Balance records and their canonical slot layouts.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::slot::SlotData;

/// Canonical slot order for weapon-type records.
pub const WEAPON_SLOTS: &[&str] = &[
    "body",
    "grip",
    "barrel",
    "sight",
    "stock",
    "elemental",
    "accessory1",
    "accessory2",
    "material",
];

/// Canonical slot order for item-type records.
pub const ITEM_SLOTS: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "material",
];

/// Stable record identifier: the record's namespaced object path.
///
/// Used only for addressing and error context, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record ID from an object path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the record's object path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

/// The kind of a balance record, which fixes its canonical slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Weapon balance: body through material.
    Weapon,
    /// Item balance: alpha through material.
    Item,
}

impl RecordKind {
    /// The fixed slot processing order for this kind.
    ///
    /// Mode escalation by one slot changes how later slots are
    /// interpreted, so this order is load-bearing: slots must be resolved
    /// exactly in this sequence.
    #[must_use]
    pub const fn slot_order(self) -> &'static [&'static str] {
        match self {
            Self::Weapon => WEAPON_SLOTS,
            Self::Item => ITEM_SLOTS,
        }
    }
}

/// A derived/base record pair as delivered by the extraction layer.
///
/// `slots` maps slot-category names to the record's own data.
/// `intrinsics` holds the type-level default lists used as pseudo-base for
/// slots whose base chain is structurally absent. Records are immutable
/// once assembled; base chains are assumed acyclic, not verified.
#[derive(Debug, Clone)]
pub struct BalanceRecord {
    /// Stable identifier, used for addressing and error context.
    pub id: RecordId,
    /// Record kind; fixes the canonical slot order.
    pub kind: RecordKind,
    /// The base record this record derives from, if any.
    pub base: Option<Arc<BalanceRecord>>,
    /// The record's own slot data, keyed by slot-category name.
    pub slots: IndexMap<String, SlotData>,
    /// Type-level default slot lists, used as pseudo-base where the base
    /// chain provides no comparable data.
    pub intrinsics: IndexMap<String, SlotData>,
}

impl BalanceRecord {
    /// Creates an empty record of the given kind.
    #[must_use]
    pub fn new(id: impl Into<RecordId>, kind: RecordKind) -> Self {
        Self {
            id: id.into(),
            kind,
            base: None,
            slots: IndexMap::new(),
            intrinsics: IndexMap::new(),
        }
    }

    /// Sets the base record.
    #[must_use]
    pub fn with_base(mut self, base: Arc<BalanceRecord>) -> Self {
        self.base = Some(base);
        self
    }

    /// Adds slot data for a slot category.
    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, data: SlotData) -> Self {
        self.slots.insert(name.into(), data);
        self
    }

    /// Adds an intrinsic fallback list for a slot category.
    #[must_use]
    pub fn with_intrinsic(mut self, name: impl Into<String>, data: SlotData) -> Self {
        self.intrinsics.insert(name.into(), data);
        self
    }

    /// Looks up this record's own data for a slot category.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&SlotData> {
        self.slots.get(name)
    }

    /// Looks up the comparison base for a slot category: the base record's
    /// slot data where present, otherwise this record's intrinsic fallback
    /// for that slot, otherwise nothing.
    #[must_use]
    pub fn base_slot(&self, name: &str) -> Option<&SlotData> {
        self.base
            .as_deref()
            .and_then(|base| base.slot(name))
            .or_else(|| self.intrinsics.get(name))
    }
}
