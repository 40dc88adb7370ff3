//! # partdelta - Part-list inheritance resolution
//!
//! Balance records describe an equippable item or weapon's part
//! composition and inherit from base records several levels deep. Dumping
//! every record's full part lists would be large, diff-hostile, and would
//! hide authored intent: is this record adding a part, or redefining its
//! part pool? This crate resolves, per weighted-part slot category,
//! whether a derived record's slot contents are an additive extension of
//! its base, a selective replacement, or an unconditional snapshot, and
//! emits the minimal `{ mode, slot deltas }` document needed to
//! reconstruct the derived state.
//!
//! Process attachment, object enumeration, and output writing live
//! outside this crate: inputs arrive pre-extracted and already typed.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use partdelta::{
//!     resolve_record, BalanceRecord, RecordKind, ReplacementMode, SlotData, WeightedPart,
//! };
//!
//! let mut base = BalanceRecord::new("GD_Weap.Base", RecordKind::Weapon);
//! let mut derived = BalanceRecord::new("GD_Weap.Derived", RecordKind::Weapon);
//! for &slot in RecordKind::Weapon.slot_order() {
//!     base = base.with_slot(slot, SlotData::disabled());
//!     derived = derived.with_slot(slot, SlotData::disabled());
//! }
//! let base = Arc::new(base.with_slot(
//!     "grip",
//!     SlotData::enabled(vec![WeightedPart::new("GD_Weap.Grip.A", 1.0)]),
//! ));
//! let derived = derived.with_base(base).with_slot(
//!     "grip",
//!     SlotData::enabled(vec![
//!         WeightedPart::new("GD_Weap.Grip.A", 1.0),
//!         WeightedPart::new("GD_Weap.Grip.B", 1.0),
//!     ]),
//! );
//!
//! let delta = resolve_record(&derived).unwrap();
//! assert_eq!(delta.mode, ReplacementMode::Additive);
//! assert_eq!(delta.slot("grip").unwrap().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod delta;
pub mod driver;
pub mod error;
pub mod mode;
pub mod multiset;
pub mod part;
pub mod record;
pub mod resolver;
pub mod runtime;
pub mod slot;

// Re-export primary types at crate root for convenience
pub use delta::PartListDelta;
pub use driver::resolve_record;
pub use error::{ResolveError, ResolveResult, SlotError};
pub use mode::{ModeCell, ReplacementMode};
pub use multiset::{contains_all, multiset_diff, multiset_eq, multiset_hash};
pub use part::{PartRef, WeightedPart};
pub use record::{BalanceRecord, RecordId, RecordKind, ITEM_SLOTS, WEAPON_SLOTS};
pub use resolver::resolve_slot;
pub use runtime::{ResolveHandle, ResolverPool, RuntimeConfig};
pub use slot::{SlotData, SlotDelta};
