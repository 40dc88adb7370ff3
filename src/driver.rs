//! Record-level resolution: drives the slot resolver across a record's
//! canonical slot order and assembles the output document.

use crate::delta::PartListDelta;
use crate::error::{ResolveError, ResolveResult};
use crate::mode::ModeCell;
use crate::record::BalanceRecord;
use crate::resolver::resolve_slot;

/// Resolves one record into its delta document.
///
/// Walks the record kind's canonical slot order with a fresh [`ModeCell`],
/// resolving each slot against the base record's data (or the record's
/// intrinsic fallback where the base chain is structurally absent), and
/// collects the non-empty deltas in order. A still-unset mode finalizes to
/// `Additive`. The record is not mutated; two runs yield identical
/// documents.
///
/// # Errors
///
/// - [`ResolveError::MissingSlotData`] when the record carries no data for
///   a canonical slot category.
/// - [`ResolveError::Slot`] wrapping a slot-level failure with the record
///   and slot it occurred in.
pub fn resolve_record(record: &BalanceRecord) -> ResolveResult<PartListDelta> {
    let mut mode = ModeCell::new();
    let mut slots = indexmap::IndexMap::new();

    for &slot_name in record.kind.slot_order() {
        let data = record
            .slot(slot_name)
            .ok_or_else(|| ResolveError::MissingSlotData {
                record: record.id.clone(),
                slot: slot_name.to_string(),
            })?;

        let base_data = record.base_slot(slot_name);

        let delta =
            resolve_slot(data, base_data, &mut mode).map_err(|source| ResolveError::Slot {
                record: record.id.clone(),
                slot: slot_name.to_string(),
                source,
            })?;

        if let Some(parts) = delta {
            slots.insert(slot_name.to_string(), parts);
        }
    }

    Ok(PartListDelta {
        mode: mode.finalize(),
        slots,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mode::ReplacementMode;
    use crate::part::{PartRef, WeightedPart};
    use crate::record::RecordKind;
    use crate::slot::SlotData;

    fn slot(names: &[&str]) -> SlotData {
        SlotData::enabled(names.iter().map(|n| WeightedPart::new(*n, 1.0)).collect())
    }

    fn refs(names: &[&str]) -> Vec<Option<PartRef>> {
        names.iter().map(|n| Some(PartRef::new(*n))).collect()
    }

    /// A weapon record with every canonical slot disabled, ready for
    /// selective overrides.
    fn weapon(id: &str) -> BalanceRecord {
        let mut record = BalanceRecord::new(id, RecordKind::Weapon);
        for &name in RecordKind::Weapon.slot_order() {
            record = record.with_slot(name, SlotData::disabled());
        }
        record
    }

    #[test]
    fn record_without_base_is_additive_with_full_lists() {
        let record = weapon("GD_Weap.A").with_slot("grip", slot(&["A", "B"]));

        let delta = resolve_record(&record).unwrap();
        assert_eq!(delta.mode, ReplacementMode::Additive);
        assert_eq!(delta.slot("grip").unwrap(), refs(&["A", "B"]));
        assert_eq!(delta.slots.len(), 1);
    }

    #[test]
    fn all_slots_disabled_defaults_to_additive_and_empty() {
        let delta = resolve_record(&weapon("GD_Weap.A")).unwrap();
        assert_eq!(delta.mode, ReplacementMode::Additive);
        assert!(delta.is_empty());
    }

    #[test]
    fn missing_canonical_slot_aborts_the_record() {
        let mut record = BalanceRecord::new("GD_Weap.A", RecordKind::Weapon);
        // Populate every slot except "stock".
        for &name in RecordKind::Weapon.slot_order() {
            if name != "stock" {
                record = record.with_slot(name, SlotData::disabled());
            }
        }

        let err = resolve_record(&record).unwrap_err();
        assert!(err.is_missing_slot_data());
        let msg = format!("{err}");
        assert!(msg.contains("GD_Weap.A"));
        assert!(msg.contains("stock"));
    }

    #[test]
    fn escalation_in_early_slot_changes_later_slot_output() {
        let base = Arc::new(
            weapon("GD_Weap.Base")
                .with_slot("body", slot(&["X", "Y"]))
                .with_slot("grip", slot(&["A", "B"])),
        );

        // body drops "Y" (forces Selective); grip is pure addition.
        let record = weapon("GD_Weap.Derived")
            .with_base(Arc::clone(&base))
            .with_slot("body", slot(&["X"]))
            .with_slot("grip", slot(&["A", "B", "C"]));

        let delta = resolve_record(&record).unwrap();
        assert_eq!(delta.mode, ReplacementMode::Selective);
        assert_eq!(delta.slot("body").unwrap(), refs(&["X"]));
        // grip emits its full snapshot, not just ["C"].
        assert_eq!(delta.slot("grip").unwrap(), refs(&["A", "B", "C"]));

        // The same slot contents with the escalating slot placed later in
        // canonical order leave the earlier slot additive.
        let base = Arc::new(
            weapon("GD_Weap.Base2")
                .with_slot("grip", slot(&["A", "B"]))
                .with_slot("stock", slot(&["X", "Y"])),
        );
        let record = weapon("GD_Weap.Derived2")
            .with_base(base)
            .with_slot("grip", slot(&["A", "B", "C"]))
            .with_slot("stock", slot(&["X"]));

        let delta = resolve_record(&record).unwrap();
        assert_eq!(delta.mode, ReplacementMode::Selective);
        // grip was processed before the escalation: additive delta.
        assert_eq!(delta.slot("grip").unwrap(), refs(&["C"]));
        assert_eq!(delta.slot("stock").unwrap(), refs(&["X"]));
    }

    #[test]
    fn intrinsic_fallback_keeps_balance_layer_additions_additive() {
        // No base record at all, but the type's default list covers the
        // slot: the record's extra part is detected as an addition.
        let record = weapon("GD_Weap.A")
            .with_intrinsic("barrel", slot(&["Std1", "Std2"]))
            .with_slot("barrel", slot(&["Std1", "Std2", "Rare"]));

        let delta = resolve_record(&record).unwrap();
        assert_eq!(delta.mode, ReplacementMode::Additive);
        assert_eq!(delta.slot("barrel").unwrap(), refs(&["Rare"]));
    }

    #[test]
    fn slot_map_is_in_canonical_order() {
        let record = weapon("GD_Weap.A")
            .with_slot("material", slot(&["M"]))
            .with_slot("body", slot(&["B"]));

        let delta = resolve_record(&record).unwrap();
        let keys: Vec<&str> = delta.slots.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["body", "material"]);
    }

    #[test]
    fn resolution_is_deterministic() {
        let base = Arc::new(weapon("GD_Weap.Base").with_slot("grip", slot(&["A", "B", "C"])));
        let record = weapon("GD_Weap.Derived")
            .with_base(base)
            .with_slot("grip", slot(&["A", "B"]))
            .with_slot("sight", slot(&["S"]));

        let first = resolve_record(&record).unwrap();
        let second = resolve_record(&record).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.to_json_pretty().unwrap(),
            second.to_json_pretty().unwrap()
        );
    }
}
