//! Per-slot delta resolution.
//!
//! Decides, for one slot of one record, what the derived slot emits
//! relative to its comparison base: nothing, an additive extension, or a
//! full snapshot. The record-scoped [`ModeCell`] threads the escalation
//! state across the record's slots; because an escalation from an earlier
//! slot changes how later slots are interpreted, callers must invoke this
//! in the record kind's canonical slot order.

use crate::error::SlotError;
use crate::mode::{ModeCell, ReplacementMode};
use crate::multiset::{contains_all, multiset_diff, multiset_eq};
use crate::slot::{SlotData, SlotDelta};

/// Resolves one slot against its comparison base.
///
/// `base_data` is the corresponding base record slot, or the intrinsic
/// fallback where the base chain is structurally absent, or `None` where
/// no ancestor data exists at all. `mode` is the record's shared
/// accumulator; it may be escalated, never downgraded.
///
/// Returns `Ok(None)` when this slot has nothing to emit.
///
/// # Errors
///
/// [`SlotError::ModeConflict`] when an additive-shaped slot is reached
/// under an already-incompatible record mode; this signals an upstream
/// contract violation and aborts the record.
pub fn resolve_slot(
    data: &SlotData,
    base_data: Option<&SlotData>,
    mode: &mut ModeCell,
) -> Result<SlotDelta, SlotError> {
    // A disabled slot never contributes, and must not touch the mode.
    if !data.enabled {
        return Ok(None);
    }

    let parts = data.part_list();

    let base_parts = match base_data {
        Some(base) if base.enabled => base.part_list(),
        // No meaningful ancestor data: the whole list is new.
        _ => {
            if !mode.is_set() {
                mode.escalate(ReplacementMode::Additive);
            }
            return Ok(Some(parts));
        }
    };

    // Containment, not multiset: a single surviving occurrence anywhere in
    // `parts` accounts for every base occurrence of that value.
    let base_removed_something = !contains_all(&parts, &base_parts);

    let already_escalated = matches!(
        mode.get(),
        Some(ReplacementMode::Selective | ReplacementMode::Complete)
    );

    if already_escalated || base_removed_something {
        mode.escalate(ReplacementMode::Selective);
        if multiset_eq(&parts, &base_parts) {
            // Derived equals base; under snapshot interpretation there is
            // nothing to emit.
            return Ok(None);
        }
        return Ok(Some(parts));
    }

    // Pure-addition shape. A set mode other than Additive here means the
    // escalation check above was bypassed: upstream bug, not recoverable.
    match mode.get() {
        None | Some(ReplacementMode::Additive) => {}
        Some(current) => return Err(SlotError::ModeConflict { mode: current }),
    }
    mode.escalate(ReplacementMode::Additive);

    let extra = multiset_diff(&parts, &base_parts);
    Ok(if extra.is_empty() { None } else { Some(extra) })
}
