//! Error types for partdelta.
//!
//! All failures at this layer are deterministic given identical inputs:
//! there is nothing to retry. Errors carry the record and slot
//! identification needed to diagnose them without any logging.

use thiserror::Error;

use crate::mode::ReplacementMode;
use crate::record::RecordId;

/// Failures detectable while resolving a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    /// An additive-shaped slot (base contained in derived) was reached
    /// while the record's mode had already escalated past `Additive`.
    /// The escalation check should have routed this slot to the snapshot
    /// branch first; reaching here signals an upstream data or algorithm
    /// bug and must not be coerced.
    #[error("additive-shaped slot under already-escalated record mode {mode}")]
    ModeConflict {
        /// The incompatible mode the record had already reached.
        mode: ReplacementMode,
    },
}

/// Record-level resolution failures.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A canonical slot category has no data on the record. The schema
    /// requires every canonical slot to be populated by extraction, so
    /// the record's dump is invalid rather than partial.
    #[error("record {record} has no data for canonical slot '{slot}'")]
    MissingSlotData {
        /// The record being resolved.
        record: RecordId,
        /// The canonical slot name that had no data.
        slot: String,
    },

    /// A slot-level failure, with the record and slot it occurred in.
    #[error("record {record}, slot '{slot}': {source}")]
    Slot {
        /// The record being resolved.
        record: RecordId,
        /// The slot being resolved.
        slot: String,
        /// The underlying slot failure.
        #[source]
        source: SlotError,
    },

    /// The batch pool's submission queue is full.
    #[error("resolver queue is full (capacity {capacity})")]
    QueueFull {
        /// The configured queue capacity.
        capacity: usize,
    },

    /// The batch pool's workers have shut down.
    #[error("resolver workers disconnected")]
    Disconnected,
}

impl ResolveError {
    /// Returns true if this is a missing-slot-data contract violation.
    #[must_use]
    pub const fn is_missing_slot_data(&self) -> bool {
        matches!(self, Self::MissingSlotData { .. })
    }

    /// Returns true if this wraps a slot-level mode conflict.
    #[must_use]
    pub const fn is_mode_conflict(&self) -> bool {
        matches!(
            self,
            Self::Slot {
                source: SlotError::ModeConflict { .. },
                ..
            }
        )
    }

    /// Returns true if this is batch-pool backpressure.
    #[must_use]
    pub const fn is_queue_full(&self) -> bool {
        matches!(self, Self::QueueFull { .. })
    }
}

/// Result type alias for record resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;
