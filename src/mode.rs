//! Replacement mode and the per-record mode accumulator.
//!
//! A record carries exactly one mode; every emitted slot delta of that
//! record is interpreted under it. The mode is undefined until the first
//! slot carrying comparison information is processed, and once set it only
//! ever escalates within the record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a record's emitted slot deltas relate to its base.
///
/// Ordered: `Additive < Selective < Complete`. A record's mode only moves
/// up this ordering while its slots are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReplacementMode {
    /// Emitted lists extend the base's part pools.
    Additive,
    /// Emitted lists replace the base's pools for the slots present.
    Selective,
    /// Every emitted list is an unconditional full snapshot.
    Complete,
}

impl fmt::Display for ReplacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Additive => "Additive",
            Self::Selective => "Selective",
            Self::Complete => "Complete",
        };
        write!(f, "{token}")
    }
}

/// The record-scoped mode accumulator.
///
/// One cell is created per record, threaded through that record's slot
/// resolutions, and discarded. It must never be shared or reused across
/// records.
#[derive(Debug, Default)]
pub struct ModeCell {
    mode: Option<ReplacementMode>,
}

impl ModeCell {
    /// Creates an unset cell.
    #[must_use]
    pub const fn new() -> Self {
        Self { mode: None }
    }

    /// Creates a cell pre-seeded with a mode.
    ///
    /// Used by callers whose upstream policy marks a record as
    /// always-snapshot (`Complete`); the algorithm itself never sets
    /// `Complete`.
    #[must_use]
    pub const fn seeded(mode: ReplacementMode) -> Self {
        Self { mode: Some(mode) }
    }

    /// Returns the current mode, if set.
    #[must_use]
    pub const fn get(&self) -> Option<ReplacementMode> {
        self.mode
    }

    /// Returns true once any slot has set a mode.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.mode.is_some()
    }

    /// Raises the cell to `mode` if that is an escalation; never
    /// downgrades.
    pub fn escalate(&mut self, mode: ReplacementMode) {
        self.mode = Some(match self.mode {
            Some(current) => current.max(mode),
            None => mode,
        });
    }

    /// Consumes the cell, defaulting to `Additive` when no slot carried
    /// comparison information.
    #[must_use]
    pub fn finalize(self) -> ReplacementMode {
        self.mode.unwrap_or(ReplacementMode::Additive)
    }
}
