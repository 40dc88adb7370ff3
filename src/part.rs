//! Part identity and weighted part entries.
//!
//! A part is addressed by its opaque object path. The resolver never
//! interprets the path; it only compares and hashes it. "No part assigned"
//! is expressed as `Option<PartRef>` = `None` and is a distinct value in
//! every comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a game part.
///
/// Wraps the part's namespaced object path. Compared and hashed by the
/// contained string; never parsed or interpreted.
///
/// # Examples
///
/// ```
/// use partdelta::PartRef;
///
/// let part = PartRef::new("GD_Weap_SMG.Barrel.SMG_Barrel_Alien");
/// assert_eq!(part.as_str(), "GD_Weap_SMG.Barrel.SMG_Barrel_Alien");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartRef(String);

impl PartRef {
    /// Creates a part reference from an object path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the part's object path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PartRef {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for PartRef {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<PartRef> for String {
    fn from(part: PartRef) -> Self {
        part.0
    }
}

/// One entry of a slot's weighted part pool.
///
/// The weight steers random part selection upstream and is carried through
/// for fidelity only; resolution never consults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPart {
    /// The referenced part, or `None` for an authored empty entry.
    pub part: Option<PartRef>,
    /// Selection weight. Not used by resolution.
    pub weight: f32,
}

impl WeightedPart {
    /// Creates an entry referencing `part` with the given weight.
    #[must_use]
    pub fn new(part: impl Into<PartRef>, weight: f32) -> Self {
        Self {
            part: Some(part.into()),
            weight,
        }
    }

    /// Creates an entry whose part reference is the null sentinel.
    #[must_use]
    pub const fn empty(weight: f32) -> Self {
        Self { part: None, weight }
    }
}
