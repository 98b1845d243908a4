//! Typed identifier for LEGO sets.
//!
//! Identifiers are sequential integers assigned by the catalog, not UUIDs:
//! a new set always receives one more than the highest identifier in use.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`LegoSet`](crate::lego_set::LegoSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegoSetId(u64);

impl LegoSetId {
    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Access the raw integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier to assign after `highest`, or `1` for an empty catalog.
    #[must_use]
    pub fn next_after(highest: Option<Self>) -> Self {
        Self(highest.map_or(0, Self::get).saturating_add(1))
    }
}

impl fmt::Display for LegoSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LegoSetId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
