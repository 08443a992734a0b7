//! Canonical occupancy serialization.
//!
//! A `StateKey` is the only form a position takes when it is handed to an
//! external lookup table. It is built from occupancy alone, one character per
//! cell in construction order: `'1'` for a peg, `'0'` for a hole. Two boards
//! of the same shape and size share a key exactly when they share an
//! occupancy pattern, however they got there.

use serde::{Deserialize, Serialize};

const PEG: char = '1';
const HOLE: char = '0';

/// Canonical occupancy string of a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Build a key from per-cell occupancy (`true` = peg).
    pub fn from_occupancy(occupancy: impl IntoIterator<Item = bool>) -> Self {
        Self(
            occupancy
                .into_iter()
                .map(|peg| if peg { PEG } else { HOLE })
                .collect(),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of cells encoded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pegs encoded.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.0.chars().filter(|&c| c == PEG).count()
    }

    /// Decode back to per-cell occupancy.
    #[must_use]
    pub fn occupancy(&self) -> Vec<bool> {
        self.0.chars().map(|c| c == PEG).collect()
    }

    /// True when every character is a peg or a hole marker.
    ///
    /// Keys built by a board always are; deserialized keys may not be.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.chars().all(|c| c == PEG || c == HOLE)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_occupancy() {
        let key = StateKey::from_occupancy([true, true, false, true]);
        assert_eq!(key.as_str(), "1101");
        assert_eq!(key.len(), 4);
        assert_eq!(key.peg_count(), 3);
        assert_eq!(key.occupancy(), vec![true, true, false, true]);
    }

    #[test]
    fn test_empty_key() {
        let key = StateKey::from_occupancy(std::iter::empty());
        assert!(key.is_empty());
        assert_eq!(key.peg_count(), 0);
    }

    #[test]
    fn test_key_serialization() {
        let key = StateKey::from_occupancy([false, true]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"01\"");

        let deserialized: StateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);
    }

    #[test]
    fn test_well_formed() {
        assert!(StateKey::from_occupancy([true, false]).is_well_formed());

        let foreign: StateKey = serde_json::from_str("\"10x1\"").unwrap();
        assert!(!foreign.is_well_formed());
    }
}
