use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which arena tiles are still available
///
/// Indexed by arena position in the [`TileSet`](crate::spatial::TileSet).
/// Placing a tile clears its bit; the arena itself is never modified.
#[derive(Clone, Debug)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset containing every arena position
    pub fn all(len: usize) -> Self {
        Self {
            bits: bitvec![1; len],
        }
    }

    /// Clear a position, returning whether it was present
    pub fn remove(&mut self, index: usize) -> bool {
        let present = self.contains(index);
        if present {
            self.bits.set(index, false);
        }
        present
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all present positions as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
