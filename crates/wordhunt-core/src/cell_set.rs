//! A set of board cells backed by a 16-bit mask.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Not},
};

use crate::Cell;

/// A set of board cells.
///
/// Bit `i` is set when [`Cell::new(i)`](Cell::new) is a member. The search
/// uses it as the visited mask for the current path, and the neighbor table
/// stores one per cell.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Cell, CellSet};
///
/// let mut visited = CellSet::EMPTY;
/// visited.insert(Cell::new(3));
/// visited.insert(Cell::new(7));
///
/// assert!(visited.contains(Cell::new(3)));
/// assert_eq!(visited.len(), 2);
///
/// let unvisited = Cell::new(2).neighbors() & !visited;
/// assert!(!unvisited.contains(Cell::new(3)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet {
    bits: u16,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 16 cells.
    pub const FULL: Self = Self { bits: u16::MAX };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from its raw bit representation.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Returns a copy of this set with `cell` added.
    #[must_use]
    #[inline]
    pub const fn with(self, cell: Cell) -> Self {
        Self {
            bits: self.bits | (1 << cell.index()),
        }
    }

    /// Returns a copy of this set with `cell` removed.
    #[must_use]
    #[inline]
    pub const fn without(self, cell: Cell) -> Self {
        Self {
            bits: self.bits & !(1 << cell.index()),
        }
    }

    /// Adds `cell`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        let inserted = !self.contains(cell);
        *self = self.with(cell);
        inserted
    }

    /// Removes `cell`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, cell: Cell) -> bool {
        let removed = self.contains(cell);
        *self = self.without(cell);
        removed
    }

    /// Returns `true` if `cell` is a member.
    #[must_use]
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.bits & (1 << cell.index()) != 0
    }

    /// Returns the number of members.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over members in ascending index order.
    #[must_use]
    #[inline]
    pub const fn iter(self) -> CellSetIter {
        CellSetIter { bits: self.bits }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Cell::index)).finish()
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl Not for CellSet {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits(!self.bits)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> CellSetIter {
        self.iter()
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Debug, Clone)]
pub struct CellSetIter {
    bits: u16,
}

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Cell::new(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for CellSetIter {}
impl ExactSizeIterator for CellSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = CellSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Cell::new(15)));
        assert!(!set.insert(Cell::new(15)));
        assert!(set.contains(Cell::new(15)));
        assert!(set.remove(Cell::new(15)));
        assert!(!set.remove(Cell::new(15)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let set: CellSet = [9, 0, 15, 4].into_iter().map(Cell::new).collect();
        let indices: Vec<_> = set.iter().map(Cell::index).collect();
        assert_eq!(indices, vec![0, 4, 9, 15]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_operators() {
        let a: CellSet = [0, 1, 2].into_iter().map(Cell::new).collect();
        let b: CellSet = [1, 2, 3].into_iter().map(Cell::new).collect();
        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
        assert_eq!((a & !b).iter().map(Cell::index).collect::<Vec<_>>(), vec![0]);
        assert_eq!(CellSet::FULL.len(), 16);
        assert_eq!(!CellSet::FULL, CellSet::EMPTY);
    }

    #[test]
    fn test_debug_format() {
        let set: CellSet = [2, 5].into_iter().map(Cell::new).collect();
        assert_eq!(format!("{set:?}"), "{2, 5}");
    }
}
