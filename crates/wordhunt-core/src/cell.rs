//! Cell indexing and the king-move adjacency table.

use std::fmt::{self, Display};

use crate::CellSet;

/// A cell on the 4×4 board, indexed 0-15 in row-major order.
///
/// # Examples
///
/// ```
/// use wordhunt_core::Cell;
///
/// let cell = Cell::from_xy(2, 1);
/// assert_eq!(cell.index(), 6);
/// assert_eq!((cell.x(), cell.y()), (2, 1));
/// assert_eq!(cell.neighbors().len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Board width and height.
    pub const SIDE: u8 = 4;

    /// Number of cells on the board.
    pub const COUNT: usize = 16;

    /// All cells in row-major order.
    pub const ALL: [Self; 16] = {
        let mut all = [Self(0); 16];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 16 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-15.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 16, "cell index must be in 0-15");
        Self(index)
    }

    /// Creates a cell from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-3.
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Self {
        assert!(x < Self::SIDE && y < Self::SIDE, "coordinates must be in 0-3");
        Self(y * Self::SIDE + x)
    }

    /// Returns the row-major index (0-15).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the column (0-3).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Returns the row (0-3).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Returns the cells reachable from this one by a single king move.
    #[must_use]
    #[inline]
    pub const fn neighbors(self) -> CellSet {
        NeighborTable::STANDARD.neighbors(self)
    }

    /// Returns `true` if `other` is one king move away.
    #[must_use]
    #[inline]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.neighbors().contains(other)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

/// Adjacency relation over the 16 board cells.
///
/// Two cells are neighbors when they differ by at most one row and at most one
/// column. The relation is symmetric and irreflexive: corners have 3
/// neighbors, edge cells 5 and interior cells 8.
///
/// The table is computed at compile time; [`NeighborTable::STANDARD`] is the
/// only instance the engine needs.
///
/// # Examples
///
/// ```
/// use wordhunt_core::{Cell, NeighborTable};
///
/// let table = NeighborTable::STANDARD;
/// let corner = Cell::new(0);
/// let expected = [Cell::new(1), Cell::new(4), Cell::new(5)];
/// assert!(table.neighbors(corner).iter().eq(expected));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborTable {
    neighbors: [CellSet; 16],
}

impl NeighborTable {
    /// King-move adjacency for the 4×4 board.
    pub const STANDARD: Self = Self::build();

    const fn build() -> Self {
        let mut neighbors = [CellSet::EMPTY; 16];
        let mut i = 0;
        while i < Cell::COUNT {
            #[expect(clippy::cast_possible_truncation)]
            let cell = Cell(i as u8);
            let (x, y) = (cell.x().cast_signed(), cell.y().cast_signed());
            let mut set = CellSet::EMPTY;
            let mut dy = -1;
            while dy <= 1 {
                let mut dx = -1;
                while dx <= 1 {
                    let (nx, ny) = (x + dx, y + dy);
                    let side = Cell::SIDE.cast_signed();
                    if (dx != 0 || dy != 0) && 0 <= nx && nx < side && 0 <= ny && ny < side {
                        set = set.with(Cell::from_xy(nx.cast_unsigned(), ny.cast_unsigned()));
                    }
                    dx += 1;
                }
                dy += 1;
            }
            neighbors[i] = set;
            i += 1;
        }
        Self { neighbors }
    }

    /// Returns the neighbor set of `cell`.
    #[must_use]
    #[inline]
    pub const fn neighbors(&self, cell: Cell) -> CellSet {
        self.neighbors[cell.0 as usize]
    }
}

impl Default for NeighborTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
