//! Cube occupancy and fold-order grids.
//!
//! Both grids are flat fixed-size arrays indexed by
//! [`coord_to_idx`](crate::geometry::coord_to_idx). They are `Copy`, so every
//! update produces a fresh snapshot and leaves the original untouched.

use crate::geometry::{coord_to_idx, Coord, Direction, GRID_SIZE};

/// Bitmask with all 27 cells occupied (lowest 27 bits set).
const ALL_CELLS_FILLED: u32 = (1 << GRID_SIZE) - 1;

/// Move index stored in [`Solution`] cells nobody has claimed.
pub const UNSET: i8 = -1;

/// State of a single cube cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Claimed by a segment that entered the cell moving in this direction.
    Occupied(Direction),
}

/// Which cells are claimed, and the direction each was entered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    cells: [Cell; GRID_SIZE],
    /// Bit `i` is set if cell `i` is occupied.
    occupied: u32,
}

impl Cube {
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
            occupied: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self, position: Coord) -> bool {
        self.occupied & (1 << coord_to_idx(position)) == 0
    }

    #[inline]
    pub fn cell(&self, position: Coord) -> Cell {
        self.cells[coord_to_idx(position)]
    }

    /// Direction stored at `position`, if it is occupied.
    #[inline]
    pub fn direction(&self, position: Coord) -> Option<Direction> {
        match self.cell(position) {
            Cell::Empty => None,
            Cell::Occupied(direction) => Some(direction),
        }
    }

    /// Returns a copy with `position` occupied by `direction`.
    #[inline]
    pub fn with(&self, position: Coord, direction: Direction) -> Cube {
        let idx = coord_to_idx(position);
        let mut next = *self;
        next.cells[idx] = Cell::Occupied(direction);
        next.occupied |= 1 << idx;
        next
    }

    pub fn occupied_count(&self) -> u32 {
        self.occupied.count_ones()
    }

    pub fn is_full(&self) -> bool {
        self.occupied == ALL_CELLS_FILLED
    }

    /// Cells in linear index order.
    pub fn cells(&self) -> &[Cell; GRID_SIZE] {
        &self.cells
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::empty()
    }
}

/// Move index of the segment placed in each cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    order: [i8; GRID_SIZE],
}

impl Solution {
    pub const fn empty() -> Self {
        Self {
            order: [UNSET; GRID_SIZE],
        }
    }

    /// Move index at `position`, or `None` when the cell is unset.
    #[inline]
    pub fn index_at(&self, position: Coord) -> Option<u8> {
        let index = self.order[coord_to_idx(position)];
        (index != UNSET).then_some(index as u8)
    }

    /// Returns a copy with `move_index` recorded at `position`.
    #[inline]
    pub fn with(&self, position: Coord, move_index: u8) -> Solution {
        let mut next = *self;
        next.order[coord_to_idx(position)] = move_index as i8;
        next
    }

    /// Raw move indices in linear cell order, [`UNSET`] for empty cells.
    pub fn order(&self) -> &[i8; GRID_SIZE] {
        &self.order
    }
}

impl Default for Solution {
    fn default() -> Self {
        Solution::empty()
    }
}

/// A blank cube and fold-order grid.
pub fn empty() -> (Cube, Solution) {
    (Cube::empty(), Solution::empty())
}

/// Claims `position` for segment `move_index` entering along `direction`.
///
/// The inputs are left unmodified; the updated snapshots are returned.
pub fn place(
    cube: &Cube,
    solution: &Solution,
    position: Coord,
    direction: Direction,
    move_index: u8,
) -> (Cube, Solution) {
    (
        cube.with(position, direction),
        solution.with(position, move_index),
    )
}
