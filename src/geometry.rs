//! Coordinates, directions and rotations of the 3x3x3 cube.
//!
//! Cells are addressed by `(x, y, z)` with every component in `0..DIM`.
//! A direction is an axis plus a sign; the snake moves one unit along a
//! direction per segment.

use std::fmt;

/// A 3D grid coordinate.
pub type Coord = (i32, i32, i32);

/// Cells per axis.
pub const DIM: i32 = 3;

/// Number of cells in the cube.
pub const GRID_SIZE: usize = 27;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis inside a `Coord` triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Which way along an axis a direction points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[inline]
    pub const fn unit(self) -> i32 {
        match self {
            Sign::Negative => -1,
            Sign::Positive => 1,
        }
    }

    #[inline]
    pub const fn flip(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// A unit direction: an axis and a sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    axis: Axis,
    sign: Sign,
}

impl Direction {
    pub const PLUS_X: Direction = Direction::new(Axis::X, Sign::Positive);
    pub const MINUS_X: Direction = Direction::new(Axis::X, Sign::Negative);
    pub const PLUS_Y: Direction = Direction::new(Axis::Y, Sign::Positive);
    pub const MINUS_Y: Direction = Direction::new(Axis::Y, Sign::Negative);
    pub const PLUS_Z: Direction = Direction::new(Axis::Z, Sign::Positive);
    pub const MINUS_Z: Direction = Direction::new(Axis::Z, Sign::Negative);

    /// All six directions, ordered by axis and positive before negative.
    pub const ALL: [Direction; 6] = [
        Direction::PLUS_X,
        Direction::MINUS_X,
        Direction::PLUS_Y,
        Direction::MINUS_Y,
        Direction::PLUS_Z,
        Direction::MINUS_Z,
    ];

    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        self.axis
    }

    #[inline]
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// Signed unit vector for this direction.
    #[inline]
    pub const fn delta(self) -> Coord {
        let unit = self.sign.unit();
        match self.axis {
            Axis::X => (unit, 0, 0),
            Axis::Y => (0, unit, 0),
            Axis::Z => (0, 0, unit),
        }
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        Direction::new(self.axis, self.sign.flip())
    }

    /// The four directions a free hinge may turn into.
    ///
    /// These lie along the two axes orthogonal to `self`, so the result never
    /// contains `self` or its reverse. Order is X, Y, Z with the positive
    /// direction first; the search relies on this order being stable.
    pub fn adjacent(self) -> [Direction; 4] {
        let mut turns = [self; 4];
        let mut next = 0;
        for axis in Axis::ALL {
            if axis == self.axis {
                continue;
            }
            turns[next] = Direction::new(axis, Sign::Positive);
            turns[next + 1] = Direction::new(axis, Sign::Negative);
            next += 2;
        }
        turns
    }

    /// Inverse of [`Direction::delta`]; `None` unless `delta` is a unit vector.
    pub fn from_delta(delta: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|dir| dir.delta() == delta)
    }

    /// Applies rotation `rotation` (an index into [`ROTATIONS`]).
    pub fn rotated(self, rotation: usize) -> Direction {
        let rotated = ROTATIONS[rotation](self.delta());
        // rotations map unit vectors onto unit vectors
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == rotated)
            .unwrap_or(self)
    }

    /// Display symbol: upper case for the positive direction.
    pub const fn symbol(self) -> char {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Positive) => 'X',
            (Axis::X, Sign::Negative) => 'x',
            (Axis::Y, Sign::Positive) => 'Y',
            (Axis::Y, Sign::Negative) => 'y',
            (Axis::Z, Sign::Positive) => 'Z',
            (Axis::Z, Sign::Negative) => 'z',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign {
            Sign::Positive => '+',
            Sign::Negative => '-',
        };
        let axis = match self.axis {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        };
        write!(f, "{}{}", sign, axis)
    }
}

/// Returns true if every component lies in `0..DIM`.
#[inline(always)]
pub fn in_bounds((x, y, z): Coord) -> bool {
    (0..DIM).contains(&x) && (0..DIM).contains(&y) && (0..DIM).contains(&z)
}

/// Moves one unit from `from` along `direction`.
///
/// Returns `None` when the target falls outside the cube.
#[inline]
pub fn step(from: Coord, direction: Direction) -> Option<Coord> {
    let (dx, dy, dz) = direction.delta();
    let target = (from.0 + dx, from.1 + dy, from.2 + dz);
    in_bounds(target).then_some(target)
}

/// True if `a` and `b` share a face.
pub fn are_adjacent(a: Coord, b: Coord) -> bool {
    (a.0 - b.0).abs() + (a.1 - b.1).abs() + (a.2 - b.2).abs() == 1
}

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * DIM * DIM + y * DIM + z`.
#[inline(always)]
pub const fn coord_to_idx((x, y, z): Coord) -> usize {
    (x * DIM * DIM + y * DIM + z) as usize
}

/// Converts a linear cell index to (x, y, z) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    let cell_index = cell_index as i32;
    (
        cell_index / (DIM * DIM),
        (cell_index / DIM) % DIM,
        cell_index % DIM,
    )
}

/// All 24 proper rotations of a cube, acting on vectors about the origin.
///
/// Organized as 6 face-up choices x 4 rotations around vertical:
/// - Rotations 0-3: +Z face up
/// - Rotations 4-7: +Y face up
/// - Rotations 8-11: -Z face up
/// - Rotations 12-15: -Y face up
/// - Rotations 16-19: +X face up
/// - Rotations 20-23: -X face up
pub const ROTATIONS: [fn(Coord) -> Coord; 24] = [
    |(x, y, z)| (x, y, z),
    |(x, y, z)| (-y, x, z),
    |(x, y, z)| (-x, -y, z),
    |(x, y, z)| (y, -x, z),
    |(x, y, z)| (x, -z, y),
    |(x, y, z)| (z, x, y),
    |(x, y, z)| (-x, z, y),
    |(x, y, z)| (-z, -x, y),
    |(x, y, z)| (x, -y, -z),
    |(x, y, z)| (y, x, -z),
    |(x, y, z)| (-x, y, -z),
    |(x, y, z)| (-y, -x, -z),
    |(x, y, z)| (x, z, -y),
    |(x, y, z)| (-z, x, -y),
    |(x, y, z)| (-x, -z, -y),
    |(x, y, z)| (z, -x, -y),
    |(x, y, z)| (z, y, -x),
    |(x, y, z)| (-y, z, -x),
    |(x, y, z)| (-z, -y, -x),
    |(x, y, z)| (y, -z, -x),
    |(x, y, z)| (-z, y, x),
    |(x, y, z)| (-y, -z, x),
    |(x, y, z)| (z, -y, x),
    |(x, y, z)| (y, z, x),
];

/// Rotates a grid cell about the center cell `(1, 1, 1)`.
pub fn rotate_coord(rotation: usize, (x, y, z): Coord) -> Coord {
    let center = DIM / 2;
    let (rx, ry, rz) = ROTATIONS[rotation]((x - center, y - center, z - center));
    (rx + center, ry + center, rz + center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_is_four_orthogonal_directions() {
        for dir in Direction::ALL {
            let turns = dir.adjacent();
            assert_eq!(turns.len(), 4);
            for turn in turns {
                assert_ne!(turn.axis(), dir.axis(), "{dir} admits {turn}");
            }
            for (i, a) in turns.iter().enumerate() {
                for b in &turns[i + 1..] {
                    assert_ne!(a, b, "{dir} lists {a} twice");
                }
            }
        }
    }

    #[test]
    fn test_adjacent_order() {
        assert_eq!(
            Direction::PLUS_X.adjacent(),
            [
                Direction::PLUS_Y,
                Direction::MINUS_Y,
                Direction::PLUS_Z,
                Direction::MINUS_Z
            ]
        );
        assert_eq!(
            Direction::MINUS_Y.adjacent(),
            [
                Direction::PLUS_X,
                Direction::MINUS_X,
                Direction::PLUS_Z,
                Direction::MINUS_Z
            ]
        );
        assert_eq!(
            Direction::PLUS_Z.adjacent(),
            [
                Direction::PLUS_X,
                Direction::MINUS_X,
                Direction::PLUS_Y,
                Direction::MINUS_Y
            ]
        );
    }

    #[test]
    fn test_delta_and_axis_agree() {
        for dir in Direction::ALL {
            let delta = dir.delta();
            let components = [delta.0, delta.1, delta.2];
            for (i, &component) in components.iter().enumerate() {
                if i == dir.axis().index() {
                    assert_eq!(component, dir.sign().unit());
                } else {
                    assert_eq!(component, 0);
                }
            }
            assert_eq!(Direction::from_delta(delta), Some(dir));
            assert_eq!(dir.reverse().reverse(), dir);
            assert_ne!(dir.reverse(), dir);
        }
        assert_eq!(Direction::from_delta((1, 1, 0)), None);
    }

    #[test]
    fn test_symbols() {
        let symbols: String = Direction::ALL.iter().map(|dir| dir.symbol()).collect();
        assert_eq!(symbols, "XxYyZz");
        assert_eq!(Direction::MINUS_Z.to_string(), "-z");
    }

    #[test]
    fn test_step_stays_in_bounds() {
        assert_eq!(step((0, 0, 0), Direction::PLUS_X), Some((1, 0, 0)));
        assert_eq!(step((0, 0, 0), Direction::MINUS_X), None);
        assert_eq!(step((2, 1, 2), Direction::PLUS_Z), None);
        assert_eq!(step((2, 1, 2), Direction::MINUS_Y), Some((2, 0, 2)));
        assert!(!in_bounds((3, 0, 0)));
        assert!(!in_bounds((0, -1, 0)));
        assert!(in_bounds((2, 2, 2)));
    }

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..GRID_SIZE {
            let coord = idx_to_coord(idx);
            assert!(in_bounds(coord), "idx_to_coord({idx}) out of range");
            assert_eq!(coord_to_idx(coord), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    fn test_rotations_are_permutations() {
        for rotation in 0..ROTATIONS.len() {
            let mut seen = [false; GRID_SIZE];
            for src in 0..GRID_SIZE {
                let dest = rotate_coord(rotation, idx_to_coord(src));
                assert!(in_bounds(dest), "Rotation {rotation} maps {src} outside");
                let dest = coord_to_idx(dest);
                assert!(!seen[dest], "Rotation {rotation} maps two cells to {dest}");
                seen[dest] = true;
            }
        }
    }

    #[test]
    fn test_rotated_directions_follow_rotated_steps() {
        let from = (1, 1, 1);
        for rotation in 0..ROTATIONS.len() {
            for dir in Direction::ALL {
                let to = step(from, dir).unwrap();
                let rotated_to = rotate_coord(rotation, to);
                assert_eq!(step(from, dir.rotated(rotation)), Some(rotated_to));
            }
        }
    }
}
