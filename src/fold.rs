//! A complete placement of the snake inside the cube.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cube::{self, Cube, Solution};
use crate::geometry::{
    are_adjacent, idx_to_coord, in_bounds, rotate_coord, Coord, Direction, GRID_SIZE,
};
use crate::moves::Node;
use crate::snake::{Snake, Token, SNAKE_LENGTH};

/// Ways a placement can fail to be a fold of the whole cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error("only {occupied} of {} cells are occupied", GRID_SIZE)]
    Incomplete { occupied: u32 },
    #[error("segment {index} is not recorded in the fold order")]
    MissingSegment { index: usize },
    #[error("segment {index} at {position:?} lies outside the cube")]
    OutOfBounds { index: usize, position: Coord },
    #[error("cell {position:?} is claimed twice")]
    Overlap { position: Coord },
    #[error("segment {index} does not share a face with the segment before it")]
    NotAdjacent { index: usize },
    #[error("segment {index} records the wrong entry direction")]
    WrongDirection { index: usize },
}

/// The solved cube and the fold order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fold {
    cube: Cube,
    solution: Solution,
    /// Cell of each segment, by segment index.
    path: [Coord; SNAKE_LENGTH],
    /// Direction stored for each segment, by segment index.
    directions: [Direction; SNAKE_LENGTH],
}

impl Fold {
    /// Reads the fold order back out of a node's grids.
    ///
    /// Segments the node has not placed are left at the origin; call
    /// [`Fold::verify`] before trusting the result.
    pub fn from_node(node: &Node) -> Fold {
        let cube = *node.cube();
        let solution = *node.solution();
        let mut path = [(0, 0, 0); SNAKE_LENGTH];
        let mut directions = [Direction::PLUS_X; SNAKE_LENGTH];

        for cell_index in 0..GRID_SIZE {
            let position = idx_to_coord(cell_index);
            let (Some(index), Some(direction)) =
                (solution.index_at(position), cube.direction(position))
            else {
                continue;
            };
            if let Some(slot) = path.get_mut(index as usize) {
                *slot = position;
                directions[index as usize] = direction;
            }
        }

        Fold {
            cube,
            solution,
            path,
            directions,
        }
    }

    /// Builds a fold from the cell of every segment in order.
    ///
    /// The start segment is given the direction of the first step, so the
    /// derived snake opens with a forced segment.
    pub fn from_path(path: [Coord; SNAKE_LENGTH]) -> Result<Fold, FoldError> {
        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        for (index, &position) in path.iter().enumerate() {
            if !in_bounds(position) {
                return Err(FoldError::OutOfBounds { index, position });
            }
            if !seen.insert(position) {
                return Err(FoldError::Overlap { position });
            }
        }

        let mut directions = [Direction::PLUS_X; SNAKE_LENGTH];
        for index in 1..SNAKE_LENGTH {
            let (from, to) = (path[index - 1], path[index]);
            let delta = (to.0 - from.0, to.1 - from.1, to.2 - from.2);
            directions[index] =
                Direction::from_delta(delta).ok_or(FoldError::NotAdjacent { index })?;
        }
        directions[0] = directions[1];

        let fold = Fold::assemble(path, directions);
        fold.verify()?;
        Ok(fold)
    }

    fn assemble(path: [Coord; SNAKE_LENGTH], directions: [Direction; SNAKE_LENGTH]) -> Fold {
        let (mut cube, mut solution) = cube::empty();
        for (index, (&position, &direction)) in path.iter().zip(&directions).enumerate() {
            (cube, solution) = cube::place(&cube, &solution, position, direction, index as u8);
        }
        Fold {
            cube,
            solution,
            path,
            directions,
        }
    }

    /// Checks that this is a fold of the whole cube.
    ///
    /// Every cell is occupied, segments `0..27` each appear exactly once,
    /// consecutive segments share a face, and each segment after the first
    /// records the step that entered it.
    pub fn verify(&self) -> Result<(), FoldError> {
        if !self.cube.is_full() {
            return Err(FoldError::Incomplete {
                occupied: self.cube.occupied_count(),
            });
        }

        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        for (index, &position) in self.path.iter().enumerate() {
            if self.solution.index_at(position) != Some(index as u8) {
                return Err(FoldError::MissingSegment { index });
            }
            if !seen.insert(position) {
                return Err(FoldError::Overlap { position });
            }
            if self.cube.direction(position) != Some(self.directions[index]) {
                return Err(FoldError::WrongDirection { index });
            }
        }

        for index in 1..SNAKE_LENGTH {
            let (from, to) = (self.path[index - 1], self.path[index]);
            if !are_adjacent(from, to) {
                return Err(FoldError::NotAdjacent { index });
            }
            let (dx, dy, dz) = self.directions[index].delta();
            if (from.0 + dx, from.1 + dy, from.2 + dz) != to {
                return Err(FoldError::WrongDirection { index });
            }
        }

        Ok(())
    }

    /// The snake this fold realises.
    ///
    /// A segment is forced when it keeps the direction of its predecessor and
    /// free when it turns.
    pub fn snake(&self) -> Snake {
        let mut tokens = [Token::Start; SNAKE_LENGTH];
        for index in 1..SNAKE_LENGTH {
            tokens[index] = if self.directions[index] == self.directions[index - 1] {
                Token::Forced
            } else {
                Token::Free
            };
        }
        Snake::from_fold_tokens(tokens)
    }

    /// The same fold turned by rotation `rotation` of
    /// [`ROTATIONS`](crate::geometry::ROTATIONS).
    pub fn rotated(&self, rotation: usize) -> Fold {
        let path = self.path.map(|position| rotate_coord(rotation, position));
        let directions = self.directions.map(|direction| direction.rotated(rotation));
        Fold::assemble(path, directions)
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Cell of each segment in fold order.
    pub fn path(&self) -> &[Coord; SNAKE_LENGTH] {
        &self.path
    }

    /// Entry direction of each segment in fold order.
    pub fn directions(&self) -> &[Direction; SNAKE_LENGTH] {
        &self.directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ROTATIONS;

    /// Boustrophedon through the layers: x sweeps fastest, then z, then y.
    fn serpentine() -> [Coord; SNAKE_LENGTH] {
        let mut path = [(0, 0, 0); SNAKE_LENGTH];
        let mut index = 0;
        for y in 0..3 {
            for row in 0..3 {
                let z = if y % 2 == 0 { row } else { 2 - row };
                for column in 0..3 {
                    let x = if (y * 3 + row) % 2 == 0 { column } else { 2 - column };
                    path[index] = (x, y, z);
                    index += 1;
                }
            }
        }
        path
    }

    #[test]
    fn test_from_path_accepts_serpentine() {
        let fold = Fold::from_path(serpentine()).unwrap();
        assert!(fold.verify().is_ok());
        assert!(fold.cube().is_full());
        assert_eq!(fold.directions()[0], Direction::PLUS_X);
        assert_eq!(fold.snake().to_string(), "sffaafaafaafaafaafaafaafaaf");
    }

    #[test]
    fn test_from_path_rejects_overlap() {
        let mut path = serpentine();
        path[5] = path[4];
        assert_eq!(
            Fold::from_path(path),
            Err(FoldError::Overlap { position: path[4] })
        );
    }

    #[test]
    fn test_from_path_rejects_jumps() {
        let mut path = serpentine();
        path.swap(3, 4);
        assert!(matches!(
            Fold::from_path(path),
            Err(FoldError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn test_from_path_rejects_out_of_bounds() {
        let mut path = serpentine();
        path[26] = (3, 2, 2);
        assert_eq!(
            Fold::from_path(path),
            Err(FoldError::OutOfBounds {
                index: 26,
                position: (3, 2, 2)
            })
        );
    }

    #[test]
    fn test_rotations_preserve_the_snake() {
        let fold = Fold::from_path(serpentine()).unwrap();
        for rotation in 0..ROTATIONS.len() {
            let rotated = fold.rotated(rotation);
            assert!(rotated.verify().is_ok(), "rotation {rotation}");
            assert_eq!(rotated.snake(), fold.snake(), "rotation {rotation}");
        }
        assert_eq!(fold.rotated(0), fold);
    }

    #[test]
    fn test_partial_node_does_not_verify() {
        let node = Node::seed((0, 0, 0), Direction::PLUS_X);
        let fold = Fold::from_node(&node);
        assert_eq!(fold.verify(), Err(FoldError::Incomplete { occupied: 1 }));
    }

    #[test]
    fn test_from_node_reads_back_the_path() {
        let fold = Fold::from_path(serpentine()).unwrap();
        // a node carrying the same grids reproduces the same fold
        let mut node = Node::seed(fold.path()[0], fold.directions()[0]);
        let snake = fold.snake();
        for index in 1..SNAKE_LENGTH {
            node = crate::moves::next_moves(&node, &snake)
                .into_iter()
                .find(|child| child.position() == fold.path()[index])
                .unwrap();
        }
        assert_eq!(Fold::from_node(&node), fold);
    }
}
