//! Search nodes and legal successor generation.

use crate::cube::{self, Cube, Solution};
use crate::geometry::{step, Coord, Direction};
use crate::snake::{Snake, Token, SNAKE_LENGTH};

/// An immutable partial placement.
///
/// `index` is the next segment to place; segments `0..index` are already in
/// the cube, the last of them at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    cube: Cube,
    solution: Solution,
    index: usize,
    position: Coord,
}

impl Node {
    /// Places the start segment at `position`, pointing along `direction`.
    pub fn seed(position: Coord, direction: Direction) -> Self {
        let (cube, solution) = cube::empty();
        let (cube, solution) = cube::place(&cube, &solution, position, direction, 0);
        Self {
            cube,
            solution,
            index: 1,
            position,
        }
    }

    #[inline]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    #[inline]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Index of the next segment to place.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell holding the most recently placed segment.
    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// True once every segment of the snake is placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.index == SNAKE_LENGTH
    }

    /// Child node with the next segment at `position`, entered along
    /// `direction`. The caller has already checked bounds and occupancy.
    fn advance(&self, position: Coord, direction: Direction) -> Node {
        let (cube, solution) = cube::place(
            &self.cube,
            &self.solution,
            position,
            direction,
            self.index as u8,
        );
        Node {
            cube,
            solution,
            index: self.index + 1,
            position,
        }
    }

    /// Child for `direction`, or `None` if the step leaves the cube or hits
    /// an occupied cell.
    fn try_advance(&self, direction: Direction) -> Option<Node> {
        let target = step(self.position, direction)?;
        if !self.cube.is_empty(target) {
            return None;
        }
        Some(self.advance(target, direction))
    }
}

/// Generates every legal placement of segment `node.index()`.
///
/// Candidates that leave the cube or collide with the snake are pruned here,
/// before they ever reach the frontier. Complete nodes have no successors.
pub fn next_moves(node: &Node, snake: &Snake) -> Vec<Node> {
    if node.is_complete() {
        return Vec::new();
    }
    // the current cell is always occupied in a node built by seed/advance
    let Some(heading) = node.cube.direction(node.position) else {
        return Vec::new();
    };

    match snake.token(node.index) {
        Token::Forced => node.try_advance(heading).into_iter().collect(),
        Token::Free => heading
            .adjacent()
            .into_iter()
            .filter_map(|turn| node.try_advance(turn))
            .collect(),
        Token::Start => Vec::new(),
    }
}
