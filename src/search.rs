//! Breadth-first search over partial placements.
//!
//! The frontier is seeded with one start placement per class of cube
//! symmetry, then drained in FIFO order. The first complete node dequeued is
//! the answer; an empty frontier means the snake cannot be folded.

use std::collections::VecDeque;
use std::time::Instant;

use crate::fold::Fold;
use crate::geometry::{Coord, Direction};
use crate::moves::{next_moves, Node};
use crate::snake::{Snake, SnakeError};

/// Start placements, one per distinct (cell, direction) class under the
/// 24 rotations of the cube:
/// - corner pointing along an edge
/// - middle edge pointing along the face, and along the edge towards a corner
/// - face center pointing along the face, and into the cube
pub const SEEDS: [(Coord, Direction); 5] = [
    ((0, 0, 0), Direction::PLUS_X),
    ((0, 0, 1), Direction::PLUS_Y),
    ((0, 0, 1), Direction::PLUS_Z),
    ((1, 0, 1), Direction::PLUS_X),
    ((1, 0, 1), Direction::PLUS_Y),
];

/// Bounds on how much work a search may do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after expanding this many nodes. `None` searches to the end.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub const UNLIMITED: SearchLimits = SearchLimits {
        max_expansions: None,
    };

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Where a search is in its lifecycle. Every state but `Running` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    /// A complete placement was dequeued.
    Solved,
    /// The frontier ran dry.
    Exhausted,
    /// The expansion budget ran out first.
    Halted,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Child nodes pushed onto the frontier.
    pub generated: usize,
    /// Largest frontier length seen.
    pub peak_frontier: usize,
    /// Highest segment index reached by any dequeued node.
    pub deepest: usize,
}

/// One solve attempt. Owns its frontier; nothing is shared between searches.
pub struct Search {
    snake: Snake,
    limits: SearchLimits,
    frontier: VecDeque<Node>,
    state: SearchState,
    solved: Option<Node>,
    stats: SearchStats,
    started: Instant,
}

impl Search {
    /// Creates a running search with the frontier holding [`SEEDS`].
    pub fn new(snake: Snake, limits: SearchLimits) -> Self {
        let frontier: VecDeque<Node> = SEEDS
            .iter()
            .map(|&(position, direction)| Node::seed(position, direction))
            .collect();
        let stats = SearchStats {
            peak_frontier: frontier.len(),
            deepest: 1,
            ..SearchStats::default()
        };

        Self {
            snake,
            limits,
            frontier,
            state: SearchState::Running,
            solved: None,
            stats,
            started: Instant::now(),
        }
    }

    /// Dequeues and handles a single node.
    ///
    /// Returns the state afterwards; once final, further calls do nothing.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        let Some(node) = self.frontier.pop_front() else {
            return self.finish(SearchState::Exhausted);
        };

        if node.is_complete() {
            self.solved = Some(node);
            return self.finish(SearchState::Solved);
        }

        if self
            .limits
            .max_expansions
            .is_some_and(|max| self.stats.expanded >= max)
        {
            // keep the node so the frontier still describes the open search
            self.frontier.push_front(node);
            return self.finish(SearchState::Halted);
        }

        if node.index() > self.stats.deepest {
            self.stats.deepest = node.index();
            log::debug!(
                "Reached segment {} after {} expansions, frontier {}",
                node.index(),
                self.stats.expanded,
                self.frontier.len()
            );
        }

        let children = next_moves(&node, &self.snake);
        self.stats.expanded += 1;
        self.stats.generated += children.len();
        self.frontier.extend(children);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());

        SearchState::Running
    }

    /// Steps until the search reaches a final state.
    pub fn run(&mut self) -> SearchState {
        while self.step() == SearchState::Running {}
        self.state
    }

    fn finish(&mut self, state: SearchState) -> SearchState {
        self.state = state;
        log::info!(
            "Search for {} finished {:?}: expanded {}, generated {}, peak frontier {}, took {:?}",
            self.snake,
            state,
            self.stats.expanded,
            self.stats.generated,
            self.stats.peak_frontier,
            self.started.elapsed()
        );
        state
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of nodes waiting to be expanded.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The complete node, once the search is solved.
    pub fn solved_node(&self) -> Option<&Node> {
        self.solved.as_ref()
    }

    /// Consumes the search, returning the fold if one was found.
    pub fn into_fold(self) -> Option<Fold> {
        self.solved.as_ref().map(Fold::from_node)
    }
}

/// Result of a solve call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The input is not a snake; no search was run.
    Invalid(SnakeError),
    /// Every placement was explored and none fills the cube.
    Unsolvable,
    Solved(Fold),
    /// The expansion budget ran out before a verdict.
    Halted { expanded: usize },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn fold(&self) -> Option<&Fold> {
        match self {
            Outcome::Solved(fold) => Some(fold),
            _ => None,
        }
    }
}

/// Parses `input` and searches for a fold with no expansion budget.
pub fn solve(input: &str) -> Outcome {
    solve_with_limits(input, SearchLimits::UNLIMITED)
}

/// Parses `input` and searches for a fold within `limits`.
pub fn solve_with_limits(input: &str, limits: SearchLimits) -> Outcome {
    match Snake::parse(input) {
        Ok(snake) => solve_snake(snake, limits),
        Err(err) => {
            log::warn!("Rejected snake {:?}: {}", input, err);
            Outcome::Invalid(err)
        }
    }
}

/// Searches for a fold of an already validated snake.
pub fn solve_snake(snake: Snake, limits: SearchLimits) -> Outcome {
    let mut search = Search::new(snake, limits);
    match search.run() {
        SearchState::Solved => match search.into_fold() {
            Some(fold) => Outcome::Solved(fold),
            None => Outcome::Unsolvable,
        },
        SearchState::Halted => Outcome::Halted {
            expanded: search.stats().expanded,
        },
        SearchState::Exhausted | SearchState::Running => Outcome::Unsolvable,
    }
}
