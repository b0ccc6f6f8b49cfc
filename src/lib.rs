//! Snake Cube Solver Library
//!
//! Decides whether a snake cube (27 hinged unit cubes described by move
//! tokens) folds into a solid 3x3x3 cube, and recovers one fold order.

pub mod cube;
pub mod fold;
pub mod geometry;
pub mod moves;
pub mod report;
pub mod search;
pub mod snake;

pub use fold::{Fold, FoldError};
pub use search::{
    solve, solve_snake, solve_with_limits, Outcome, Search, SearchLimits, SearchState,
};
pub use snake::{Snake, SnakeError, Token, SAMPLE_SNAKE};
