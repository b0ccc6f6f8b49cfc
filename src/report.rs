//! Text rendering of folds.
//!
//! Only reads the cube and fold-order grids; nothing here feeds back into
//! the search.

use crate::cube::{Cell, Cube, Solution};
use crate::fold::Fold;
use crate::geometry::DIM;

/// Width of one rendered cell: direction symbol plus two-digit move index.
const CELL_WIDTH: usize = 3;

/// Formats the grids as Y-slices side by side.
///
/// Each slice shows rows from z = 2 (top) down to z = 0, with x increasing
/// to the right. Occupied cells show the entry direction symbol and the move
/// index (`X07`); empty cells show `.`.
pub fn format_layers(cube: &Cube, solution: &Solution) -> String {
    let slice_width = DIM as usize * (CELL_WIDTH + 1) - 1;
    let mut lines = Vec::with_capacity(DIM as usize + 1);

    let header: Vec<String> = (0..DIM)
        .map(|y| format!("{:<width$}", format!("y={}", y), width = slice_width))
        .collect();
    lines.push(header.join("   "));

    for z in (0..DIM).rev() {
        let slices: Vec<String> = (0..DIM)
            .map(|y| {
                (0..DIM)
                    .map(|x| format_cell(cube, solution, (x, y, z)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        lines.push(slices.join("   "));
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

fn format_cell(cube: &Cube, solution: &Solution, position: (i32, i32, i32)) -> String {
    match (cube.cell(position), solution.index_at(position)) {
        (Cell::Occupied(direction), Some(index)) => {
            format!("{}{:02}", direction.symbol(), index)
        }
        (Cell::Occupied(direction), None) => format!("{}??", direction.symbol()),
        (Cell::Empty, _) => " . ".to_string(),
    }
}

/// Formats a solved fold as layers.
pub fn format_fold(fold: &Fold) -> String {
    format_layers(fold.cube(), fold.solution())
}

/// Lists the fold as folding instructions, one segment per line.
pub fn format_moves(fold: &Fold) -> String {
    let mut output = String::new();
    for (index, (&(x, y, z), direction)) in
        fold.path().iter().zip(fold.directions()).enumerate()
    {
        let action = if index == 0 { "start" } else { "move" };
        output.push_str(&format!(
            "{:>2}: ({}, {}, {}) {} {}\n",
            index, x, y, z, action, direction
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;
    use crate::search::solve;
    use crate::snake::SAMPLE_SNAKE;

    #[test]
    fn test_empty_layers() {
        let output = format_layers(&Cube::empty(), &Solution::empty());
        let expected = "\
y=0           y=1           y=2
 .   .   .     .   .   .     .   .   .
 .   .   .     .   .   .     .   .   .
 .   .   .     .   .   .     .   .   .
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_single_cell() {
        let (cube, solution) = crate::cube::place(
            &Cube::empty(),
            &Solution::empty(),
            (2, 1, 0),
            Direction::MINUS_Y,
            7,
        );
        let output = format_layers(&cube, &solution);
        let bottom_row = output.lines().last().unwrap();
        assert_eq!(bottom_row, " .   .   .     .   .  y07    .   .   .");
    }

    #[test]
    fn test_sample_layers_snapshot() {
        let outcome = solve(SAMPLE_SNAKE);
        let output = format_fold(outcome.fold().unwrap());
        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_sample_moves_snapshot() {
        let outcome = solve(SAMPLE_SNAKE);
        let output = format_moves(outcome.fold().unwrap());
        insta::assert_snapshot!(output);
    }
}
