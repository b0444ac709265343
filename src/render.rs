//! Console tables for a search, as `Display` views over an engine.

use crate::astar::AStar;
use crate::grid::Occupancy;
use crate::path::Path;
use grid_2d::Coord;
use std::fmt;

const START: &str = "SO";
const GOAL: &str = "DE";
const BLOCKED: &str = "BL";
const ON_PATH: &str = "X";
const OFF_PATH: &str = "0";

fn write_table<F>(f: &mut fmt::Formatter, astar: &AStar, mut cell_text: F) -> fmt::Result
where
    F: FnMut(Coord) -> String,
{
    let size = astar.size();
    for y in 0..size.height() as i32 {
        for x in 0..size.width() as i32 {
            write!(f, "{:<4}", cell_text(Coord::new(x, y)))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Layout of the grid: start, goal, open and blocked cells.
pub struct GridView<'a>(pub &'a AStar);

impl<'a> fmt::Display for GridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let astar = self.0;
        writeln!(f, "Grid:")?;
        write_table(f, astar, |coord| {
            if coord == astar.start() {
                START.to_string()
            } else if coord == astar.goal() {
                GOAL.to_string()
            } else if astar.occupancy(coord) == Occupancy::Blocked {
                BLOCKED.to_string()
            } else {
                OFF_PATH.to_string()
            }
        })
    }
}

/// Final cost of every cell. Cells the search never reached show `-`.
pub struct ScoreView<'a>(pub &'a AStar);

impl<'a> fmt::Display for ScoreView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let astar = self.0;
        writeln!(f, "Scores for cell:")?;
        write_table(f, astar, |coord| match astar.cell(coord) {
            Some(cell) => cell
                .final_cost()
                .map_or_else(|| "-".to_string(), |cost| cost.to_string()),
            None => BLOCKED.to_string(),
        })
    }
}

/// Cells marked as part of the reconstructed path.
pub struct SolutionView<'a>(pub &'a AStar);

impl<'a> fmt::Display for SolutionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let astar = self.0;
        writeln!(f, "Solution:")?;
        write_table(f, astar, |coord| {
            if coord == astar.start() {
                START.to_string()
            } else if coord == astar.goal() {
                GOAL.to_string()
            } else if astar.occupancy(coord) == Occupancy::Blocked {
                BLOCKED.to_string()
            } else if astar.is_solution(coord) {
                ON_PATH.to_string()
            } else {
                OFF_PATH.to_string()
            }
        })
    }
}

/// The path from goal back to start, e.g. `[0,0]->[1,0]->[2,1]`.
pub struct PathView<'a>(pub &'a Path);

impl<'a> fmt::Display for PathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Path: ")?;
        for (i, coord) in self.0.goal_to_start().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "[{},{}]", coord.y, coord.x)?;
        }
        Ok(())
    }
}
