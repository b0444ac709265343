mod frontier;
mod render;

use crate::config::StepCosts;
use crate::grid::*;
use crate::path::{step, step_cost};
use direction::Directions;
use grid_2d::{Coord, Grid, Size};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Parses a grid drawn with `.` (open), `#` (blocked), `s` (start), `g`
/// (goal) and `B` (start and goal on the same cell).
fn grid_from_strings(strings: &[&str]) -> (Size, Vec<Coord>, Coord, Coord) {
    let width = strings[0].len() as u32;
    let height = strings.len() as u32;
    let mut blocks = Vec::new();
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            match ch {
                '.' => (),
                '#' => blocks.push(coord),
                's' => start = Some(coord),
                'g' => goal = Some(coord),
                'B' => {
                    goal = Some(coord);
                    start = Some(coord);
                }
                _ => panic!("unexpected character {:?}", ch),
            }
        }
    }
    (
        Size::new(width, height),
        blocks,
        start.unwrap(),
        goal.unwrap(),
    )
}

/// Exact cost from every cell to `goal`, by running dijkstra outwards from
/// the goal. Unreachable and blocked cells are `None`.
fn dijkstra_costs<G: SolidGrid>(grid: &G, goal: Coord, step_costs: &StepCosts) -> Grid<Option<u32>> {
    let mut costs: Grid<Option<u32>> = Grid::new_clone(grid.size(), None);
    let mut queue = BinaryHeap::new();
    *costs.get_mut(goal).unwrap() = Some(0);
    queue.push(Reverse((0, goal.x, goal.y)));
    while let Some(Reverse((cost, x, y))) = queue.pop() {
        let coord = Coord::new(x, y);
        if costs.get(coord).cloned().flatten() != Some(cost) {
            continue;
        }
        for direction in Directions {
            let next = step(coord, direction);
            if grid.is_solid_or_outside(next) {
                continue;
            }
            let next_cost = cost + step_cost(direction, step_costs);
            let entry = costs.get_mut(next).unwrap();
            if entry.map_or(true, |c| next_cost < c) {
                *entry = Some(next_cost);
                queue.push(Reverse((next_cost, next.x, next.y)));
            }
        }
    }
    costs
}
