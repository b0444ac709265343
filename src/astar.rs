use crate::cell::*;
use crate::config::*;
use crate::error::*;
use crate::frontier::Frontier;
use crate::grid::*;
use crate::metadata::*;
use crate::path::{self, Path};
use direction::{Direction, Directions};
use grid_2d::{Coord, Grid, Size};

/// Exact cost between two coordinates on an open grid where every move
/// costs according to `step_costs`.
pub fn octile_distance(a: Coord, b: Coord, step_costs: &StepCosts) -> u32 {
    let dx = (a.x - b.x).abs() as u32;
    let dy = (a.y - b.y).abs() as u32;
    let (cardinal, ordinal) = if dx < dy {
        (dy - dx, dx)
    } else {
        (dx - dy, dy)
    };
    cardinal * step_costs.cardinal + ordinal * step_costs.ordinal
}

/// A single A* search from `start` to `goal` over a fixed grid.
///
/// The engine owns every cell for the lifetime of the search. Construct a
/// new engine for each search.
#[derive(Debug, Clone)]
pub struct AStar {
    node_grid: Grid<Slot>,
    closed: Grid<bool>,
    frontier: Frontier,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
    expansions: Vec<Expansion>,
    metadata: Option<SearchMetadata>,
}

impl AStar {
    /// `size` is columns by rows: `Size::new(width, height)` holds `height`
    /// rows of `width` cells, and a coordinate's `x` is its column.
    pub fn new<I>(size: Size, start: Coord, goal: Coord, blocks: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        Self::with_config(size, start, goal, blocks, SearchConfig::default())
    }

    pub fn with_config<I>(
        size: Size,
        start: Coord,
        goal: Coord,
        blocks: I,
        config: SearchConfig,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        let grid = ObstacleGrid::from_blocks(size, blocks)?;
        Self::from_solid_grid(&grid, start, goal, config)
    }

    pub fn from_solid_grid<G>(
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<Self, Error>
    where
        G: SolidGrid,
    {
        config.step_costs.validate()?;

        let size = grid.size();
        if size.width() == 0 || size.height() == 0 {
            return Err(Error::EmptyGrid);
        }
        match grid.occupancy(start) {
            Occupancy::OutOfBounds => return Err(Error::StartOutsideGrid),
            Occupancy::Blocked => return Err(Error::StartSolid),
            Occupancy::Open => (),
        }
        match grid.occupancy(goal) {
            Occupancy::OutOfBounds => return Err(Error::GoalOutsideGrid),
            Occupancy::Blocked => return Err(Error::GoalSolid),
            Occupancy::Open => (),
        }

        let mut node_grid = Grid::new_fn(size, |coord| {
            Slot::Open(Cell::new(coord, manhattan_distance(coord, goal)))
        });

        let start_cell = node_grid
            .get_mut(start)
            .and_then(Slot::cell_mut)
            .ok_or(Error::StartOutsideGrid)?;
        start_cell.accumulated_cost = Some(0);
        start_cell.final_cost = Some(start_cell.heuristic_cost);

        let mut num_blocked = 0;
        for y in 0..size.height() as i32 {
            for x in 0..size.width() as i32 {
                let coord = Coord::new(x, y);
                if grid.is_solid_or_outside(coord) {
                    if let Some(slot) = node_grid.get_mut(coord) {
                        *slot = Slot::Blocked;
                        num_blocked += 1;
                    }
                }
            }
        }

        log::debug!(
            "astar: {}x{} grid, {} blocked, start {:?}, goal {:?}",
            size.width(),
            size.height(),
            num_blocked,
            start,
            goal
        );

        Ok(Self {
            frontier: Frontier::new((size.width() * size.height()) as usize),
            closed: Grid::new_clone(size, false),
            node_grid,
            start,
            goal,
            config,
            expansions: Vec::new(),
            metadata: None,
        })
    }

    /// Runs the search to completion. A second call returns the result of
    /// the first without searching again.
    pub fn process(&mut self) -> SearchMetadata {
        if let Some(metadata) = self.metadata {
            return metadata;
        }

        let start_index = self.index(self.start);
        let goal_index = self.index(self.goal);

        let mut metadata = SearchMetadata {
            outcome: Outcome::NoPath,
            num_nodes_visited: 0,
            num_nodes_seen: 1,
            num_cost_updates: 0,
        };

        let start_cost = self.node_grid.raw()[start_index]
            .cell()
            .and_then(Cell::final_cost)
            .unwrap_or(0);
        self.frontier.push(start_index, start_cost);

        while let Some(current_entry) = self.frontier.pop() {
            let current_index = current_entry.node_index;
            metadata.num_nodes_visited += 1;

            let (current_coord, current_accumulated) = {
                let cell = match self.node_grid.raw()[current_index].cell() {
                    Some(cell) => cell,
                    None => continue,
                };
                (cell.coord, cell.accumulated_cost.unwrap_or(0))
            };

            self.closed.raw_mut()[current_index] = true;
            self.expansions.push(Expansion {
                coord: current_coord,
                final_cost: current_entry.cost(),
            });
            log::trace!(
                "astar: closed {:?} with cost {}",
                current_coord,
                current_entry.cost()
            );

            if current_index == goal_index {
                metadata.outcome = Outcome::PathFound;
                break;
            }

            for direction in Directions {
                let neighbour_coord = path::step(current_coord, direction);
                let neighbour_index = match self.node_grid.index_of_coord(neighbour_coord) {
                    Some(index) => index,
                    None => continue,
                };
                let accumulated =
                    current_accumulated + path::step_cost(direction, &self.config.step_costs);
                match self.relax(current_index, neighbour_index, direction, accumulated) {
                    Relaxation::Inserted => metadata.num_nodes_seen += 1,
                    Relaxation::Improved => metadata.num_cost_updates += 1,
                    Relaxation::Unchanged => (),
                }
            }
        }

        log::debug!(
            "astar: {:?} after visiting {} nodes ({} seen, {} cost updates)",
            metadata.outcome,
            metadata.num_nodes_visited,
            metadata.num_nodes_seen,
            metadata.num_cost_updates
        );

        self.metadata = Some(metadata);
        metadata
    }

    /// Offers `target` a path through `current` with the given accumulated
    /// cost, recording it if it beats the best one known so far.
    fn relax(
        &mut self,
        current_index: usize,
        target_index: usize,
        direction: Direction,
        accumulated: u32,
    ) -> Relaxation {
        if self.closed.raw()[target_index] {
            return Relaxation::Unchanged;
        }
        let in_frontier = self.frontier.contains(target_index);
        let target = match self.node_grid.raw_mut()[target_index].cell_mut() {
            Some(cell) => cell,
            None => return Relaxation::Unchanged,
        };

        debug_assert!(!in_frontier || self.frontier.cost(target_index) == target.final_cost);

        let tentative_final = target.heuristic_cost + accumulated;
        let improves = match target.final_cost {
            Some(final_cost) => tentative_final < final_cost,
            None => true,
        };
        if in_frontier && !improves {
            return Relaxation::Unchanged;
        }

        target.accumulated_cost = Some(accumulated);
        target.final_cost = Some(tentative_final);
        target.parent = Some((current_index, direction));
        log::trace!(
            "astar: {:?} reached with cost {}",
            target.coord,
            tentative_final
        );

        if in_frontier {
            self.frontier.decrease_cost(target_index, tentative_final);
            Relaxation::Improved
        } else {
            self.frontier.push(target_index, tentative_final);
            Relaxation::Inserted
        }
    }

    /// Follows parent links back from the goal, marking every cell on the
    /// way as part of the solution. Returns `None` if the goal was never
    /// reached.
    pub fn reconstruct_path(&mut self) -> Option<Path> {
        let goal_index = self.index(self.goal);
        if !self.closed.raw()[goal_index] {
            return None;
        }
        let cost = self.node_grid.raw()[goal_index]
            .cell()
            .and_then(Cell::accumulated_cost)?;

        let mut coords = Vec::new();
        let mut directions = Vec::new();
        let mut index = goal_index;
        loop {
            let cell = self.node_grid.raw_mut()[index].cell_mut()?;
            cell.solution = true;
            coords.push(cell.coord);
            match cell.parent {
                Some((parent_index, direction)) => {
                    directions.push(direction);
                    index = parent_index;
                }
                None => break,
            }
        }

        Some(Path::from_goal_to_start(coords, directions, cost))
    }

    fn index(&self, coord: Coord) -> usize {
        // start and goal were checked against the grid on construction
        self.node_grid
            .index_of_coord(coord)
            .unwrap_or_default()
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn occupancy(&self, coord: Coord) -> Occupancy {
        match self.node_grid.get(coord) {
            Some(Slot::Open(_)) => Occupancy::Open,
            Some(Slot::Blocked) => Occupancy::Blocked,
            None => Occupancy::OutOfBounds,
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.node_grid.get(coord).and_then(Slot::cell)
    }

    pub fn final_cost(&self, coord: Coord) -> Option<u32> {
        self.cell(coord).and_then(Cell::final_cost)
    }

    pub fn is_closed(&self, coord: Coord) -> bool {
        self.closed.get(coord).cloned().unwrap_or(false)
    }

    pub fn is_solution(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(false, Cell::is_solution)
    }

    /// Every cell closed by the search, in the order it was closed.
    pub fn expansions(&self) -> &[Expansion] {
        &self.expansions
    }

    pub fn metadata(&self) -> Option<SearchMetadata> {
        self.metadata
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.node_grid.iter().filter_map(Slot::cell)
    }

    pub fn num_open_cells(&self) -> usize {
        self.cells().count()
    }

    #[cfg(test)]
    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relaxation {
    Inserted,
    Improved,
    Unchanged,
}
