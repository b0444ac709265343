use crate::config::StepCosts;
use direction::Direction;
use grid_2d::Coord;
use std::slice;

/// A reconstructed path. Coordinates run from the start to the goal, and
/// `directions[i]` is the move from `coords[i]` to `coords[i + 1]`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
    directions: Vec<Direction>,
    cost: u32,
}

impl Path {
    /// Builds a path from coordinates and directions collected while walking
    /// parent links backwards from the goal.
    pub(crate) fn from_goal_to_start(
        mut coords: Vec<Coord>,
        mut directions: Vec<Direction>,
        cost: u32,
    ) -> Self {
        debug_assert_eq!(coords.len(), directions.len() + 1);
        coords.reverse();
        directions.reverse();
        Self {
            coords,
            directions,
            cost,
        }
    }

    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn goal_to_start(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().rev().cloned()
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn steps(&self) -> PathWalk<'_> {
        PathWalk::new(self.start(), &self.directions)
    }
}

/// Replays a sequence of moves from a starting coordinate, yielding each
/// coordinate entered along with the direction used to enter it.
pub struct PathWalk<'a> {
    current_coord: Coord,
    directions: slice::Iter<'a, Direction>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: Coord, directions: &'a [Direction]) -> Self {
        Self {
            current_coord: start,
            directions: directions.iter(),
        }
    }

    /// Sums the cost of every remaining move.
    pub fn cost(self, step_costs: &StepCosts) -> u32 {
        self.map(|(_, direction)| step_cost(direction, step_costs))
            .sum()
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = (Coord, Direction);
    fn next(&mut self) -> Option<Self::Item> {
        let &direction = self.directions.next()?;
        self.current_coord = step(self.current_coord, direction);
        Some((self.current_coord, direction))
    }
}

pub fn step(coord: Coord, direction: Direction) -> Coord {
    let offset = direction.coord();
    Coord::new(coord.x + offset.x, coord.y + offset.y)
}

pub fn step_cost(direction: Direction, step_costs: &StepCosts) -> u32 {
    if direction.is_ordinal() {
        step_costs.ordinal
    } else {
        step_costs.cardinal
    }
}
