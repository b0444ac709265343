use direction::Direction;
use grid_2d::Coord;
use std::fmt;

/// Search state of one open grid position.
///
/// Costs are `None` until the search first discovers the cell, which orders
/// them above every reachable cost.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub(crate) coord: Coord,
    pub(crate) heuristic_cost: u32,
    pub(crate) accumulated_cost: Option<u32>,
    pub(crate) final_cost: Option<u32>,
    pub(crate) parent: Option<(usize, Direction)>,
    pub(crate) solution: bool,
}

impl Cell {
    pub(crate) fn new(coord: Coord, heuristic_cost: u32) -> Self {
        Self {
            coord,
            heuristic_cost,
            accumulated_cost: None,
            final_cost: None,
            parent: None,
            solution: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }
    pub fn row(&self) -> i32 {
        self.coord.y
    }
    pub fn col(&self) -> i32 {
        self.coord.x
    }

    /// Manhattan distance to the goal, in cells.
    pub fn heuristic_cost(&self) -> u32 {
        self.heuristic_cost
    }

    /// Best known cost of reaching this cell from the start.
    pub fn accumulated_cost(&self) -> Option<u32> {
        self.accumulated_cost
    }

    /// Best known accumulated cost plus the heuristic.
    pub fn final_cost(&self) -> Option<u32> {
        self.final_cost
    }

    /// Arena index of the predecessor, and the direction moved to get here.
    pub fn parent(&self) -> Option<(usize, Direction)> {
        self.parent
    }

    pub fn is_solution(&self) -> bool {
        self.solution
    }

    pub fn is_discovered(&self) -> bool {
        self.final_cost.is_some()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.row(), self.col())
    }
}

/// One entry of the grid arena. Out-of-bounds positions have no slot.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Open(Cell),
    Blocked,
}

impl Slot {
    pub fn cell(&self) -> Option<&Cell> {
        match self {
            Slot::Open(cell) => Some(cell),
            Slot::Blocked => None,
        }
    }
    pub(crate) fn cell_mut(&mut self) -> Option<&mut Cell> {
        match self {
            Slot::Open(cell) => Some(cell),
            Slot::Blocked => None,
        }
    }
}

pub fn manhattan_distance(a: Coord, b: Coord) -> u32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
}
