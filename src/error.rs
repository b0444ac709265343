use grid_2d::Coord;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid must have a non-zero width and height")]
    EmptyGrid,
    #[error("start coordinate is outside the grid")]
    StartOutsideGrid,
    #[error("goal coordinate is outside the grid")]
    GoalOutsideGrid,
    #[error("blocked coordinate {0:?} is outside the grid")]
    BlockOutsideGrid(Coord),
    #[error("start coordinate is blocked")]
    StartSolid,
    #[error("goal coordinate is blocked")]
    GoalSolid,
    #[error("step costs make the manhattan heuristic inconsistent")]
    InconsistentStepCosts,
}
