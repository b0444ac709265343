use crate::error::Error;
use grid_2d::{Coord, Grid, Size};

/// What occupies a position relative to some grid.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Open,
    Blocked,
    OutOfBounds,
}

impl Occupancy {
    pub fn is_open(self) -> bool {
        self == Occupancy::Open
    }
}

pub trait SolidGrid {
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
    fn occupancy(&self, coord: Coord) -> Occupancy {
        match self.is_solid(coord) {
            Some(false) => Occupancy::Open,
            Some(true) => Occupancy::Blocked,
            None => Occupancy::OutOfBounds,
        }
    }
}

/// A fixed-size grid of permanent obstacles.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
    solid: Grid<bool>,
}

impl ObstacleGrid {
    pub fn new(size: Size) -> Result<Self, Error> {
        if size.width() == 0 || size.height() == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self {
            solid: Grid::new_clone(size, false),
        })
    }

    pub fn from_blocks<I>(size: Size, blocks: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Self::new(size)?;
        for coord in blocks {
            grid.block(coord)?;
        }
        Ok(grid)
    }

    pub fn block(&mut self, coord: Coord) -> Result<(), Error> {
        let solid = self
            .solid
            .get_mut(coord)
            .ok_or(Error::BlockOutsideGrid(coord))?;
        *solid = true;
        Ok(())
    }

    pub fn num_blocked(&self) -> usize {
        self.solid.iter().filter(|&&solid| solid).count()
    }
}

impl SolidGrid for ObstacleGrid {
    fn size(&self) -> Size {
        self.solid.size()
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.solid.get(coord).cloned()
    }
}
