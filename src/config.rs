use crate::error::Error;

/// Cost of a single move between adjacent cells.
///
/// The defaults approximate the 1:√2 ratio between orthogonal and diagonal
/// moves as 10:14.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCosts {
    pub cardinal: u32,
    pub ordinal: u32,
}

pub const DEFAULT_CARDINAL_COST: u32 = 10;
pub const DEFAULT_ORDINAL_COST: u32 = 14;

impl StepCosts {
    pub fn new(cardinal: u32, ordinal: u32) -> Self {
        Self { cardinal, ordinal }
    }

    /// A cardinal move changes the manhattan distance by at most 1 and an
    /// ordinal move by at most 2. Cheaper steps would let the heuristic
    /// overestimate, and closed cells could then hold suboptimal costs.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cardinal < 1 || self.ordinal < 2 {
            Err(Error::InconsistentStepCosts)
        } else {
            Ok(())
        }
    }
}

impl Default for StepCosts {
    fn default() -> Self {
        Self {
            cardinal: DEFAULT_CARDINAL_COST,
            ordinal: DEFAULT_ORDINAL_COST,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub step_costs: StepCosts,
}
