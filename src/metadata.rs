#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PathFound,
    NoPath,
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetadata {
    pub outcome: Outcome,
    pub num_nodes_visited: usize,
    pub num_nodes_seen: usize,
    pub num_cost_updates: usize,
}

impl SearchMetadata {
    pub fn path_found(&self) -> bool {
        self.outcome == Outcome::PathFound
    }
}

/// A cell as it was when the search closed it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub coord: grid_2d::Coord,
    pub final_cost: u32,
}
