//! Open set of the search. Each node is present at most once, and lowering
//! its cost reorders it in place.

use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Lower cost first, then earlier insertion first.
type Priority = Reverse<(u32, u64)>;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PriorityEntry {
    pub(crate) node_index: usize,
    cost: u32,
}

impl PriorityEntry {
    pub(crate) fn cost(&self) -> u32 {
        self.cost
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    seq: u64,
    // PriorityQueue pops the highest priority first, so costs are reversed.
    queue: PriorityQueue<usize, Priority>,
}

impl Frontier {
    /// `num_nodes` is the number of nodes the search may ever push.
    pub(crate) fn new(num_nodes: usize) -> Self {
        Self {
            seq: 0,
            queue: PriorityQueue::with_capacity(num_nodes),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn contains(&self, node_index: usize) -> bool {
        self.queue.get_priority(&node_index).is_some()
    }

    pub(crate) fn cost(&self, node_index: usize) -> Option<u32> {
        self.queue
            .get_priority(&node_index)
            .map(|&Reverse((cost, _))| cost)
    }

    /// Inserts a node that is not already present. Ties between equal costs
    /// are broken in insertion order.
    pub(crate) fn push(&mut self, node_index: usize, cost: u32) {
        debug_assert!(!self.contains(node_index));
        self.seq += 1;
        self.queue.push(node_index, Reverse((cost, self.seq)));
    }

    /// Lowers the cost of a node already present. The node keeps its
    /// original insertion order for tie-breaking. Returns false if the node
    /// is absent or the new cost is not lower.
    pub(crate) fn decrease_cost(&mut self, node_index: usize, cost: u32) -> bool {
        let seq = match self.queue.get_priority(&node_index) {
            Some(&Reverse((current, seq))) if cost < current => seq,
            _ => return false,
        };
        self.queue
            .change_priority(&node_index, Reverse((cost, seq)))
            .is_some()
    }

    pub(crate) fn pop(&mut self) -> Option<PriorityEntry> {
        self.queue
            .pop()
            .map(|(node_index, Reverse((cost, _)))| PriorityEntry { node_index, cost })
    }
}
