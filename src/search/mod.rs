//! A* search between two Nodes of a [`RoadNetwork`](crate::network::RoadNetwork)

mod a_star;
pub use a_star::{a_star_search, find_path};

mod node_list;

mod search_config;
pub use search_config::SearchConfig;

use crate::Cost;
use std::cmp::Ordering;

/// A reference to a Node inside of one search. Ids are handed out in the order in which the
/// Nodes are first added to the open set.
pub(crate) type NodeID = usize;

/// An entry of the open set.
///
/// The heap pops the lowest `f_score` first. Among equal scores, the Node that entered the open
/// set first (lower id) wins.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HeuristicElement {
    pub id: NodeID,
    pub g_score: Cost,
    pub f_score: Cost,
}

impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}

impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // flipped to make BinaryHeap a min-heap
        rhs.f_score
            .total_cmp(&self.f_score)
            .then_with(|| rhs.id.cmp(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn element(id: NodeID, f_score: Cost) -> HeuristicElement {
        HeuristicElement {
            id,
            g_score: 0.0,
            f_score,
        }
    }

    #[test]
    fn lowest_score_first() {
        let mut heap = BinaryHeap::new();
        heap.push(element(0, 3.0));
        heap.push(element(1, 1.0));
        heap.push(element(2, 2.0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.id).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_go_to_first_admitted() {
        let mut heap = BinaryHeap::new();
        heap.push(element(4, 1.0));
        heap.push(element(2, 1.0));
        heap.push(element(7, 1.0));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.id).collect();
        assert_eq!(order, vec![2, 4, 7]);
    }
}
