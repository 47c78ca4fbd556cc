use super::NodeID;
use crate::{Cost, Point, PointMap};

/// Everything one search knows about a Node it has discovered.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub pos: Point,
    pub g_score: Cost,
    pub f_score: Cost,
    pub came_from: Option<NodeID>,
    pub closed: bool,
}

/// The state of one search: the open and closed sets, CameFrom, GScore and FScore.
///
/// Nodes are never removed, so slab keys are handed out in admission order and double as the
/// tie-break sequence of [`HeuristicElement`](super::HeuristicElement).
#[derive(Clone, Debug)]
pub(crate) struct NodeList {
    nodes: slab::Slab<SearchNode>,
    pos_map: PointMap<NodeID>,
}

impl NodeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: slab::Slab::with_capacity(capacity),
            pos_map: PointMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a newly discovered Node to the open set
    pub fn admit(
        &mut self,
        pos: Point,
        g_score: Cost,
        f_score: Cost,
        came_from: Option<NodeID>,
    ) -> NodeID {
        let id = self.nodes.insert(SearchNode {
            pos,
            g_score,
            f_score,
            came_from,
            closed: false,
        });
        self.pos_map.insert(pos.key(), id);
        id
    }

    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos.key()).copied()
    }

    /// Follows CameFrom from `goal` back to the Node without a predecessor
    pub fn reconstruct(&self, goal: NodeID) -> Vec<Point> {
        let mut steps = vec![self[goal].pos];
        let mut current = goal;
        while let Some(prev) = self[current].came_from {
            steps.push(self[prev].pos);
            current = prev;
        }
        steps.reverse();
        steps
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: NodeID) -> &SearchNode {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut SearchNode {
        &mut self.nodes[index]
    }
}

#[test]
fn ids_follow_admission_order() {
    let mut nodes = NodeList::with_capacity(4);
    let zero_id = nodes.admit(Point::new(0.0, 0.0), 0.0, 2.0, None);
    let one_id = nodes.admit(Point::new(1.0, 0.0), 1.0, 2.0, Some(zero_id));
    let two_id = nodes.admit(Point::new(2.0, 0.0), 2.0, 2.0, Some(one_id));

    assert_eq!((zero_id, one_id, two_id), (0, 1, 2));
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes.id_at(Point::new(1.0, 0.0)), Some(one_id));
    assert_eq!(nodes.id_at(Point::new(3.0, 0.0)), None);
}

#[test]
fn reconstruct_follows_came_from() {
    let mut nodes = NodeList::with_capacity(4);
    let a = nodes.admit(Point::new(0.0, 0.0), 0.0, 0.0, None);
    let b = nodes.admit(Point::new(0.0, 1.0), 1.0, 1.0, Some(a));
    let c = nodes.admit(Point::new(5.0, 5.0), 9.0, 9.0, Some(a));
    let d = nodes.admit(Point::new(0.0, 2.0), 2.0, 2.0, Some(b));
    nodes[d].came_from = Some(c);

    assert_eq!(
        nodes.reconstruct(d),
        vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(0.0, 2.0)]
    );
    assert_eq!(nodes.reconstruct(a), vec![Point::new(0.0, 0.0)]);
}
