use crate::Cost;

/// A Path through the Road Network
///
/// Stores a sequence of Nodes and the total Cost of traversing them.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 4.5);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// an empty Path with no Cost
    pub fn empty() -> Path<P> {
        Path::new(Vec::new(), 0.0)
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the number of Nodes in the Path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Nodes
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// the first Node of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// the last Node of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// the Nodes of the Path
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }

    /// consumes the Path, returning its Nodes
    pub fn into_nodes(self) -> Vec<P> {
        self.path
    }

    /// appends a Node to the Path, adding its Cost to the total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use waypoint_pathfinding::Path;
    /// let mut path = Path::new(vec!['a', 'b', 'c'], 4.0);
    /// path.append('d', 0.5);
    ///
    /// assert_eq!(path, vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(path.cost(), 4.5);
    /// ```
    pub fn append(&mut self, node: P, cost: Cost) -> &mut Self {
        self.path.push(node);
        self.cost += cost;
        self
    }

    /// appends all Nodes of `other`, adding its Cost to the total Cost.
    ///
    /// If `merge_boundary` is set and the last Node of `self` equals the first Node of `other`,
    /// that Node is only kept once.
    /// ## Examples
    /// ```
    /// # use waypoint_pathfinding::Path;
    /// let mut path = Path::new(vec!['a', 'b'], 1.0);
    /// path.concat(Path::new(vec!['b', 'c'], 2.0), false);
    /// assert_eq!(path, vec!['a', 'b', 'b', 'c']);
    ///
    /// let mut path = Path::new(vec!['a', 'b'], 1.0);
    /// path.concat(Path::new(vec!['b', 'c'], 2.0), true);
    /// assert_eq!(path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.cost(), 3.0);
    /// ```
    pub fn concat(&mut self, other: Path<P>, merge_boundary: bool) -> &mut Self
    where
        P: PartialEq,
    {
        let mut nodes = other.path.into_iter().peekable();
        if merge_boundary && self.path.last().is_some_and(|last| nodes.peek() == Some(last)) {
            nodes.next();
        }
        self.path.extend(nodes);
        self.cost += other.cost;
        self
    }
}

impl<P> Default for Path<P> {
    fn default() -> Path<P> {
        Path::empty()
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path.as_slice() == *rhs
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    use crate::Point;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42.0);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn display() {
        let path = Path::new(
            vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(0.0, 2.0)],
            2.0,
        );

        assert_eq!(&format!("{}", path), "Path[Cost = 2]: 0,0 -> 0,1 -> 0,2");
    }

    #[test]
    fn display_empty() {
        let path = Path::<Point>::empty();

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn concat_onto_empty() {
        let mut path = Path::empty();
        path.concat(Path::new(vec![1, 2], 1.5), true);

        assert_eq!(path, vec![1, 2]);
        assert_eq!(path.cost(), 1.5);
    }

    #[test]
    fn concat_keeps_distinct_boundary() {
        let mut path = Path::new(vec![1, 2], 1.0);
        path.concat(Path::new(vec![3, 4], 1.0), true);

        assert_eq!(path, vec![1, 2, 3, 4]);
    }

    #[test]
    fn iter_borrows_nodes() {
        let path = Path::new(vec![1, 2, 3], 2.0);
        let doubled: Vec<i32> = path.iter().map(|node| node * 2).collect();

        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn ordering_by_cost() {
        assert!(Path::new(vec![1], 1.0) < Path::new(vec![1, 2], 2.5));
    }
}
