//! Generic undirected adjacency-list graph.
//!
//! Used twice: over room handles during layout (adjacency, pruning, the
//! final room-door structure) and over grid cells for navigation. Nodes
//! are tracked in insertion order so snapshots are deterministic for a
//! given seed; hash-map iteration order never leaks into results.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use thiserror::Error;

/// Graph operation failures. All non-fatal: callers get a typed outcome
/// instead of an implicit node insertion.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("node is not in the graph")]
    MissingNode,
}

/// Undirected graph over copyable, hashable node values.
///
/// Edges are stored in both endpoints' neighbour lists. Self-loops and
/// parallel edges are not rejected; callers avoid both.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<N>>,
    order: Vec<N>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N: Copy + Eq + Hash> Graph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no neighbours.
    ///
    /// Returns false (and changes nothing) if the node is already present;
    /// re-adding is idempotent, not an error.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        self.order.push(node);
        true
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// Both endpoints must have been added first; edge insertion never
    /// creates nodes implicitly.
    pub fn add_edge(&mut self, a: N, b: N) -> Result<(), GraphError> {
        if !self.adjacency.contains_key(&a) || !self.adjacency.contains_key(&b) {
            return Err(GraphError::MissingNode);
        }
        if let Some(list) = self.adjacency.get_mut(&a) {
            list.push(b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.push(a);
        }
        Ok(())
    }

    /// Neighbour list of a node.
    ///
    /// `None` means the node is absent; `Some(&[])` means it is present
    /// with zero neighbours. Callers must not conflate the two.
    pub fn neighbours(&self, node: N) -> Option<&[N]> {
        self.adjacency.get(&node).map(Vec::as_slice)
    }

    /// Check node membership
    pub fn contains(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Check that every node is reachable from `anchor`
    pub fn is_connected_from(&self, anchor: N) -> bool {
        if !self.adjacency.contains_key(&anchor) {
            return false;
        }
        self.reach_count(anchor, None) == self.adjacency.len()
    }

    /// Remove `target` only if the rest of the graph stays connected.
    ///
    /// Walks from `anchor` over every edge not touching `target`; the
    /// removal goes ahead (stripping `target` from all neighbour lists)
    /// only when that walk still reaches every other node. Otherwise the
    /// graph is left untouched and false is returned. Also refuses when
    /// `target == anchor` or either node is absent.
    pub fn try_remove_node(&mut self, target: N, anchor: N) -> bool {
        if target == anchor
            || !self.adjacency.contains_key(&target)
            || !self.adjacency.contains_key(&anchor)
        {
            return false;
        }
        if self.reach_count(anchor, Some(target)) != self.adjacency.len() - 1 {
            return false;
        }

        self.adjacency.remove(&target);
        for list in self.adjacency.values_mut() {
            list.retain(|&n| n != target);
        }
        self.order.retain(|&n| n != target);
        true
    }

    /// Count nodes reachable from `anchor`, optionally excluding every
    /// edge that touches `excluded`. Visitation order does not matter.
    fn reach_count(&self, anchor: N, excluded: Option<N>) -> usize {
        let mut visited: HashSet<N> = HashSet::new();
        visited.insert(anchor);
        let mut queue = VecDeque::new();
        queue.push_back(anchor);

        while let Some(node) = queue.pop_front() {
            let Some(neighbours) = self.adjacency.get(&node) else {
                continue;
            };
            for &next in neighbours {
                if Some(next) == excluded || visited.contains(&next) {
                    continue;
                }
                visited.insert(next);
                queue.push_back(next);
            }
        }
        visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph(n: u32) -> Graph<u32> {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_node(i);
        }
        for i in 1..n {
            g.add_edge(i - 1, i).unwrap();
        }
        g
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut g = Graph::new();
        assert!(g.add_node(1));
        assert!(!g.add_node(1));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_add_edge_requires_nodes() {
        let mut g = Graph::new();
        g.add_node(1);
        assert_eq!(g.add_edge(1, 2), Err(GraphError::MissingNode));
        assert_eq!(g.neighbours(1), Some(&[][..]));

        g.add_node(2);
        assert!(g.add_edge(1, 2).is_ok());
        assert_eq!(g.neighbours(1), Some(&[2][..]));
        assert_eq!(g.neighbours(2), Some(&[1][..]));
    }

    #[test]
    fn test_absent_vs_lonely_node() {
        let mut g: Graph<u32> = Graph::new();
        g.add_node(7);
        assert_eq!(g.neighbours(7), Some(&[][..]));
        assert_eq!(g.neighbours(8), None);
    }

    #[test]
    fn test_nodes_in_insertion_order() {
        let mut g = Graph::new();
        for i in [5u32, 3, 9, 1] {
            g.add_node(i);
        }
        assert_eq!(g.nodes(), &[5, 3, 9, 1]);
    }

    #[test]
    fn test_edge_count() {
        let g = line_graph(4);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_remove_leaf_succeeds() {
        let mut g = line_graph(4);
        assert!(g.try_remove_node(3, 0));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbours(2), Some(&[1][..]));
        assert!(g.is_connected_from(0));
    }

    #[test]
    fn test_remove_cut_node_refused() {
        let mut g = line_graph(4);
        let before_nodes = g.nodes().to_vec();

        // Node 1 is a cut vertex: removing it strands node 0.
        assert!(!g.try_remove_node(1, 3));

        assert_eq!(g.nodes(), &before_nodes[..]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.neighbours(1), Some(&[0, 2][..]));
    }

    #[test]
    fn test_remove_from_cycle_succeeds() {
        let mut g = line_graph(4);
        g.add_edge(3, 0).unwrap();

        // Every node in a cycle is removable.
        assert!(g.try_remove_node(1, 0));
        assert!(g.is_connected_from(0));
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_remove_anchor_refused() {
        let mut g = line_graph(3);
        assert!(!g.try_remove_node(0, 0));
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_remove_missing_refused() {
        let mut g = line_graph(3);
        assert!(!g.try_remove_node(9, 0));
        assert!(!g.try_remove_node(1, 9));
    }

    #[test]
    fn test_connected_from() {
        let mut g = line_graph(3);
        assert!(g.is_connected_from(0));
        g.add_node(99);
        assert!(!g.is_connected_from(0));
        assert!(!g.is_connected_from(42));
    }
}
