//! Shortest-path search over the navigation graph.
//!
//! [`find_path`] is classic A* with a Euclidean heuristic, which is
//! admissible and consistent on a grid with unit and diagonal step costs,
//! so returned paths are optimal. [`greedy_path`] is the depth-first
//! fallback mode: fast, but first-found-wins with no cost relaxation, so
//! it makes no shortest-path promise.

use hashbrown::{HashMap, HashSet};

use crate::graph::Graph;
use crate::pqueue::MinQueue;

use super::navgraph::CellPos;

/// Which search answers a path query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStrategy {
    /// Optimal A* search
    #[default]
    AStar,
    /// Greedy depth-first descent; not guaranteed shortest
    Greedy,
}

/// Snap a planar point to the closest graph node.
///
/// Linear scan over the ordered node list; ties keep the first node
/// scanned, so snapping is deterministic.
pub fn nearest_node(graph: &Graph<CellPos>, x: f64, y: f64) -> Option<CellPos> {
    let mut best: Option<(CellPos, f64)> = None;
    for &node in graph.nodes() {
        let dx = f64::from(node.x) - x;
        let dy = f64::from(node.y) - y;
        let dist_sq = dx * dx + dy * dy;
        match best {
            Some((_, best_sq)) if best_sq <= dist_sq => {}
            _ => best = Some((node, dist_sq)),
        }
    }
    best.map(|(node, _)| node)
}

/// Shortest path from `start` to `goal`, both graph nodes.
///
/// Returns the ordered waypoint list including both endpoints, or an
/// empty list when no path exists (expected outcome, not an error).
pub fn find_path(graph: &Graph<CellPos>, start: CellPos, goal: CellPos) -> Vec<CellPos> {
    find_path_with(graph, start, goal, CellPos::distance)
}

/// A* with a caller-supplied heuristic.
///
/// The heuristic must never overestimate the remaining cost for the
/// result to be optimal; `|_, _| 0.0` degenerates to Dijkstra, which is
/// what the tests cross-validate against.
pub fn find_path_with<H>(graph: &Graph<CellPos>, start: CellPos, goal: CellPos, heuristic: H) -> Vec<CellPos>
where
    H: Fn(&CellPos, CellPos) -> f64,
{
    if !graph.contains(start) || !graph.contains(goal) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let mut open = MinQueue::new();
    let mut cost: HashMap<CellPos, f64> = HashMap::new();
    let mut parent: HashMap<CellPos, CellPos> = HashMap::new();

    cost.insert(start, 0.0);
    open.enqueue(start, heuristic(&start, goal));

    while let Ok(current) = open.dequeue() {
        if current == goal {
            return reconstruct(&parent, start, goal);
        }
        let current_cost = match cost.get(&current) {
            Some(&c) => c,
            None => continue,
        };
        let Some(neighbours) = graph.neighbours(current) else {
            continue;
        };
        for &next in neighbours {
            let tentative = current_cost + current.distance(next);
            let improved = match cost.get(&next) {
                Some(&best) => tentative < best,
                None => true,
            };
            if improved {
                cost.insert(next, tentative);
                parent.insert(next, current);
                let f = tentative + heuristic(&next, goal);
                if !open.enqueue(next, f) {
                    open.update_priority(next, f);
                }
            }
        }
    }

    // Open set drained without reaching the goal: disconnected graph or
    // unlucky snapping.
    Vec::new()
}

/// Depth-first descent toward the goal.
///
/// Neighbours are tried closest-to-goal first and the first complete
/// route wins. Costs are never relaxed, so the result can be far from
/// shortest; it exists as a cheap fallback mode only.
pub fn greedy_path(graph: &Graph<CellPos>, start: CellPos, goal: CellPos) -> Vec<CellPos> {
    if !graph.contains(start) || !graph.contains(goal) {
        return Vec::new();
    }
    let mut visited: HashSet<CellPos> = HashSet::new();
    let mut path = Vec::new();
    if descend(graph, start, goal, &mut visited, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn descend(
    graph: &Graph<CellPos>,
    current: CellPos,
    goal: CellPos,
    visited: &mut HashSet<CellPos>,
    path: &mut Vec<CellPos>,
) -> bool {
    visited.insert(current);
    path.push(current);
    if current == goal {
        return true;
    }

    let mut next: Vec<CellPos> = graph
        .neighbours(current)
        .map(<[CellPos]>::to_vec)
        .unwrap_or_default();
    next.sort_by(|a, b| a.distance(goal).total_cmp(&b.distance(goal)));

    for candidate in next {
        if !visited.contains(&candidate) && descend(graph, candidate, goal, visited, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Total traversal cost of a waypoint list
pub fn path_cost(path: &[CellPos]) -> f64 {
    path.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

fn reconstruct(parent: &HashMap<CellPos, CellPos>, start: CellPos, goal: CellPos) -> Vec<CellPos> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Tile, TileGrid};
    use crate::geom::Rect;
    use crate::path::navgraph::build_nav_graph;

    fn open_graph(width: i32, height: i32) -> Graph<CellPos> {
        let mut grid = TileGrid::new(width, height);
        grid.fill_rect(Rect::new(0, 0, width, height), Tile::Floor);
        build_nav_graph(&grid).unwrap()
    }

    #[test]
    fn test_straight_line() {
        let graph = open_graph(5, 1);
        let path = find_path(&graph, CellPos::new(0, 0), CellPos::new(4, 0));

        assert_eq!(path.len(), 5);
        assert_eq!(path[0], CellPos::new(0, 0));
        assert_eq!(path[4], CellPos::new(4, 0));
        assert!((path_cost(&path) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal_shortcut() {
        let graph = open_graph(4, 4);
        let path = find_path(&graph, CellPos::new(0, 0), CellPos::new(3, 3));

        // Pure diagonal: 3 * sqrt(2).
        assert_eq!(path.len(), 4);
        assert!((path_cost(&path) - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_routes_around_wall() {
        let mut grid = TileGrid::new(5, 5);
        grid.fill_rect(Rect::new(0, 0, 5, 5), Tile::Floor);
        // Vertical wall with a gap at the bottom.
        grid.set(2, 0, Tile::Wall);
        grid.set(2, 1, Tile::Wall);
        grid.set(2, 2, Tile::Wall);
        grid.set(2, 3, Tile::Wall);
        let graph = build_nav_graph(&grid).unwrap();

        let path = find_path(&graph, CellPos::new(0, 0), CellPos::new(4, 0));
        assert!(!path.is_empty());
        assert!(path.contains(&CellPos::new(2, 4)), "must pass the gap");
        for window in path.windows(2) {
            assert!(window[0].distance(window[1]) < 1.5, "non-adjacent step");
        }
    }

    #[test]
    fn test_no_path_is_empty_not_error() {
        let mut grid = TileGrid::new(5, 1);
        grid.set(0, 0, Tile::Floor);
        grid.set(1, 0, Tile::Floor);
        // (2,0) stays empty: two islands.
        grid.set(3, 0, Tile::Floor);
        grid.set(4, 0, Tile::Floor);
        let graph = build_nav_graph(&grid).unwrap();

        let path = find_path(&graph, CellPos::new(0, 0), CellPos::new(4, 0));
        assert!(path.is_empty());
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = open_graph(3, 3);
        let cell = CellPos::new(1, 1);
        assert_eq!(find_path(&graph, cell, cell), vec![cell]);
    }

    #[test]
    fn test_missing_endpoint_is_empty() {
        let graph = open_graph(3, 3);
        let path = find_path(&graph, CellPos::new(0, 0), CellPos::new(99, 99));
        assert!(path.is_empty());
    }

    #[test]
    fn test_zero_heuristic_matches_astar_cost() {
        let mut grid = TileGrid::new(8, 8);
        grid.fill_rect(Rect::new(0, 0, 8, 8), Tile::Floor);
        grid.fill_rect(Rect::new(3, 0, 1, 6), Tile::Wall);
        let graph = build_nav_graph(&grid).unwrap();

        let start = CellPos::new(0, 0);
        let goal = CellPos::new(7, 0);
        let astar = find_path(&graph, start, goal);
        let dijkstra = find_path_with(&graph, start, goal, |_, _| 0.0);

        assert!(!astar.is_empty());
        assert!((path_cost(&astar) - path_cost(&dijkstra)).abs() < 1e-9);
    }

    #[test]
    fn test_greedy_reaches_goal_when_reachable() {
        let graph = open_graph(6, 6);
        let path = greedy_path(&graph, CellPos::new(0, 0), CellPos::new(5, 5));

        assert_eq!(path.first(), Some(&CellPos::new(0, 0)));
        assert_eq!(path.last(), Some(&CellPos::new(5, 5)));
        // Greedy cost is never better than optimal.
        let optimal = find_path(&graph, CellPos::new(0, 0), CellPos::new(5, 5));
        assert!(path_cost(&path) >= path_cost(&optimal) - 1e-9);
    }

    #[test]
    fn test_greedy_no_path_is_empty() {
        let mut grid = TileGrid::new(3, 1);
        grid.set(0, 0, Tile::Floor);
        grid.set(2, 0, Tile::Floor);
        let graph = build_nav_graph(&grid).unwrap();

        assert!(greedy_path(&graph, CellPos::new(0, 0), CellPos::new(2, 0)).is_empty());
    }

    #[test]
    fn test_nearest_node_snaps_and_ties_deterministically() {
        let graph = open_graph(3, 3);
        assert_eq!(nearest_node(&graph, 1.2, 0.9), Some(CellPos::new(1, 1)));
        // Equidistant between (0,0) and (1,0): the first node scanned wins.
        assert_eq!(nearest_node(&graph, 0.5, 0.0), Some(CellPos::new(0, 0)));

        let empty: Graph<CellPos> = Graph::new();
        assert_eq!(nearest_node(&empty, 0.0, 0.0), None);
    }
}
