use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::cell::CellId;
use crate::graph::RoutingGraph;

/// Distance sentinel for cells the search has not reached.
const UNREACHED: u32 = u32::MAX;

/// Find a path with the fewest hops using breadth-first search.
///
/// Returns `None` when the goal is unreachable or either endpoint lies
/// outside the graph.
pub fn find_path_bfs(graph: &RoutingGraph, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
    if start >= graph.cell_count() || goal >= graph.cell_count() {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: Vec<Option<CellId>> = vec![None; graph.cell_count()];
    let mut visited = vec![false; graph.cell_count()];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            let next = edge.target;
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parents[next] = Some(current);
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Find the lowest-cost path using Dijkstra's algorithm.
///
/// Distances start at infinity except the start cell; the frontier is a
/// min-heap keyed by `(distance, cell index)` so equal-distance extraction
/// is deterministic. Stale heap entries are skipped on pop rather than
/// removed. Returns `None` when the frontier drains without reaching the
/// goal.
pub fn find_path_dijkstra(
    graph: &RoutingGraph,
    start: CellId,
    goal: CellId,
) -> Option<Vec<CellId>> {
    if start >= graph.cell_count() || goal >= graph.cell_count() {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut distances = vec![UNREACHED; graph.cell_count()];
    let mut parents: Vec<Option<CellId>> = vec![None; graph.cell_count()];
    let mut queue = BinaryHeap::new();

    distances[start] = 0;
    queue.push(QueueEntry {
        node: start,
        cost: 0,
    });

    while let Some(entry) = queue.pop() {
        if entry.cost > distances[entry.node] {
            continue;
        }
        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let next_cost = entry.cost + edge.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                parents[next] = Some(entry.node);
                queue.push(QueueEntry {
                    node: next,
                    cost: next_cost,
                });
            }
        }
    }

    None
}

/// Walk predecessor links from the goal back to the start and reverse.
fn reconstruct_path(parents: &[Option<CellId>], start: CellId, goal: CellId) -> Vec<CellId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    node: CellId,
    cost: u32,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, with
        // the cell index as a stable tie-break.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
