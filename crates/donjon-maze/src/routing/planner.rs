//! Path-planning strategies.
//!
//! Each searcher is encapsulated behind the [`PathPlanner`] trait so the
//! orchestration in the parent module stays algorithm-agnostic.

use crate::cell::CellId;
use crate::graph::RoutingGraph;
use crate::path::{find_path_bfs, find_path_dijkstra};

use super::PathAlgorithm;

/// Trait for path-search strategies.
pub trait PathPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> PathAlgorithm;

    /// Run the search; `Some(path)` when the goal is reachable.
    fn find_path(&self, graph: &RoutingGraph, start: CellId, goal: CellId) -> Option<Vec<CellId>>;
}

/// Breadth-first search planner for unweighted traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl PathPlanner for BfsPlanner {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Bfs
    }

    fn find_path(
        &self,
        graph: &RoutingGraph,
        start: CellId,
        goal: CellId,
    ) -> Option<Vec<CellId>> {
        find_path_bfs(graph, start, goal)
    }
}

/// Dijkstra planner for weighted traversal.
///
/// On the uniform-weight graphs a maze produces it returns paths of the
/// same length as BFS, but it stays correct if edge weights ever diverge.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl PathPlanner for DijkstraPlanner {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        graph: &RoutingGraph,
        start: CellId,
        goal: CellId,
    ) -> Option<Vec<CellId>> {
        find_path_dijkstra(graph, start, goal)
    }
}

/// Select the planner for the requested algorithm.
pub fn select_planner(algorithm: PathAlgorithm) -> Box<dyn PathPlanner> {
    match algorithm {
        PathAlgorithm::Bfs => Box::new(BfsPlanner),
        PathAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
