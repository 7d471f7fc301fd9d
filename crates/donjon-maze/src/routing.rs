//! Shortest-path query orchestration.
//!
//! This module provides:
//! - [`PathAlgorithm`] - Supported search algorithms (BFS, Dijkstra)
//! - [`PathRequest`] - High-level path query between two cells
//! - [`PathPlan`] - Planned path result
//! - [`plan_path`] / [`shortest_path`] - Entry points for computing paths
//!
//! Each algorithm is encapsulated in its own [`PathPlanner`] strategy so new
//! searches can be added without touching the orchestration logic. The
//! engine is purely computational: highlighting a returned path on the maze
//! is the caller's concern (see `Maze::mark_path`).

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, PathPlanner};

use std::fmt;

use serde::Serialize;

use crate::cell::CellId;
use crate::error::{Error, Result};
use crate::graph::RoutingGraph;

/// Supported path-search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Breadth-first search (fewest hops).
    Bfs,
    /// Dijkstra's algorithm (lowest total weight).
    #[default]
    Dijkstra,
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PathAlgorithm::Bfs => "bfs",
            PathAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// High-level shortest-path request between two cells.
#[derive(Debug, Clone, Copy)]
pub struct PathRequest {
    pub start: CellId,
    pub goal: CellId,
    pub algorithm: PathAlgorithm,
}

impl PathRequest {
    /// Dijkstra request between two cell indices.
    pub fn new(start: CellId, goal: CellId) -> Self {
        Self {
            start,
            goal,
            algorithm: PathAlgorithm::Dijkstra,
        }
    }

    /// BFS request between two cell indices.
    pub fn bfs(start: CellId, goal: CellId) -> Self {
        Self {
            start,
            goal,
            algorithm: PathAlgorithm::Bfs,
        }
    }
}

/// Planned path returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct PathPlan {
    pub algorithm: PathAlgorithm,
    pub start: CellId,
    pub goal: CellId,
    /// Ordered cell indices from start to goal; empty when the goal is
    /// unreachable.
    pub steps: Vec<CellId>,
}

impl PathPlan {
    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Whether the goal was reachable from the start.
    pub fn is_reachable(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Compute a path using the requested algorithm.
///
/// Endpoints outside the graph are precondition failures
/// ([`Error::UnknownCell`]); a goal that cannot be reached is reported
/// through an empty step list, not an error. A graph built over zero cells
/// rejects every query the same way.
pub fn plan_path(graph: &RoutingGraph, request: &PathRequest) -> Result<PathPlan> {
    validate_cell(graph, request.start)?;
    validate_cell(graph, request.goal)?;

    let planner = select_planner(request.algorithm);
    let steps = planner
        .find_path(graph, request.start, request.goal)
        .unwrap_or_default();

    Ok(PathPlan {
        algorithm: request.algorithm,
        start: request.start,
        goal: request.goal,
        steps,
    })
}

/// Shortest path between two cells as a bare index sequence; empty when the
/// goal is unreachable.
pub fn shortest_path(graph: &RoutingGraph, start: CellId, goal: CellId) -> Result<Vec<CellId>> {
    plan_path(graph, &PathRequest::new(start, goal)).map(|plan| plan.steps)
}

fn validate_cell(graph: &RoutingGraph, cell: CellId) -> Result<()> {
    if cell >= graph.cell_count() {
        return Err(Error::UnknownCell {
            cell,
            cell_count: graph.cell_count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_plan_hop_count() {
        let plan = PathPlan {
            algorithm: PathAlgorithm::Bfs,
            start: 1,
            goal: 3,
            steps: vec![1, 2, 3],
        };
        assert_eq!(plan.hop_count(), 2);
        assert!(plan.is_reachable());
    }

    #[test]
    fn empty_plan_is_unreachable() {
        let plan = PathPlan {
            algorithm: PathAlgorithm::Dijkstra,
            start: 0,
            goal: 5,
            steps: Vec::new(),
        };
        assert_eq!(plan.hop_count(), 0);
        assert!(!plan.is_reachable());
    }

    #[test]
    fn algorithm_display_names() {
        assert_eq!(PathAlgorithm::Bfs.to_string(), "bfs");
        assert_eq!(PathAlgorithm::Dijkstra.to_string(), "dijkstra");
    }
}
