use std::sync::Arc;

use tracing::debug;

use crate::cell::{CellId, Direction};
use crate::error::{Error, Result};
use crate::maze::{Maze, MazeState};

/// Uniform weight assigned to every open-wall passage.
const PASSAGE_WEIGHT: u32 = 1;

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: CellId,
    pub weight: u32,
}

/// Weighted adjacency view over a generated maze's open walls.
///
/// The graph holds no independent state: it is a pure derived view and must
/// be rebuilt after the maze is regenerated. Adjacency is shared behind an
/// `Arc`, so clones are cheap and read-only queries may run concurrently.
#[derive(Debug, Clone, Default)]
pub struct RoutingGraph {
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl RoutingGraph {
    /// Assemble a graph directly from an adjacency table, indexed by
    /// [`CellId`].
    pub fn from_parts(adjacency: Vec<Vec<Edge>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Number of cells the graph was built over.
    pub fn cell_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of a cell.
    pub fn neighbours(&self, cell: CellId) -> &[Edge] {
        self.adjacency.get(cell).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Derive the routing graph from a generated maze.
///
/// Scans each cell's four directions; an edge exists iff the wall in that
/// direction is absent. O(cells x 4).
pub fn build_routing_graph(maze: &Maze) -> Result<RoutingGraph> {
    if maze.state() != MazeState::Generated {
        return Err(Error::GraphUnavailable {
            state: maze.state(),
        });
    }

    let mut adjacency: Vec<Vec<Edge>> = Vec::with_capacity(maze.cell_count());
    for (index, cell) in maze.cells().iter().enumerate() {
        let mut edges = Vec::with_capacity(4);
        for direction in Direction::CARDINALS {
            if cell.has_wall(direction) {
                continue;
            }
            if let Some(target) = maze.neighbour(index, direction) {
                edges.push(Edge {
                    target,
                    weight: PASSAGE_WEIGHT,
                });
            }
        }
        adjacency.push(edges);
    }

    debug!(cells = adjacency.len(), "routing graph built");
    Ok(RoutingGraph::from_parts(adjacency))
}
