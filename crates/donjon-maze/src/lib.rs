//! Donjon maze library entry points.
//!
//! This crate carves rectangular grid mazes with a randomized backtracking
//! generator, derives weighted routing graphs from the carved walls, and
//! answers shortest-path queries between cells. Higher-level consumers
//! (rendering layers, interactive hosts) should only depend on the types
//! and functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cell;
pub mod donjon;
pub mod error;
pub mod graph;
pub mod maze;
pub mod path;
pub mod routing;
pub mod snapshot;

pub use cell::{CellId, CellState, CellType, Direction, MazeCell};
pub use donjon::Donjon;
pub use error::{Error, Result};
pub use graph::{build_routing_graph, Edge, RoutingGraph};
pub use maze::{CarveStep, Maze, MazeState, DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH};
pub use path::{find_path_bfs, find_path_dijkstra};
pub use routing::{plan_path, shortest_path, PathAlgorithm, PathPlan, PathRequest};
pub use snapshot::MazeSnapshot;
