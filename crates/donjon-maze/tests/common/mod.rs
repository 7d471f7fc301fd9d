// Shared fixtures for `donjon-maze` integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use rand::RngCore;

use donjon_maze::{Direction, Maze, RoutingGraph};

/// Deterministic randomness source that always yields zero, so every
/// uniform draw picks the first candidate. Carve traces under this source
/// are derivable by hand, which is what the recorded-bitmap assertions
/// rely on.
pub struct FirstPickRng;

impl RngCore for FirstPickRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

/// Number of removed internal walls, counted once per adjacent pair.
///
/// Only east/south openings are counted so each shared wall contributes a
/// single unit; carving never touches the outer border.
pub fn removed_wall_pairs(maze: &Maze) -> usize {
    maze.cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter(|&direction| {
                    maze.neighbour(index, direction).is_some() && !cell.has_wall(direction)
                })
                .count()
        })
        .sum()
}

/// Assert that every removed wall is mirrored on the adjacent cell.
pub fn assert_symmetric_walls(maze: &Maze) {
    for (index, cell) in maze.cells().iter().enumerate() {
        for direction in Direction::CARDINALS {
            if let Some(neighbour) = maze.neighbour(index, direction) {
                assert_eq!(
                    cell.has_wall(direction),
                    maze.cells()[neighbour].has_wall(direction.opposite()),
                    "asymmetric wall between cells {index} and {neighbour}"
                );
            }
        }
    }
}

/// Assert that every cell is reachable from cell 0 over the routing graph.
pub fn assert_fully_connected(graph: &RoutingGraph) {
    let mut visited = vec![false; graph.cell_count()];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;
    let mut reached = 1;

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                reached += 1;
                queue.push_back(edge.target);
            }
        }
    }

    assert_eq!(
        reached,
        graph.cell_count(),
        "routing graph has more than one component"
    );
}
