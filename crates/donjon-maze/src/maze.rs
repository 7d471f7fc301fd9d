use std::fmt;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::cell::{CellId, CellState, CellType, Direction, MazeCell};
use crate::donjon::Donjon;
use crate::error::{Error, Result};

/// Default maze width, in cells.
pub const DEFAULT_MAZE_WIDTH: usize = 10;

/// Default maze height, in cells.
pub const DEFAULT_MAZE_HEIGHT: usize = 10;

/// Lifecycle state of a maze; guards generation re-entrancy.
///
/// `generate` is only legal from `Default` and `reset` only from
/// `Generated`, so a maze can never be regenerated mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MazeState {
    #[default]
    Default,
    Generating,
    Generated,
}

impl fmt::Display for MazeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MazeState::Default => "default",
            MazeState::Generating => "generating",
            MazeState::Generated => "generated",
        };
        f.write_str(value)
    }
}

/// Wall-level delta emitted while a maze is being carved.
///
/// Hosts that animate generation subscribe through [`Maze::generate_with`];
/// the core itself runs to completion without pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveStep {
    /// A passage was opened between two adjacent cells.
    Passage {
        from: CellId,
        to: CellId,
        direction: Direction,
    },
    /// The carver retreated from a dead end.
    Backtrack { from: CellId, to: CellId },
    /// An extra connection was opened by the loop injector.
    Loop {
        from: CellId,
        to: CellId,
        direction: Direction,
    },
}

/// A rectangular grid maze carved by randomized depth-first backtracking.
///
/// The randomness source is an explicit, injected dependency: [`Maze::new`]
/// seeds from the operating system, [`Maze::with_seed`] is reproducible, and
/// [`Maze::with_rng`] accepts any [`RngCore`] implementation for tests.
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<MazeCell>,
    state: MazeState,
    rng: Box<dyn RngCore + Send>,
    donjon: Option<Donjon>,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maze")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("state", &self.state)
            .finish()
    }
}

impl Maze {
    /// Create a maze seeded from the operating system entropy source.
    ///
    /// Aborts if the entropy source is unavailable; a misconfigured
    /// randomness source is fatal at construction, never deferred.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create a maze with the default 10x10 dimensions.
    pub fn with_default_size() -> Result<Self> {
        Self::new(DEFAULT_MAZE_WIDTH, DEFAULT_MAZE_HEIGHT)
    }

    /// Create a maze whose generation is reproducible from `seed`.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    /// Create a maze carving from the supplied randomness source.
    pub fn with_rng(
        width: usize,
        height: usize,
        rng: impl RngCore + Send + 'static,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let cells = (0..width * height)
            .map(|index| MazeCell::new(index % width, index / width))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
            state: MazeState::Default,
            rng: Box::new(rng),
            donjon: None,
        })
    }

    /// Width of the maze, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the maze, in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Current lifecycle state.
    pub fn state(&self) -> MazeState {
        self.state
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[MazeCell] {
        &self.cells
    }

    /// The cell at `index`, if it exists.
    pub fn cell(&self, index: CellId) -> Option<&MazeCell> {
        self.cells.get(index)
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The treasure record, present once the maze is generated.
    pub fn donjon(&self) -> Option<&Donjon> {
        self.donjon.as_ref()
    }

    /// Whether [`Maze::generate`] may run.
    pub fn can_generate(&self) -> bool {
        self.state == MazeState::Default
    }

    /// Whether [`Maze::reset`] may run.
    pub fn can_reset(&self) -> bool {
        self.state == MazeState::Generated
    }

    /// Index of the neighbouring cell toward `direction`, or `None` at the
    /// grid edge.
    pub fn neighbour(&self, index: CellId, direction: Direction) -> Option<CellId> {
        let len = self.cells.len();
        if index >= len {
            return None;
        }
        match direction {
            Direction::North if index >= self.width => Some(index - self.width),
            Direction::East if (index + 1) % self.width != 0 => Some(index + 1),
            Direction::South if index + self.width < len => Some(index + self.width),
            Direction::West if index % self.width != 0 => Some(index - 1),
            _ => None,
        }
    }

    /// Carve a perfect maze: a spanning tree over the grid with exactly one
    /// passage route between any two cells.
    pub fn generate(&mut self) -> Result<()> {
        self.generate_with(&mut |_| {})
    }

    /// Carve a perfect maze, reporting each wall delta to `on_step`.
    pub fn generate_with(&mut self, on_step: &mut dyn FnMut(CarveStep)) -> Result<()> {
        if !self.can_generate() {
            return Err(Error::GenerationUnavailable { state: self.state });
        }
        self.state = MazeState::Generating;
        for cell in &mut self.cells {
            cell.reset();
        }

        self.carve(on_step);
        self.tag_endpoints();
        self.place_donjon(0)?;
        self.donjon = Some(Donjon::default());
        self.state = MazeState::Generated;
        debug!(width = self.width, height = self.height, "maze generated");
        Ok(())
    }

    /// Carve a perfect maze, then open up to `loop_count` extra connections.
    ///
    /// Loop injection is best effort: an iteration that lands on a cell with
    /// no closed wall pair left adds nothing, so the returned count may be
    /// anywhere between zero and `loop_count`.
    pub fn generate_imperfect(&mut self, loop_count: usize) -> Result<usize> {
        self.generate_imperfect_with(loop_count, &mut |_| {})
    }

    /// Carve an imperfect maze, reporting each wall delta to `on_step`.
    pub fn generate_imperfect_with(
        &mut self,
        loop_count: usize,
        on_step: &mut dyn FnMut(CarveStep),
    ) -> Result<usize> {
        self.generate_with(on_step)?;
        Ok(self.add_loops(loop_count, on_step))
    }

    /// Restore every cell to the fully-walled default and return to the
    /// `Default` state. Cells are re-initialized in place, not reallocated.
    pub fn reset(&mut self) -> Result<()> {
        if !self.can_reset() {
            return Err(Error::ResetUnavailable { state: self.state });
        }
        for cell in &mut self.cells {
            cell.reset();
        }
        self.donjon = None;
        self.state = MazeState::Default;
        Ok(())
    }

    /// Flag exactly `path` as the highlighted route, clearing any previous
    /// marking. Indices outside the grid are ignored.
    pub fn mark_path(&mut self, path: &[CellId]) {
        for cell in &mut self.cells {
            cell.is_part_of_path = false;
        }
        for &index in path {
            if let Some(cell) = self.cells.get_mut(index) {
                cell.is_part_of_path = true;
            }
        }
    }

    /// Per-cell wall nibbles in row-major order (see
    /// [`MazeCell::wall_bits`]). Two mazes carved from the same seed produce
    /// identical bitmaps.
    pub fn wall_bitmap(&self) -> Vec<u8> {
        self.cells.iter().map(MazeCell::wall_bits).collect()
    }

    /// Iterative depth-first backtracking over an explicit stack.
    ///
    /// The stack holds backtrack candidates, not the cell being processed:
    /// `current` is tracked separately and only pushed when the carver
    /// advances through a wall.
    fn carve(&mut self, on_step: &mut dyn FnMut(CarveStep)) {
        let mut stack: Vec<CellId> = Vec::with_capacity(self.cells.len());
        let mut unvisited = self.cells.len();

        let mut current = self.random_index(self.cells.len());
        self.cells[current].state = CellState::Visited;
        unvisited -= 1;
        stack.push(current);

        while unvisited > 0 || !stack.is_empty() {
            let mut candidates: Vec<(Direction, CellId)> = Vec::with_capacity(4);
            for direction in Direction::CARDINALS {
                if let Some(neighbour) = self.neighbour(current, direction) {
                    if self.cells[neighbour].state == CellState::Default {
                        candidates.push((direction, neighbour));
                    }
                }
            }

            if candidates.is_empty() {
                self.cells[current].state = CellState::Empty;
                let Some(previous) = stack.pop() else {
                    break;
                };
                self.cells[previous].state = CellState::Empty;
                if previous != current {
                    on_step(CarveStep::Backtrack {
                        from: current,
                        to: previous,
                    });
                }
                current = previous;
            } else {
                let (direction, neighbour) = candidates[self.random_index(candidates.len())];
                self.open_wall(current, neighbour, direction);
                on_step(CarveStep::Passage {
                    from: current,
                    to: neighbour,
                    direction,
                });
                stack.push(current);
                self.cells[neighbour].state = CellState::Visited;
                unvisited -= 1;
                current = neighbour;
            }
        }
    }

    /// Open extra connections to turn a perfect maze into an imperfect one.
    fn add_loops(&mut self, loop_count: usize, on_step: &mut dyn FnMut(CarveStep)) -> usize {
        let mut added = 0;
        for _ in 0..loop_count {
            let index = self.random_index(self.cells.len());
            let mut remaining = Direction::CARDINALS.to_vec();
            while !remaining.is_empty() {
                let direction = remaining.remove(self.random_index(remaining.len()));
                let Some(neighbour) = self.neighbour(index, direction) else {
                    continue;
                };
                if self.cells[index].has_wall(direction)
                    && self.cells[neighbour].has_wall(direction.opposite())
                {
                    self.open_wall(index, neighbour, direction);
                    on_step(CarveStep::Loop {
                        from: index,
                        to: neighbour,
                        direction,
                    });
                    added += 1;
                    break;
                }
            }
        }
        if added < loop_count {
            warn!(
                requested = loop_count,
                added, "loop injection found fewer closed wall pairs than requested"
            );
        }
        added
    }

    /// Remove the joining wall on both sides: one carve action, always
    /// symmetric.
    fn open_wall(&mut self, from: CellId, to: CellId, direction: Direction) {
        self.cells[from].remove_wall(direction);
        self.cells[to].remove_wall(direction.opposite());
    }

    fn tag_endpoints(&mut self) {
        if let Some(first) = self.cells.first_mut() {
            first.cell_type = CellType::Start;
        }
        if let Some(last) = self.cells.last_mut() {
            last.cell_type = CellType::End;
        }
    }

    /// Host the dungeon entry on `index`, relocating it if already placed.
    ///
    /// Generation places the entry on the start cell; hosts may move it
    /// anywhere afterwards. The `Donjon` type tag is only applied when the
    /// cell carries no other role marker, so the start and end tags stay
    /// visible when the entry lands on them.
    pub fn place_donjon(&mut self, index: CellId) -> Result<()> {
        if index >= self.cells.len() {
            return Err(Error::UnknownCell {
                cell: index,
                cell_count: self.cells.len(),
            });
        }
        for cell in &mut self.cells {
            if cell.contains_donjon {
                cell.contains_donjon = false;
                if cell.cell_type == CellType::Donjon {
                    cell.cell_type = CellType::Default;
                }
            }
        }
        let cell = &mut self.cells[index];
        cell.contains_donjon = true;
        if cell.cell_type == CellType::Default {
            cell.cell_type = CellType::Donjon;
        }
        Ok(())
    }

    /// Uniform draw from `0..upper` by scaling one 64-bit output of the
    /// injected source, so a scripted source maps directly onto choices.
    fn random_index(&mut self, upper: usize) -> usize {
        (((self.rng.next_u64() as u128) * (upper as u128)) >> 64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbour_respects_grid_edges() {
        let maze = Maze::with_seed(3, 3, 0).expect("valid dimensions");

        // Top-left corner.
        assert_eq!(maze.neighbour(0, Direction::North), None);
        assert_eq!(maze.neighbour(0, Direction::West), None);
        assert_eq!(maze.neighbour(0, Direction::East), Some(1));
        assert_eq!(maze.neighbour(0, Direction::South), Some(3));

        // Centre.
        assert_eq!(maze.neighbour(4, Direction::North), Some(1));
        assert_eq!(maze.neighbour(4, Direction::East), Some(5));
        assert_eq!(maze.neighbour(4, Direction::South), Some(7));
        assert_eq!(maze.neighbour(4, Direction::West), Some(3));

        // Bottom-right corner.
        assert_eq!(maze.neighbour(8, Direction::East), None);
        assert_eq!(maze.neighbour(8, Direction::South), None);

        // Out of range.
        assert_eq!(maze.neighbour(9, Direction::North), None);
    }

    #[test]
    fn single_column_has_no_lateral_neighbours() {
        let maze = Maze::with_seed(1, 4, 0).expect("valid dimensions");
        for index in 0..4 {
            assert_eq!(maze.neighbour(index, Direction::East), None);
            assert_eq!(maze.neighbour(index, Direction::West), None);
        }
        assert_eq!(maze.neighbour(2, Direction::North), Some(1));
        assert_eq!(maze.neighbour(2, Direction::South), Some(3));
    }

    #[test]
    fn cells_know_their_coordinates() {
        let maze = Maze::with_seed(4, 2, 0).expect("valid dimensions");
        let cell = maze.cell(6).expect("cell in range");
        assert_eq!((cell.x(), cell.y()), (2, 1));
    }

    #[test]
    fn state_display_names() {
        assert_eq!(MazeState::Default.to_string(), "default");
        assert_eq!(MazeState::Generating.to_string(), "generating");
        assert_eq!(MazeState::Generated.to_string(), "generated");
    }
}
