use std::fmt;

/// Row-major flat index of a cell within its maze (`row * width + col`).
///
/// The flat index is the canonical cell identity throughout the crate: graph
/// adjacency, priority tie-breaks, and path steps all use it. Coordinates on
/// [`MazeCell`] are a convenience for consumers only.
pub type CellId = usize;

/// Cardinal direction of a cell wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The four directions in the scan order used throughout the crate.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Direction of the matching wall on the adjacent cell.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(value)
    }
}

/// Generation bookkeeping state of a cell.
///
/// `Default` is unvisited, `Visited` is on the carve frontier, `Empty` is
/// fully backtracked; every cell of a finished maze rests at `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Default,
    Visited,
    Empty,
}

/// Post-generation role marker of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellType {
    #[default]
    Default,
    Start,
    End,
    Donjon,
}

/// A single grid position with four independently removable walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeCell {
    x: usize,
    y: usize,
    north_wall: bool,
    east_wall: bool,
    south_wall: bool,
    west_wall: bool,
    pub state: CellState,
    pub cell_type: CellType,
    /// Whether this cell hosts the dungeon entry.
    pub contains_donjon: bool,
    /// Set and cleared by path marking; not generation state.
    pub is_part_of_path: bool,
}

impl MazeCell {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            north_wall: true,
            east_wall: true,
            south_wall: true,
            west_wall: true,
            state: CellState::Default,
            cell_type: CellType::Default,
            contains_donjon: false,
            is_part_of_path: false,
        }
    }

    /// Column of the cell within its maze.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of the cell within its maze.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Whether the wall toward `direction` is still standing.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north_wall,
            Direction::East => self.east_wall,
            Direction::South => self.south_wall,
            Direction::West => self.west_wall,
        }
    }

    /// Remove the wall toward `direction`.
    ///
    /// Callers carve symmetrically: the neighbour's wall toward
    /// [`Direction::opposite`] must be removed in the same action.
    pub(crate) fn remove_wall(&mut self, direction: Direction) {
        self.set_wall(direction, false);
    }

    /// Restore the wall toward `direction`.
    pub(crate) fn restore_wall(&mut self, direction: Direction) {
        self.set_wall(direction, true);
    }

    fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::North => self.north_wall = present,
            Direction::East => self.east_wall = present,
            Direction::South => self.south_wall = present,
            Direction::West => self.west_wall = present,
        }
    }

    /// Return the cell to the fully-walled default.
    pub(crate) fn reset(&mut self) {
        for direction in Direction::CARDINALS {
            self.restore_wall(direction);
        }
        self.state = CellState::Default;
        self.cell_type = CellType::Default;
        self.contains_donjon = false;
        self.is_part_of_path = false;
    }

    /// 4-bit wall mask: bit 0 = north, 1 = east, 2 = south, 3 = west.
    ///
    /// Used by snapshots and determinism assertions; a fully-walled cell
    /// reads `0b1111`.
    pub fn wall_bits(&self) -> u8 {
        let mut bits = 0;
        if self.north_wall {
            bits |= 1;
        }
        if self.east_wall {
            bits |= 1 << 1;
        }
        if self.south_wall {
            bits |= 1 << 2;
        }
        if self.west_wall {
            bits |= 1 << 3;
        }
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_all_walls() {
        let cell = MazeCell::new(2, 3);
        for direction in Direction::CARDINALS {
            assert!(cell.has_wall(direction));
        }
        assert_eq!(cell.wall_bits(), 0b1111);
        assert_eq!(cell.x(), 2);
        assert_eq!(cell.y(), 3);
    }

    #[test]
    fn remove_and_restore_toggle_one_wall() {
        let mut cell = MazeCell::new(0, 0);
        cell.remove_wall(Direction::East);
        assert!(!cell.has_wall(Direction::East));
        assert_eq!(cell.wall_bits(), 0b1101);

        cell.restore_wall(Direction::East);
        assert_eq!(cell.wall_bits(), 0b1111);
    }

    #[test]
    fn reset_clears_state_and_flags() {
        let mut cell = MazeCell::new(0, 0);
        cell.remove_wall(Direction::North);
        cell.state = CellState::Empty;
        cell.cell_type = CellType::Start;
        cell.contains_donjon = true;
        cell.is_part_of_path = true;

        cell.reset();
        assert_eq!(cell, MazeCell::new(0, 0));
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }
}
