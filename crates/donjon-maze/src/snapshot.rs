//! Compact wall-bitmap serialization for maze layouts.
//!
//! Each cell contributes a 4-bit north/east/south/west wall mask, so two
//! cells pack into one byte. The byte layout is version-prefixed so stored
//! snapshots stay decodable across format revisions. Generation bookkeeping
//! (cell states, role tags, path flags) is not serialized: a snapshot
//! captures the carved layout, nothing else.

use serde::{Deserialize, Serialize};

use crate::cell::CellId;
use crate::error::{Error, Result};
use crate::maze::Maze;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Header size in bytes (version + width + height).
pub const SNAPSHOT_HEADER_SIZE: usize = 5;

/// Largest grid side the wire format can carry.
pub const MAX_SNAPSHOT_SIDE: usize = u16::MAX as usize;

/// A captured wall configuration with its grid dimensions.
///
/// Binary layout:
/// - Byte 0: version (must be [`SNAPSHOT_VERSION`])
/// - Bytes 1-2: width (u16 big-endian)
/// - Bytes 3-4: height (u16 big-endian)
/// - Payload: one 4-bit wall mask per cell in row-major order, two cells
///   per byte, zero-padded to a whole byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSnapshot {
    width: usize,
    height: usize,
    walls: Vec<u8>,
}

impl MazeSnapshot {
    /// Capture the wall configuration of a maze.
    pub fn capture(maze: &Maze) -> Self {
        Self {
            width: maze.width(),
            height: maze.height(),
            walls: maze.wall_bitmap(),
        }
    }

    /// Width of the captured grid, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the captured grid, in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Per-cell wall nibbles in row-major order.
    pub fn walls(&self) -> &[u8] {
        &self.walls
    }

    /// Wall mask of the cell at `index`, if it exists.
    pub fn wall_bits(&self, index: CellId) -> Option<u8> {
        self.walls.get(index).copied()
    }

    /// Whether `maze` currently carries the captured wall configuration.
    pub fn matches(&self, maze: &Maze) -> bool {
        self.width == maze.width()
            && self.height == maze.height()
            && self.walls == maze.wall_bitmap()
    }

    /// Encode into the versioned binary layout.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.width > MAX_SNAPSHOT_SIDE || self.height > MAX_SNAPSHOT_SIDE {
            return Err(Error::SnapshotEncode {
                message: format!(
                    "grid {}x{} exceeds the maximum encodable side {MAX_SNAPSHOT_SIDE}",
                    self.width, self.height
                ),
            });
        }

        let mut bytes = Vec::with_capacity(SNAPSHOT_HEADER_SIZE + self.walls.len().div_ceil(2));
        bytes.push(SNAPSHOT_VERSION);
        bytes.extend_from_slice(&(self.width as u16).to_be_bytes());
        bytes.extend_from_slice(&(self.height as u16).to_be_bytes());

        let mut writer = BitWriter::new();
        for &mask in &self.walls {
            writer.write_bits(mask, 4);
        }
        bytes.extend_from_slice(&writer.finish());
        Ok(bytes)
    }

    /// Decode from the versioned binary layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < SNAPSHOT_HEADER_SIZE {
            return Err(Error::SnapshotDecode {
                message: format!(
                    "need at least {SNAPSHOT_HEADER_SIZE} bytes, got {}",
                    bytes.len()
                ),
            });
        }

        let version = bytes[0];
        if version != SNAPSHOT_VERSION {
            return Err(Error::SnapshotDecode {
                message: format!("unsupported snapshot version {version}"),
            });
        }

        let width = u16::from_be_bytes([bytes[1], bytes[2]]) as usize;
        let height = u16::from_be_bytes([bytes[3], bytes[4]]) as usize;
        if width == 0 || height == 0 {
            return Err(Error::SnapshotDecode {
                message: format!("invalid grid dimensions {width}x{height}"),
            });
        }

        let cell_count = width * height;
        let expected = SNAPSHOT_HEADER_SIZE + cell_count.div_ceil(2);
        if bytes.len() != expected {
            return Err(Error::SnapshotDecode {
                message: format!(
                    "expected {expected} bytes for a {width}x{height} grid, got {}",
                    bytes.len()
                ),
            });
        }

        let mut reader = BitReader::new(&bytes[SNAPSHOT_HEADER_SIZE..]);
        let walls = (0..cell_count).map(|_| reader.read_bits(4)).collect();

        Ok(Self {
            width,
            height,
            walls,
        })
    }
}

/// Helper for writing a few bits at a time to a byte buffer.
struct BitWriter {
    bytes: Vec<u8>,
    cur: u8,
    bits: usize, // bits currently in cur (0..8)
}

impl BitWriter {
    fn new() -> Self {
        BitWriter {
            bytes: Vec::new(),
            cur: 0,
            bits: 0,
        }
    }

    fn write_bits(&mut self, value: u8, bit_count: u8) {
        for i in (0..bit_count).rev() {
            let bit = (value >> i) & 1;
            self.cur = (self.cur << 1) | bit;
            self.bits += 1;
            if self.bits == 8 {
                self.bytes.push(self.cur);
                self.cur = 0;
                self.bits = 0;
            }
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.bits > 0 {
            self.bytes.push(self.cur << (8 - self.bits));
        }
        self.bytes
    }
}

/// Helper for reading a few bits at a time from a byte buffer.
struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize, // bit offset from the start of the buffer
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        BitReader { bytes, pos: 0 }
    }

    fn read_bits(&mut self, bit_count: u8) -> u8 {
        let mut value = 0;
        for _ in 0..bit_count {
            let byte = self.bytes.get(self.pos / 8).copied().unwrap_or(0);
            let bit = (byte >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit;
            self.pos += 1;
        }
        value
    }
}
