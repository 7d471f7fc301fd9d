mod common;

use common::FirstPickRng;
use donjon_maze::snapshot::{SNAPSHOT_HEADER_SIZE, SNAPSHOT_VERSION};
use donjon_maze::{Error, Maze, MazeSnapshot};

#[test]
fn snapshot_restores_the_recorded_layout() {
    let mut maze = Maze::with_rng(3, 3, FirstPickRng).expect("valid dimensions");
    maze.generate().expect("generation from default state");

    let snapshot = MazeSnapshot::capture(&maze);
    assert!(snapshot.matches(&maze));
    assert_eq!(snapshot.walls(), &[13, 5, 3, 9, 3, 10, 14, 12, 6]);

    let bytes = snapshot.to_bytes().expect("grid fits the wire format");
    assert_eq!(bytes[0], SNAPSHOT_VERSION);
    // 9 nibbles pack into 5 payload bytes.
    assert_eq!(bytes.len(), SNAPSHOT_HEADER_SIZE + 5);

    let restored = MazeSnapshot::from_bytes(&bytes).expect("bytes decode");
    assert_eq!(restored, snapshot);
    assert!(restored.matches(&maze));
    assert_eq!(restored.wall_bits(0), Some(13));
    assert_eq!(restored.wall_bits(9), None);
}

#[test]
fn snapshot_survives_a_seeded_maze() {
    let mut maze = Maze::with_seed(12, 7, 31).expect("valid dimensions");
    maze.generate().expect("generation from default state");

    let bytes = MazeSnapshot::capture(&maze)
        .to_bytes()
        .expect("grid fits the wire format");
    let restored = MazeSnapshot::from_bytes(&bytes).expect("bytes decode");

    assert_eq!(restored.width(), 12);
    assert_eq!(restored.height(), 7);
    assert_eq!(restored.walls(), maze.wall_bitmap().as_slice());
}

#[test]
fn truncated_bytes_are_rejected() {
    let error = MazeSnapshot::from_bytes(&[SNAPSHOT_VERSION, 0, 3]).expect_err("short header");
    assert!(matches!(error, Error::SnapshotDecode { .. }));

    // Valid header for a 3x3 grid, but a payload byte is missing.
    let error =
        MazeSnapshot::from_bytes(&[SNAPSHOT_VERSION, 0, 3, 0, 3, 0xFF, 0xFF, 0xFF, 0xFF])
            .expect_err("short payload");
    assert!(matches!(error, Error::SnapshotDecode { .. }));
}

#[test]
fn unknown_version_is_rejected() {
    let error = MazeSnapshot::from_bytes(&[9, 0, 1, 0, 1, 0xF0]).expect_err("future version");
    let message = error.to_string();
    assert!(message.contains("version 9"), "unexpected message: {message}");
}

#[test]
fn zero_dimensions_are_rejected() {
    let error = MazeSnapshot::from_bytes(&[SNAPSHOT_VERSION, 0, 0, 0, 4]).expect_err("zero width");
    assert!(matches!(error, Error::SnapshotDecode { .. }));
}
