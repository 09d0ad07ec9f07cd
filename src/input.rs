//! Courses compiled into the binary.

/// The full puzzle course, one command per line.
pub const PUZZLE: &str = include_str!("../input/puzzle.txt");

/// The six-command worked example.
pub const EXAMPLE: &str = include_str!("../input/example.txt");
