//! Course command types.

use std::fmt;

/// The movement named at the start of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `forward <n>`
    Forward,
    /// `down <n>`
    Down,
    /// `up <n>`
    Up,
}

/// A single parsed course command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub magnitude: u32,
}

impl Command {
    pub fn new(action: Action, magnitude: u32) -> Self {
        Self { action, magnitude }
    }

    pub fn forward(magnitude: u32) -> Self {
        Self::new(Action::Forward, magnitude)
    }

    pub fn down(magnitude: u32) -> Self {
        Self::new(Action::Down, magnitude)
    }

    pub fn up(magnitude: u32) -> Self {
        Self::new(Action::Up, magnitude)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            Action::Forward => "forward",
            Action::Down => "down",
            Action::Up => "up",
        };
        write!(f, "{} {}", action, self.magnitude)
    }
}
