//! Interpreter for parsed courses.
//!
//! A course is replayed under a `Strategy`, one command at a time, against a
//! `NavigationState` that starts at zero. Each strategy is a pure transition
//! function; `Navigator` owns the state for one replay. All arithmetic is
//! checked and reports `Error::Overflow` instead of wrapping.

use tracing::{debug, trace};

use crate::ast::{Action, Command};
use crate::error::{Error, Result};

/// Accumulated position of the submarine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub horizontal: i64,
    pub depth: i64,
    /// Only moved by `Strategy::Aimed`.
    pub aim: i64,
}

impl NavigationState {
    /// Product of horizontal position and depth.
    pub fn product(&self) -> Result<i64> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or_else(|| Error::overflow("horizontal * depth"))
    }
}

/// How `down` and `up` affect the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `down`/`up` change depth directly.
    Simple,
    /// `down`/`up` change aim; `forward` dives by `aim * v`.
    Aimed,
}

impl Strategy {
    /// Both strategies, in reporting order.
    pub const ALL: [Strategy; 2] = [Strategy::Simple, Strategy::Aimed];

    /// Apply one command to a state, returning the next state.
    pub fn step(self, state: NavigationState, command: &Command) -> Result<NavigationState> {
        let v = i64::from(command.magnitude);
        let NavigationState {
            horizontal,
            depth,
            aim,
        } = state;
        let next = match (self, command.action) {
            (Strategy::Simple, Action::Forward) => horizontal
                .checked_add(v)
                .map(|horizontal| NavigationState { horizontal, ..state }),
            (Strategy::Simple, Action::Down) => depth
                .checked_add(v)
                .map(|depth| NavigationState { depth, ..state }),
            (Strategy::Simple, Action::Up) => depth
                .checked_sub(v)
                .map(|depth| NavigationState { depth, ..state }),
            (Strategy::Aimed, Action::Forward) => horizontal
                .checked_add(v)
                .zip(aim.checked_mul(v).and_then(|dive| depth.checked_add(dive)))
                .map(|(horizontal, depth)| NavigationState {
                    horizontal,
                    depth,
                    aim,
                }),
            (Strategy::Aimed, Action::Down) => aim
                .checked_add(v)
                .map(|aim| NavigationState { aim, ..state }),
            (Strategy::Aimed, Action::Up) => aim
                .checked_sub(v)
                .map(|aim| NavigationState { aim, ..state }),
        };
        next.ok_or_else(|| Error::overflow(format!("`{}`", command)))
    }
}

/// Owns the navigation state for a single replay of a course.
#[derive(Debug, Clone)]
pub struct Navigator {
    strategy: Strategy,
    state: NavigationState,
}

impl Navigator {
    /// Create a navigator at the origin.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            state: NavigationState::default(),
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Apply one command to the state in place.
    ///
    /// On overflow the state is left as it was before the command.
    pub fn apply(&mut self, command: &Command) -> Result<()> {
        self.state = self.strategy.step(self.state, command)?;
        trace!(?command, state = ?self.state, "applied command");
        Ok(())
    }

    /// Product of horizontal position and depth.
    pub fn result(&self) -> Result<i64> {
        self.state.product()
    }
}

/// Replay a whole course under a strategy from a fresh state.
///
/// An overflow aborts the replay and carries the 1-based position of the
/// offending command.
pub fn run(commands: &[Command], strategy: Strategy) -> Result<NavigationState> {
    let mut navigator = Navigator::new(strategy);
    for (i, command) in commands.iter().enumerate() {
        navigator
            .apply(command)
            .map_err(|e| e.with_input_line(i + 1))?;
    }
    let state = navigator.state();
    debug!(
        ?strategy,
        commands = commands.len(),
        horizontal = state.horizontal,
        depth = state.depth,
        aim = state.aim,
        "course replayed"
    );
    Ok(state)
}
