//! Replays a submarine course under two navigation strategies.
//!
//! A course is a list of `forward N`, `down N` and `up N` lines. The
//! `Simple` strategy moves depth directly; the `Aimed` strategy moves an aim
//! that scales how far each `forward` dives.

pub mod ast;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod logging;
pub mod parser;

use tracing::debug;

use error::Result;
use interpreter::Strategy;

/// Results of both strategies over the same course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub simple: i64,
    pub aimed: i64,
}

/// Parse a whole course, then replay it under each strategy.
///
/// Nothing is replayed unless every line parses. An overflow in either
/// replay fails the whole computation.
pub fn solve(text: &str) -> Result<Answers> {
    let course = parser::parse_course(text)?;
    debug!(commands = course.len(), "course parsed");

    let [simple, aimed] = Strategy::ALL
        .map(|strategy| -> Result<i64> { interpreter::run(&course, strategy)?.product() });
    Ok(Answers {
        simple: simple?,
        aimed: aimed?,
    })
}
