//! Error types for the course interpreter.

use std::fmt;

/// Errors that can occur while reading or replaying a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A line did not match `("forward"|"down"|"up") SPACE DIGITS`.
    MalformedCommand {
        /// The offending line, without its line terminator.
        text: String,
        /// Line number in the input (1-based), when known.
        line: Option<usize>,
        /// Byte offset within the line where parsing failed.
        offset: usize,
        /// What the parser expected at `offset`.
        expected: String,
    },
    /// A well-formed course drove the state outside `i64`.
    Overflow {
        /// The command or computation that overflowed.
        operation: String,
        /// Line number in the input (1-based), when known.
        line: Option<usize>,
    },
}

impl Error {
    /// Create a malformed-command error for a single line.
    pub fn malformed(text: impl Into<String>, offset: usize, expected: impl Into<String>) -> Self {
        Self::MalformedCommand {
            text: text.into(),
            line: None,
            offset,
            expected: expected.into(),
        }
    }

    /// Create an overflow error for a command or computation.
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
            line: None,
        }
    }

    /// Add input line to an existing error.
    pub fn with_input_line(mut self, at: usize) -> Self {
        match &mut self {
            Self::MalformedCommand { line, .. } | Self::Overflow { line, .. } => *line = Some(at),
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCommand {
                text,
                line,
                offset,
                expected,
            } => {
                write!(f, "malformed command: expected {}", expected)?;
                if let Some(line) = line {
                    write!(f, " (at input line {})", line)?;
                }
                write!(f, "\n  {}\n  {}^", text, " ".repeat(*offset))
            }
            Self::Overflow { operation, line } => {
                write!(f, "arithmetic overflow in {}", operation)?;
                match line {
                    Some(line) => write!(f, " (at input line {})", line),
                    None => Ok(()),
                }
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for course operations.
pub type Result<T> = std::result::Result<T, Error>;
