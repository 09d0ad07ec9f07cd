//! Parser for course text.
//!
//! Each line is `<action> <magnitude>`, where the action is `forward`, `down`
//! or `up` and the magnitude is a run of ASCII digits that fits in a `u32`.

use winnow::ModalResult;
use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;

use crate::ast::{Action, Command};
use crate::error::{Error, Result};

/// Parse a complete course: one command per line, in order.
///
/// Stops at the first malformed line; the error carries its 1-based line number.
pub fn parse_course(input: &str) -> Result<Vec<Command>> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| parse_command(line).map_err(|e| e.with_input_line(i + 1)))
        .collect()
}

/// Parse a single command line such as `forward 5`.
pub fn parse_command(line: &str) -> Result<Command> {
    command.parse(line).map_err(|e| {
        let expected = match e.inner().context().next() {
            Some(StrContext::Expected(StrContextValue::Description(desc))) => desc.to_string(),
            Some(StrContext::Label(label)) => label.to_string(),
            _ => "end of line".to_string(),
        };
        Error::malformed(line, e.offset(), expected)
    })
}

/// Parser for `<action> <magnitude>`.
fn command(input: &mut &str) -> ModalResult<Command> {
    let action = action.parse_next(input)?;
    cut_err(' ')
        .context(StrContext::Expected(StrContextValue::Description("' '")))
        .parse_next(input)?;
    let magnitude = cut_err(magnitude)
        .context(StrContext::Expected(StrContextValue::Description(
            "<magnitude>",
        )))
        .parse_next(input)?;
    Ok(Command::new(action, magnitude))
}

/// Parser for the action keyword.
fn action(input: &mut &str) -> ModalResult<Action> {
    alt((
        "forward".value(Action::Forward),
        "down".value(Action::Down),
        "up".value(Action::Up),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "forward, down or up",
    )))
    .parse_next(input)
}

/// Parser for a non-negative magnitude that fits in a `u32`.
fn magnitude(input: &mut &str) -> ModalResult<u32> {
    digit1
        .try_map(|digits: &str| digits.parse::<u32>())
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_of(err: &Error) -> &str {
        match err {
            Error::MalformedCommand { expected, .. } => expected,
            other => panic!("expected malformed command, got {:?}", other),
        }
    }

    fn offset_of(err: &Error) -> usize {
        match err {
            Error::MalformedCommand { offset, .. } => *offset,
            other => panic!("expected malformed command, got {:?}", other),
        }
    }

    #[test]
    fn each_action() {
        assert_eq!(parse_command("forward 5").unwrap(), Command::forward(5));
        assert_eq!(parse_command("down 12").unwrap(), Command::down(12));
        assert_eq!(parse_command("up 0").unwrap(), Command::up(0));
    }

    #[test]
    fn multi_digit_magnitude() {
        assert_eq!(
            parse_command("forward 4294967295").unwrap(),
            Command::forward(u32::MAX)
        );
    }

    #[test]
    fn unknown_action() {
        let err = parse_command("left 3").unwrap_err();
        assert_eq!(expected_of(&err), "forward, down or up");
        assert_eq!(offset_of(&err), 0);
    }

    #[test]
    fn non_numeric_magnitude() {
        let err = parse_command("forward x").unwrap_err();
        assert_eq!(expected_of(&err), "<magnitude>");
        assert_eq!(offset_of(&err), 8);
    }

    #[test]
    fn negative_magnitude() {
        let err = parse_command("down -3").unwrap_err();
        assert_eq!(expected_of(&err), "<magnitude>");
    }

    #[test]
    fn magnitude_overflow() {
        let err = parse_command("up 4294967296").unwrap_err();
        assert_eq!(expected_of(&err), "<magnitude>");
    }

    #[test]
    fn missing_space() {
        let err = parse_command("forward5").unwrap_err();
        assert_eq!(expected_of(&err), "' '");
        assert_eq!(offset_of(&err), 7);
    }

    #[test]
    fn missing_magnitude() {
        let err = parse_command("down ").unwrap_err();
        assert_eq!(expected_of(&err), "<magnitude>");
    }

    #[test]
    fn trailing_input() {
        let err = parse_command("forward 5 ").unwrap_err();
        assert_eq!(expected_of(&err), "end of line");
        assert_eq!(offset_of(&err), 9);
    }

    #[test]
    fn uppercase_action_rejected() {
        assert!(parse_command("Forward 5").is_err());
    }

    #[test]
    fn empty_line() {
        let err = parse_command("").unwrap_err();
        assert_eq!(expected_of(&err), "forward, down or up");
    }

    #[test]
    fn empty_course() {
        assert_eq!(parse_course("").unwrap(), vec![]);
    }

    #[test]
    fn course_in_order() {
        let course = parse_course("forward 5\ndown 5\nup 3\n").unwrap();
        assert_eq!(
            course,
            vec![Command::forward(5), Command::down(5), Command::up(3)]
        );
    }

    #[test]
    fn course_with_crlf() {
        let course = parse_course("forward 1\r\nup 2\r\n").unwrap();
        assert_eq!(course, vec![Command::forward(1), Command::up(2)]);
    }

    #[test]
    fn course_reports_failing_line() {
        let err = parse_course("forward 5\ndown 5\nleft 3\nup 1").unwrap_err();
        assert!(matches!(err, Error::MalformedCommand { line: Some(3), .. }));
    }

    #[test]
    fn course_blank_line_is_malformed() {
        let err = parse_course("forward 5\n\ndown 5").unwrap_err();
        assert!(matches!(err, Error::MalformedCommand { line: Some(2), .. }));
    }
}
