//! Step count acquisition.
//!
//! Reads N from an interactive prompt and validates it. Non-integer and
//! negative values are rejected with a typed error; zero is accepted.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Prompt written before reading N.
pub const PROMPT: &str = "Please enter the number of steps N: ";

/// Failure to obtain a usable step count.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No step count given")]
    Empty,

    #[error("Invalid step count '{0}': expected a whole number")]
    NotAnInteger(String),

    #[error("Invalid step count {0}: must not be negative")]
    Negative(i64),

    #[error("Failed to read step count: {0}")]
    Io(#[from] io::Error),
}

/// Parse a step count from user text.
pub fn parse_steps(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))?;

    if value < 0 {
        return Err(InputError::Negative(value));
    }

    usize::try_from(value).map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

/// Write the prompt to `writer`, read one line from `reader`, and parse it.
///
/// End of input counts as an empty answer. There is no retry.
pub fn read_steps<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<usize, InputError> {
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Empty);
    }
    parse_steps(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_steps("100").unwrap(), 100);
        assert_eq!(parse_steps("  42\n").unwrap(), 42);
        assert_eq!(parse_steps("+7").unwrap(), 7);
        assert_eq!(parse_steps("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(parse_steps("-5"), Err(InputError::Negative(-5))));
    }

    #[test]
    fn test_parse_not_an_integer() {
        for bad in ["abc", "3.5", "1e3", "10 steps"] {
            match parse_steps(bad) {
                Err(InputError::NotAnInteger(s)) => assert_eq!(s, bad),
                other => panic!("expected NotAnInteger for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_steps(""), Err(InputError::Empty)));
        assert!(matches!(parse_steps("   \n"), Err(InputError::Empty)));
    }

    #[test]
    fn test_read_steps_writes_prompt() {
        let mut reader = Cursor::new("250\n");
        let mut output = Vec::new();

        let n = read_steps(&mut reader, &mut output).unwrap();

        assert_eq!(n, 250);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_read_steps_end_of_input() {
        let mut reader = Cursor::new("");
        let mut output = Vec::new();

        assert!(matches!(
            read_steps(&mut reader, &mut output),
            Err(InputError::Empty)
        ));
    }

    #[test]
    fn test_read_steps_reads_one_line_only() {
        let mut reader = Cursor::new("12\n34\n");
        let mut output = Vec::new();

        assert_eq!(read_steps(&mut reader, &mut output).unwrap(), 12);
    }

    #[test]
    fn test_error_messages() {
        assert!(InputError::Negative(-3).to_string().contains("must not be negative"));
        assert!(InputError::NotAnInteger("x".into())
            .to_string()
            .contains("expected a whole number"));
    }
}
