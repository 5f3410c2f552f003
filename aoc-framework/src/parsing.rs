//! Utility functions and errors for parsing input.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    fn new<E: Into<DynamicError>>(line_index: usize, source: E) -> Self {
        Self {
            line_index,
            source: source.into(),
        }
    }
}

/// Parse lines with a closure, mapping any line's error with an [`InvalidLine`].
///
/// The closure is passed the zero-based line index and the line string.
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is returned, sourcing the original error.
///
/// # Returns
///
/// An iterable of parsing results for each line.
pub fn parse_input_lines<T, E, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    E: Into<DynamicError>,
    F: FnMut(usize, &str) -> Result<T, E>,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(index, line).map_err(|source| InvalidLine::new(index, source))
    })
}

/// A cursor over input lines for inputs made of blocks separated by empty lines.
///
/// Any error from a parsing closure is wrapped in [`InvalidLine`] with the line's position in the
/// whole input.
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    /// Create a scanner positioned at the first line of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Skip any empty lines.
    ///
    /// # Returns
    ///
    /// The index of the next non-empty line, or `None` if the input is exhausted.
    pub fn skip_empty(&mut self) -> Option<usize> {
        while let Some((_, line)) = self.lines.peek() {
            if !line.is_empty() {
                break;
            }
            self.lines.next();
        }
        self.lines.peek().map(|&(index, _)| index)
    }

    /// Parse the next line if it is part of the current block (i.e. it is not empty).
    ///
    /// An empty line is left in place so it still terminates the block.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] error is returned if the parser fails on the line.
    pub fn next_in_sequence<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        match self.lines.next_if(|(_, line)| !line.is_empty()) {
            Some((index, line)) => parser(index, line)
                .map(Some)
                .map_err(|source| InvalidLine::new(index, source)),
            None => Ok(None),
        }
    }

    /// Skip empty lines, then parse the next line.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] error is returned if the parser fails on the line.
    pub fn next_item<T, E, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnOnce(usize, &str) -> Result<T, E>,
    {
        self.skip_empty();
        self.next_in_sequence(parser)
    }

    /// Parse every line of the current block, stopping at an empty line or the end of input.
    ///
    /// # Errors
    ///
    /// An [`InvalidLine`] error is returned for the first line the parser fails on.
    pub fn collect_sequence<T, E, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        E: Into<DynamicError>,
        F: FnMut(usize, &str) -> Result<T, E>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_in_sequence(&mut parser)? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Parse a line of whitespace separated values.
///
/// # Errors
///
/// A [`ParseContextError`] is returned for the first value that fails to parse.
pub fn parse_whitespace_separated<F>(line: &str) -> DynamicResult<Vec<F>>
where
    F: FromStr,
    F::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(line
        .split_whitespace()
        .map(parse_with_context)
        .collect::<Result<_, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_line_reports_one_based_line() {
        let results: Vec<Result<u8, _>> =
            parse_input_lines("1\nx\n3", |_, line| parse_with_context(line)).collect();

        assert!(results[0].is_ok());
        let error = results[1].as_ref().err().map(ToString::to_string);
        assert_eq!(error.as_deref(), Some("failure parsing line 2"));
        assert!(results[2].is_ok());
    }

    #[test]
    fn scanner_reads_blocks_separated_by_empty_lines() -> DynamicResult<()> {
        let mut scanner = InputScanner::new("a\nb\n\n\nc\n");

        let first =
            scanner.collect_sequence(|_, line| -> DynamicResult<_> { Ok(line.to_owned()) })?;
        assert_eq!(first, ["a", "b"]);

        assert_eq!(scanner.skip_empty(), Some(4));
        let second = scanner
            .next_item(|index, line| -> DynamicResult<_> { Ok((index, line.to_owned())) })?;
        assert_eq!(second, Some((4, "c".to_owned())));

        assert_eq!(scanner.skip_empty(), None);
        Ok(())
    }

    #[test]
    fn scanner_errors_carry_absolute_line_index() {
        let mut scanner = InputScanner::new("\n\n7\nnope");
        let result = scanner.collect_sequence(|_, line| parse_with_context::<u8>(line));
        // the leading empty lines end the (empty) first block
        assert!(matches!(result.as_deref(), Ok([])));

        scanner.skip_empty();
        let error = scanner
            .collect_sequence(|_, line| parse_with_context::<u8>(line))
            .err()
            .map(|e| e.to_string());
        assert_eq!(error.as_deref(), Some("failure parsing line 4"));
    }

    #[test]
    fn whitespace_separated_values_parse() -> DynamicResult<()> {
        let values: Vec<u64> = parse_whitespace_separated("125  17 0")?;
        assert_eq!(values, [125, 17, 0]);
        assert!(parse_whitespace_separated::<u64>("1 two").is_err());
        Ok(())
    }
}
