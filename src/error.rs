use crate::parser::Span;
use nom::error::{ErrorKind, ParseError};
use thiserror::Error;

/// Everything that can go wrong while parsing. The set is closed: every
/// failure surfaced by [`crate::parse`] carries one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Kind {
    #[error("Unexpected token")]
    UnexpectedToken,
    #[error("Expected colon")]
    ExpectedColon,
    #[error("Expected comma")]
    ExpectedComma,
    #[error("Invalid escape character")]
    InvalidEscape,
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Invalid number")]
    InvalidNumber,
}

/// A parse failure, located by character offset and by line/column.
///
/// `offset` counts characters from the start of the input, 0-based.
/// `line` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {col} (offset {offset})")]
pub struct Error {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
    pub kind: Kind,
}

impl Error {
    pub(crate) fn new(at: &Span<'_>, kind: Kind) -> Self {
        Self {
            offset: at.offset(),
            line: at.location_line(),
            col: at.get_utf8_column(),
            kind,
        }
    }
}

impl<'a> ParseError<Span<'a>> for Error {
    fn from_error_kind(input: Span<'a>, _kind: ErrorKind) -> Self {
        Error::new(&input, Kind::UnexpectedToken)
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
