//! Sentence parsing error types.

use std::fmt;

/// Result type for sentence parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for sentence parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Byte offset in the input where the error was detected.
    pub position: usize,
    /// Clause being parsed when the error occurred.
    pub clause: Option<Clause>,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            clause: None,
            context: None,
        }
    }

    /// Records the clause being parsed.
    #[must_use]
    pub fn in_clause(mut self, clause: Clause) -> Self {
        self.clause = Some(clause);
        self
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Returns the broad category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.position)?;
        if let Some(clause) = self.clause {
            write!(f, " in {clause} clause")?;
        }
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No token rule matches the input at this position.
    UnmatchedInput,
    /// A token that does not fit the clause.
    UnexpectedToken,
    /// Input ended inside a clause.
    UnexpectedEnd,
    /// A number outside the range of the field it sets.
    OutOfRange,
    /// An until date that is not on the calendar or could not be read.
    InvalidDate,
    /// Both a count and an until date.
    CountUntilConflict,
}

impl ParseErrorKind {
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::UnmatchedInput => ErrorCategory::Tokenization,
            Self::UnexpectedToken | Self::UnexpectedEnd => ErrorCategory::Grammar,
            Self::OutOfRange | Self::InvalidDate | Self::CountUntilConflict => {
                ErrorCategory::Semantic
            }
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedInput => write!(f, "unrecognized input"),
            Self::UnexpectedToken => write!(f, "unexpected token"),
            Self::UnexpectedEnd => write!(f, "unexpected end of input"),
            Self::OutOfRange => write!(f, "value out of range"),
            Self::InvalidDate => write!(f, "invalid date"),
            Self::CountUntilConflict => write!(f, "count and until are mutually exclusive"),
        }
    }
}

/// Taxonomy of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input contains text no rule recognizes.
    Tokenization,
    /// The tokens do not form a sentence of the grammar.
    Grammar,
    /// The sentence is well formed but its values are not.
    Semantic,
}

/// Sentence clauses, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Frequency,
    WeekdayList,
    Position,
    Hours,
    Until,
    Count,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::WeekdayList => write!(f, "weekday list"),
            Self::Position => write!(f, "position"),
            Self::Hours => write!(f, "hour"),
            Self::Until => write!(f, "until"),
            Self::Count => write!(f, "count"),
        }
    }
}
