//! Sentence to options.

mod error;
mod parser;

pub use error::{Clause, ErrorCategory, ParseError, ParseErrorKind, ParseResult};
pub use parser::Parser;
