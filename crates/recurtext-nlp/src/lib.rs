//! Natural-language recurrence rules.
//!
//! Converts between recurrence `Options` and sentences such as
//! "every month on the 2nd last Friday" or "cada semana los lunes, miércoles",
//! in both directions, driven by a `Language` profile.

pub mod date;
pub mod language;
pub mod lexer;
pub mod parse;
pub mod text;

use recurtext_core::rule::Options;
use thiserror::Error;

pub use date::{DateFormatter, DateParser, DefaultDateFormat};
pub use language::{Language, builtin, english, from_settings, spanish};
pub use parse::{ParseError, ParseErrorKind, ParseResult, Parser};
pub use text::{TextError, TextResult, ToText};

/// Crate-level errors
#[derive(Error, Debug)]
pub enum NlpError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Text(#[from] TextError),
}

/// Parses a sentence into recurrence options.
///
/// ## Errors
/// Returns a `ParseError` if the sentence does not follow the profile's
/// grammar or names out-of-range values.
pub fn parse(text: &str, language: &Language) -> ParseResult<Options> {
    Parser::new(language).parse(text)
}

/// Renders recurrence options as a sentence.
///
/// `formatter` renders the until date; the profile's default layout is used
/// when it is `None`.
///
/// ## Errors
/// Returns a `TextError` if the options have no frequency or are otherwise
/// malformed.
pub fn generate(
    options: &Options,
    language: &Language,
    formatter: Option<&dyn DateFormatter>,
) -> TextResult<String> {
    let to_text = ToText::new(language);
    match formatter {
        Some(formatter) => to_text.with_date_formatter(formatter).render(options),
        None => to_text.render(options),
    }
}
