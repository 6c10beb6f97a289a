//! Tokenizer for recurrence sentences.
//!
//! Splits text into tokens using the rules of a `Language`. Tokens are
//! produced on demand so that a caller can stop early and hand the rest of
//! the input to something else (a custom date parser, for instance).

use crate::language::{Language, Symbol};
use crate::parse::{ParseError, ParseErrorKind, ParseResult};

/// A classified piece of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub symbol: Symbol,
    /// The matched input.
    pub text: &'a str,
    /// Integer value of `Number` and `Nth` tokens.
    pub value: Option<u32>,
    /// Byte offset of the match in the input.
    pub offset: usize,
}

/// On-demand tokenizer over one input string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    language: &'a Language,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str, language: &'a Language) -> Self {
        Self {
            input,
            pos: 0,
            language,
        }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The input not yet consumed, without leading whitespace.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        self.input[self.pos..].trim_start()
    }

    /// Consumes the rest of the input.
    pub fn finish(&mut self) {
        self.pos = self.input.len();
    }

    /// Returns the next significant token, or `None` at the end of input.
    ///
    /// At each position every rule is tried and the longest match wins; on a
    /// tie the rule listed first in the profile wins.
    ///
    /// ## Errors
    /// Returns `UnmatchedInput` if no rule matches at the current position, or
    /// `OutOfRange` if a number does not fit in 32 bits.
    pub fn next_token(&mut self) -> ParseResult<Option<Token<'a>>> {
        loop {
            self.skip_whitespace();
            let rest = &self.input[self.pos..];
            if rest.is_empty() {
                return Ok(None);
            }

            let mut best: Option<(usize, &crate::language::TokenRule)> = None;
            for rule in self.language.rules() {
                if let Some(m) = rule.pattern.find(rest)
                    && m.end() > 0
                    && best.is_none_or(|(len, _)| m.end() > len)
                {
                    best = Some((m.end(), rule));
                }
            }

            let Some((len, rule)) = best else {
                tracing::warn!(offset = self.pos, "No token rule matches");
                return Err(ParseError::new(ParseErrorKind::UnmatchedInput, self.pos)
                    .with_context(context_at(rest)));
            };

            let offset = self.pos;
            let text = &rest[..len];
            self.pos += len;

            if rule.symbol == Symbol::Skip {
                continue;
            }

            let value = match rule.symbol {
                Symbol::Number | Symbol::Nth => Some(match rule.value {
                    Some(value) => value,
                    None => number_value(rule, text, offset)?,
                }),
                _ => None,
            };

            tracing::trace!(symbol = ?rule.symbol, text, offset, "Token");

            return Ok(Some(Token {
                symbol: rule.symbol,
                text,
                value,
                offset,
            }));
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

/// Reads the digits of a number or ordinal: the first capture group that
/// participated, or the whole match.
fn number_value(
    rule: &crate::language::TokenRule,
    text: &str,
    offset: usize,
) -> ParseResult<u32> {
    let digits = rule
        .pattern
        .captures(text)
        .and_then(|caps| caps.iter().skip(1).flatten().next())
        .map_or(text, |m| m.as_str());

    digits.trim().parse().map_err(|_err| {
        ParseError::new(ParseErrorKind::OutOfRange, offset)
            .with_context(format!("number '{text}' is too large"))
    })
}

/// A short excerpt of the input for error messages.
fn context_at(rest: &str) -> String {
    rest.chars().take(16).collect()
}

/// Tokenizes the whole input.
///
/// ## Errors
/// Returns the first tokenization error.
pub fn tokenize<'a>(input: &'a str, language: &'a Language) -> ParseResult<Vec<Token<'a>>> {
    let mut lexer = Lexer::new(input, language);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use recurtext_core::rule::Weekday;

    use super::*;
    use crate::language::{english, spanish};

    fn symbols(input: &str, language: &Language) -> Vec<Symbol> {
        tokenize(input, language)
            .unwrap()
            .into_iter()
            .map(|t| t.symbol)
            .collect()
    }

    #[test]
    fn spanish_sentence() {
        assert_eq!(
            symbols("Cada mes en el 3º último martes", spanish()),
            vec![
                Symbol::Every,
                Symbol::Months,
                Symbol::On,
                Symbol::The,
                Symbol::Nth,
                Symbol::Last,
                Symbol::Weekday(Weekday::Tuesday),
            ]
        );
    }

    #[test]
    fn longest_match_wins() {
        // "día de semana" beats "día", "marzo" beats "mar"
        assert_eq!(
            symbols("día de semana marzo mar", spanish()),
            vec![
                Symbol::Weekdays,
                Symbol::Month(3),
                Symbol::Weekday(Weekday::Tuesday),
            ]
        );
    }

    #[test]
    fn numbers_carry_values() {
        let tokens = tokenize("every 4 hours", english()).unwrap();
        assert_eq!(tokens[1].symbol, Symbol::Number);
        assert_eq!(tokens[1].value, Some(4));
        assert_eq!(tokens[1].offset, 6);

        let tokens = tokenize("on the 13th", english()).unwrap();
        assert_eq!(tokens[2].symbol, Symbol::Nth);
        assert_eq!(tokens[2].value, Some(13));
    }

    #[test]
    fn spelled_out_numbers_normalize() {
        let digits = tokenize("cada 2 semanas", spanish()).unwrap();
        let words = tokenize("cada dos semanas", spanish()).unwrap();
        assert_eq!(digits[1].symbol, words[1].symbol);
        assert_eq!(digits[1].value, words[1].value);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            symbols("EVERY Week ON monday", english()),
            vec![
                Symbol::Every,
                Symbol::Weeks,
                Symbol::On,
                Symbol::Weekday(Weekday::Monday),
            ]
        );
    }

    #[test]
    fn separators_and_trailing_period() {
        assert_eq!(
            symbols("lunes, martes y jueves.", spanish()),
            vec![
                Symbol::Weekday(Weekday::Monday),
                Symbol::Comma,
                Symbol::Weekday(Weekday::Tuesday),
                Symbol::Comma,
                Symbol::Weekday(Weekday::Thursday),
            ]
        );
    }

    #[test]
    fn unmatched_input_reports_position() {
        let err = tokenize("every fortnight", english()).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedInput);
        assert_eq!(err.position, 6);
        assert_eq!(err.context.as_deref(), Some("fortnight"));
    }

    #[test]
    fn numbers_end_at_a_word_boundary() {
        let err = tokenize("on 3mo", english()).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnmatchedInput);
        assert_eq!(err.position, 3);

        let tokens = tokenize("the 0th", english()).unwrap();
        assert_eq!(tokens[1].symbol, Symbol::Nth);
        assert_eq!(tokens[1].value, Some(0));
    }

    #[test]
    fn oversized_number_is_out_of_range() {
        let err = tokenize("every 99999999999 days", english()).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::OutOfRange);
    }

    #[test]
    fn remainder_is_left_untouched() {
        let mut lexer = Lexer::new("hasta 10 de noviembre", spanish());
        let token = lexer.next_token().unwrap().unwrap();
        assert_eq!(token.symbol, Symbol::Until);
        assert_eq!(lexer.remainder(), "10 de noviembre");
    }
}
