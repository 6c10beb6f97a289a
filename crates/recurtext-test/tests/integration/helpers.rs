use recurtext_core::rule::Options;
use recurtext_nlp::{Language, generate, parse};
use recurtext_test::{CorpusCase, normalized_rule};

/// Sentence to rule, compared after normalization.
pub fn assert_parses(case: &CorpusCase, language: &Language) {
    let parsed = parse(case.text, language)
        .unwrap_or_else(|err| panic!("{:?} failed to parse: {err}", case.text));
    tracing::debug!(text = case.text, rule = %parsed, "Parsed corpus sentence");
    assert_eq!(
        parsed.normalized(),
        normalized_rule(case.rule).unwrap(),
        "{} => {}",
        case.text,
        case.rule
    );
}

/// Rule to sentence, compared case-insensitively.
pub fn assert_renders(case: &CorpusCase, language: &Language) {
    let options = normalized_rule(case.rule).unwrap();
    let text = generate(&options, language, None).unwrap();
    assert_eq!(
        text.to_lowercase(),
        case.text.to_lowercase(),
        "{} => {}",
        case.rule,
        case.text
    );
}

/// Renders then parses, returning the normalized result.
pub fn round_trip(options: &Options, language: &Language) -> Options {
    let text = generate(options, language, None).unwrap();
    tracing::debug!(%text, "Rendered for round trip");
    parse(&text, language)
        .unwrap_or_else(|err| panic!("{text:?} failed to parse back: {err}"))
        .normalized()
}
