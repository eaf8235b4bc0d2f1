use regex::Regex;

use crate::parser::Parser;

/// Matches `prefix` literally, yielding it.
pub fn string(prefix: &str) -> Parser<String> {
    let prefix = prefix.to_string();

    Parser::new(move |input| {
        if input.starts_with(&prefix) {
            Ok(Some((prefix.clone(), input.advance(prefix.len()))))
        } else {
            Ok(None)
        }
    })
}

/// Matches `regex` at the very start of the input, yielding the matched text.
///
/// A match that starts further in counts as no match.
pub fn pattern(regex: Regex) -> Parser<String> {
    Parser::new(move |input| {
        let matched = regex.find(input.as_str());

        match matched {
            Some(matched) if matched.start() == 0 => Ok(Some((
                matched.as_str().to_string(),
                input.advance(matched.end()),
            ))),
            _ => Ok(None),
        }
    })
}

/// Always succeeds without consuming anything; the value says whether the
/// input was already exhausted.
pub fn end() -> Parser<bool> {
    Parser::new(|input| Ok(Some((input.is_empty(), input))))
}
