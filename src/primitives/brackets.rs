use crate::parser::Parser;

/// Matches a balanced `opening ... closing` group and runs `parser` on the
/// text between them.
///
/// Only the given pair is counted, other bracket kinds are plain text. The
/// inner parser has to consume the whole interior; if it stops short the
/// group does not match. The expression builder relies on this to reject
/// operator splits that cut through a group.
pub fn inside_matching_pair<T: 'static>(
    parser: Parser<T>,
    opening: char,
    closing: char,
) -> Parser<T> {
    Parser::new(move |input| {
        if input.first_char() != Some(opening) {
            return Ok(None);
        }

        let mut depth = 1usize;
        let mut interior_end = None;

        for (index, c) in input.as_str().char_indices().skip(1) {
            if c == closing {
                depth -= 1;
            } else if c == opening {
                depth += 1;
            }

            if depth == 0 {
                interior_end = Some(index);
                break;
            }
        }

        let Some(interior_end) = interior_end else {
            return Ok(None);
        };

        let interior = input
            .advance(opening.len_utf8())
            .take(interior_end - opening.len_utf8());

        match parser.attempt(interior)? {
            Some((value, rest)) if rest.is_empty() => {
                Ok(Some((value, input.advance(interior_end + closing.len_utf8()))))
            }
            _ => Ok(None),
        }
    })
}

pub fn parens<T: 'static>(parser: Parser<T>) -> Parser<T> {
    inside_matching_pair(parser, '(', ')')
}

pub fn curlies<T: 'static>(parser: Parser<T>) -> Parser<T> {
    inside_matching_pair(parser, '{', '}')
}

pub fn square_braces<T: 'static>(parser: Parser<T>) -> Parser<T> {
    inside_matching_pair(parser, '[', ']')
}
