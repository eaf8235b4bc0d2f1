use log::trace;
use once_cell::sync::OnceCell;

use super::parser::Parser;

/// Defers building a parser until it is first run, then reuses it.
///
/// This is what makes recursive grammars possible: a rule can refer to
/// itself through `lazy(rule)` without constructing itself forever.
pub fn lazy<T: 'static, F>(thunk: F) -> Parser<T>
where
    F: Fn() -> Parser<T> + Send + Sync + 'static,
{
    let inner: OnceCell<Parser<T>> = OnceCell::new();

    Parser::new(move |input| inner.get_or_init(|| thunk()).attempt(input))
}

pub fn zip<A: 'static, B: 'static>(a: Parser<A>, b: Parser<B>) -> Parser<(A, B)> {
    a.and_then(b)
}

pub fn zip3<A: 'static, B: 'static, C: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
) -> Parser<(A, B, C)> {
    a.and_then(b).chain(c)
}

/// Tries every parser in order and keeps the first success.
///
/// An empty list never matches.
pub fn one_of<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |input| {
        for (index, parser) in parsers.iter().enumerate() {
            if let Some(matched) = parser.attempt(input)? {
                trace!("one_of: alternative {} matched", index);
                return Ok(Some(matched));
            }
        }

        Ok(None)
    })
}

/// Always succeeds: `true` and the parser's remainder on a match, `false`
/// and the untouched input otherwise.
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<bool> {
    Parser::new(move |input| match parser.attempt(input)? {
        Some((_, rest)) => Ok(Some((true, rest))),
        None => Ok(Some((false, input))),
    })
}

/// Same as `optional`.
pub fn contains<T: 'static>(parser: Parser<T>) -> Parser<bool> {
    optional(parser)
}

/// Optional: parse zero or one, keeping the value
pub fn maybe<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |input| match parser.attempt(input)? {
        Some((value, rest)) => Ok(Some((Some(value), rest))),
        None => Ok(Some((None, input))),
    })
}

/// Parses `item (separator item)*`.
///
/// Zero items is a success with the input untouched. A separator that is not
/// followed by an item fails the whole parse, so `"a,"` is rejected while
/// `"a"` and `"a,b"` are accepted.
pub fn sep_by<A: 'static, B: 'static>(item: Parser<A>, separator: Parser<B>) -> Parser<Vec<A>> {
    Parser::new(move |input| {
        let mut items = Vec::new();

        let Some((first, mut rest)) = item.attempt(input)? else {
            return Ok(Some((items, input)));
        };
        items.push(first);

        while let Some((_, after_separator)) = separator.attempt(rest)? {
            let Some((next, after_item)) = item.attempt(after_separator)? else {
                return Ok(None);
            };

            items.push(next);
            rest = after_item;
        }

        Ok(Some((items, rest)))
    })
}

/// `sep_by` that requires at least one item.
pub fn sep_by1<A: 'static, B: 'static>(item: Parser<A>, separator: Parser<B>) -> Parser<Vec<A>> {
    sep_by(item, separator).filter(|items| !items.is_empty())
}

/// Repeats `parser`, keeping only how many times it matched.
pub fn skip_many<T: 'static>(parser: Parser<T>) -> Parser<usize> {
    parser.zero_or_more().map_value(|matches| matches.len())
}

/// `skip_many` that requires at least one match.
pub fn skip_many1<T: 'static>(parser: Parser<T>) -> Parser<usize> {
    parser.one_or_more().map_value(|matches| matches.len())
}

/// Runs a tuple of parsers one after another, collecting a flat tuple of
/// their values. This backs the `zip_many!` macro.
pub trait Sequence {
    type Output;

    fn sequence(self) -> Parser<Self::Output>;
}

macro_rules! impl_sequence {
    ($($ty:ident $name:ident),+) => {
        impl<$($ty: 'static),+> Sequence for ($(Parser<$ty>,)+) {
            type Output = ($($ty,)+);

            fn sequence(self) -> Parser<Self::Output> {
                let ($($name,)+) = self;

                Parser::new(move |input| {
                    let rest = input;
                    $(
                        let Some(($name, rest)) = $name.attempt(rest)? else {
                            return Ok(None);
                        };
                    )+

                    Ok(Some((($($name,)+), rest)))
                })
            }
        }
    };
}

impl_sequence!(A a);
impl_sequence!(A a, B b);
impl_sequence!(A a, B b, C c);
impl_sequence!(A a, B b, C c, D d);
impl_sequence!(A a, B b, C c, D d, E e);
impl_sequence!(A a, B b, C c, D d, E e, F f);
impl_sequence!(A a, B b, C c, D d, E e, F f, G g);
impl_sequence!(A a, B b, C c, D d, E e, F f, G g, H h);
