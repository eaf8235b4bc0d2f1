//! The `Parser<T>` capability and its method combinators.
//!
//! A parser is a shared, immutable function from a `Span` to a
//! `ParseResult`. Every combinator builds a new parser around clones of
//! existing ones; nothing is ever mutated after construction, so a parser can
//! be cloned freely and shared between threads.

use std::{ops::BitOr, sync::Arc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    ParseResult, Span,
};

use super::tuple::{Append, Prepend};

type ParserFn<T> = Arc<dyn for<'s> Fn(Span<'s>) -> ParseResult<'s, T> + Send + Sync>;

pub struct Parser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Parser")
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parsing function.
    pub fn new<F>(parser: F) -> Self
    where
        F: for<'s> Fn(Span<'s>) -> ParseResult<'s, T> + Send + Sync + 'static,
    {
        Parser {
            parser: Arc::new(parser),
        }
    }

    /// Runs the parser on `input`.
    pub fn attempt<'s>(&self, input: Span<'s>) -> ParseResult<'s, T> {
        (self.parser)(input)
    }

    /// Runs the parser on a whole string, handing back the unconsumed text.
    pub fn parse<'s>(&self, input: &'s str) -> Result<Option<(T, &'s str)>, Error> {
        Ok(self
            .attempt(Span::new(input))?
            .map(|(value, rest)| (value, rest.as_str())))
    }

    /// Runs the parser and requires it to consume all of `input`.
    pub fn parse_complete(&self, input: &str) -> Result<T, Error> {
        match self.attempt(Span::new(input))? {
            Some((value, rest)) if rest.is_empty() => Ok(value),
            Some((_, rest)) => Err(Error::new(ErrorImpl::TrailingInput {
                remaining: rest.as_str().to_string(),
            })),
            None => Err(Error::new(ErrorImpl::NoMatch)),
        }
    }

    /// Transforms the parsed value. Returning `None` from `f` turns the whole
    /// parse into a failure.
    pub fn map<B: 'static, F>(self, f: F) -> Parser<B>
    where
        F: Fn(T) -> Option<B> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let Some((value, rest)) = self.attempt(input)? else {
                return Ok(None);
            };

            Ok(f(value).map(|mapped| (mapped, rest)))
        })
    }

    /// Transforms the parsed value with a function that cannot fail.
    pub fn map_value<B: 'static, F>(self, f: F) -> Parser<B>
    where
        F: Fn(T) -> B + Send + Sync + 'static,
    {
        self.map(move |value| Some(f(value)))
    }

    /// Keeps the parse only when `pred` holds for its value.
    pub fn filter<F>(self, pred: F) -> Parser<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            Ok(self
                .attempt(input)?
                .filter(|(value, _)| pred(value)))
        })
    }

    /// Feeds the parsed value to `f` and runs the parser it returns on the
    /// remaining input.
    pub fn flat_map<B: 'static, F>(self, f: F) -> Parser<B>
    where
        F: Fn(T) -> Parser<B> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let Some((value, rest)) = self.attempt(input)? else {
                return Ok(None);
            };

            f(value).attempt(rest)
        })
    }

    /// Alias of `flat_map`.
    pub fn bind<B: 'static, F>(self, f: F) -> Parser<B>
    where
        F: Fn(T) -> Parser<B> + Send + Sync + 'static,
    {
        self.flat_map(f)
    }

    /// Tries `self`, then `other` on the original input. The first success
    /// wins, even if `other` would have matched more.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        Parser::new(move |input| match self.attempt(input)? {
            Some(matched) => Ok(Some(matched)),
            None => other.attempt(input),
        })
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn and_then<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        Parser::new(move |input| {
            let Some((a, rest)) = self.attempt(input)? else {
                return Ok(None);
            };
            let Some((b, rest)) = other.attempt(rest)? else {
                return Ok(None);
            };

            Ok(Some(((a, b), rest)))
        })
    }

    /// Sequence onto a parser that already yields a tuple, appending `other`'s
    /// value to it: `(A, B)` then `C` gives `(A, B, C)`.
    pub fn chain<U: 'static>(self, other: Parser<U>) -> Parser<T::Output>
    where
        T: Append<U>,
        T::Output: 'static,
    {
        self.and_then(other).map_value(|(tuple, value)| tuple.append(value))
    }

    /// Sequence in front of a parser that yields a tuple, prepending this
    /// parser's value: `A` then `(B, C)` gives `(A, B, C)`.
    pub fn cons<R: 'static>(self, rest: Parser<R>) -> Parser<R::Output>
    where
        R: Prepend<T>,
        R::Output: 'static,
    {
        self.and_then(rest).map_value(|(value, tuple)| tuple.prepend(value))
    }

    /// Applies the parser until it fails. Never fails itself.
    ///
    /// The parser must consume input on every success or this never returns.
    pub fn zero_or_more(self) -> Parser<Vec<T>> {
        Parser::new(move |input| {
            let mut matches = Vec::new();
            let mut rest = input;

            while let Some((value, next)) = self.attempt(rest)? {
                matches.push(value);
                rest = next;
            }

            Ok(Some((matches, rest)))
        })
    }

    /// Like `zero_or_more` but fails when nothing matched.
    pub fn one_or_more(self) -> Parser<Vec<T>> {
        self.zero_or_more().filter(|matches| !matches.is_empty())
    }

    /// Turns a failed parse into a fatal error carrying `message`.
    pub fn or_throw(self, message: impl Into<String>) -> Parser<T> {
        let message = message.into();

        Parser::new(move |input| match self.attempt(input)? {
            Some(matched) => Ok(Some(matched)),
            None => Err(Error::fatal(message.clone())),
        })
    }
}

impl Parser<bool> {
    /// `or_throw` for boolean parsers: raises when the parsed value is
    /// `false`. A failed parse is treated the same as `false`.
    pub fn or_throw_if_false(self, message: impl Into<String>) -> Parser<bool> {
        let message = message.into();

        Parser::new(move |input| match self.attempt(input)? {
            Some((true, rest)) => Ok(Some((true, rest))),
            _ => Err(Error::fatal(message.clone())),
        })
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or(rhs)
    }
}
