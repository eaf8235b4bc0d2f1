use crate::parser::{maybe, Parser};

use super::chars::{character, digit};

/// One or more decimal digits folded into a `u64`. Values that overflow do
/// not match.
pub fn pos_num() -> Parser<u64> {
    digit().one_or_more().map(|digits| {
        digits.iter().try_fold(0u64, |acc, d| {
            acc.checked_mul(10)?
                .checked_add(u64::from(d.to_digit(10)?))
        })
    })
}

/// An optional leading `-` followed by `pos_num`.
pub fn num() -> Parser<i64> {
    maybe(character('-'))
        .and_then(pos_num())
        .map(|(sign, magnitude)| {
            let value = i128::from(magnitude);
            let value = if sign.is_some() { -value } else { value };

            i64::try_from(value).ok()
        })
}
